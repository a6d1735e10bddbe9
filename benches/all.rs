#[macro_use]
extern crate bencher;

use bencher::{black_box, Bencher};
use uts46::Config;

fn to_ascii_plain(bench: &mut Bencher) {
    let domain = "example.com";
    bench.iter(|| Config::default().to_ascii(black_box(domain)));
}

fn to_ascii_mapped(bench: &mut Bencher) {
    let domain = "WWW.ExaMPle.cOM";
    bench.iter(|| Config::default().to_ascii(black_box(domain)));
}

fn to_ascii_punycode(bench: &mut Bencher) {
    let domain = "newyork.wünschen-auf-wiedersehen.example";
    bench.iter(|| Config::default().to_ascii(black_box(domain)));
}

fn to_ascii_fast_path(bench: &mut Bencher) {
    let domain = "www.example.com";
    let config = Config::default().input_ascii(true);
    bench.iter(|| config.to_ascii(black_box(domain)));
}

fn to_unicode_punycode(bench: &mut Bencher) {
    let domain = "xn--wnschen-auf-wiedersehen-cpc.example";
    bench.iter(|| Config::default().to_unicode(black_box(domain)));
}

fn normalize_nfc(bench: &mut Bencher) {
    let text = "s\u{323}\u{307} na\u{308}i\u{308}ve \u{1100}\u{1161}\u{11A8} cafe\u{301}";
    bench.iter(|| uts46::nfc::normalize_nfc(black_box(text)));
}

benchmark_group!(
    benches,
    to_ascii_plain,
    to_ascii_mapped,
    to_ascii_punycode,
    to_ascii_fast_path,
    to_unicode_punycode,
    normalize_nfc
);
benchmark_main!(benches);
