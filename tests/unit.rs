use assert_matches::assert_matches;
use uts46::{domain_to_ascii, domain_to_ascii_strict, domain_to_unicode, Config, Options};

fn strict() -> Config {
    Config::default()
        .use_std3_ascii_rules(true)
        .verify_dns_length(true)
}

#[test]
fn plain_ascii() {
    assert_eq!(domain_to_ascii("example.com").unwrap(), "example.com");
    assert_eq!(domain_to_ascii("EXAMPLE.COM").unwrap(), "example.com");
    assert_matches!(domain_to_ascii(""), Err(_));
}

#[test]
fn basic_mapping() {
    assert_eq!(strict().to_ascii("Bücher.example").unwrap(), "xn--bcher-kva.example");
    let (unicode, result) = Config::default().to_unicode("xn--bcher-kva.example");
    assert_eq!(unicode, "bücher.example");
    assert!(result.is_ok());
}

#[test]
fn sharp_s_depends_on_transitional() {
    let config = Config::default();
    assert_eq!(config.to_ascii("fass.de").unwrap(), "fass.de");
    assert_eq!(config.to_ascii("faß.de").unwrap(), "xn--fa-hia.de");
    assert_eq!(
        config.transitional_processing(true).to_ascii("faß.de").unwrap(),
        "fass.de"
    );
    // the capital sharp s maps to "ss" under transitional processing
    // even though its table mapping is the lowercase sharp s
    assert_eq!(
        config.transitional_processing(true).to_ascii("FASS.de").unwrap(),
        "fass.de"
    );
    assert_eq!(
        config
            .transitional_processing(true)
            .to_ascii("fa\u{1E9E}.de")
            .unwrap(),
        "fass.de"
    );
    assert_eq!(config.to_ascii("fa\u{1E9E}.de").unwrap(), "xn--fa-hia.de");
}

#[test]
fn greek_round_trip() {
    // transitional-era ACE: the decoded label carries a nonfinal sigma
    let (unicode, result) = Config::default().to_unicode("xn--nxasmq6b.example");
    assert_eq!(unicode, "βόλοσ.example");
    assert!(result.is_ok());
    assert_eq!(
        Config::default().to_ascii("xn--nxasmq6b.example").unwrap(),
        "xn--nxasmq6b.example"
    );
    // the final sigma is valid nontransitionally and round-trips
    assert_eq!(
        Config::default().to_ascii("βόλος.example").unwrap(),
        "xn--nxasmm1c.example"
    );
}

#[test]
fn hyphen_rules() {
    let config = Config::default().check_hyphens(true);
    assert!(config.to_ascii("a.b-c").is_ok());
    assert_matches!(config.to_ascii("-a.b"), Err(_));
    assert_matches!(config.to_ascii("a-.b"), Err(_));
    // hyphens in positions 3 and 4
    assert_matches!(config.to_ascii("ab--cd.e"), Err(_));
    // without CheckHyphens those shapes pass
    assert!(Config::default().to_ascii("-a.b-").is_ok());
}

#[test]
fn punycode_prefix_special_cases() {
    assert_matches!(Config::default().to_ascii("xn--"), Err(_));
    assert_matches!(Config::default().to_ascii("xn--a-"), Err(_));
    assert_matches!(Config::default().to_ascii("xn--a-.example"), Err(_));
    let (unicode, result) = Config::default().to_unicode("xn--a-");
    assert_eq!(unicode, "a");
    assert!(result.is_err());
    // an undecodable ACE label is kept verbatim in to_unicode output
    let (unicode, result) = Config::default().to_unicode("xn--!!!.example");
    assert_eq!(unicode, "xn--!!!.example");
    assert!(result.is_err());
}

#[test]
fn nfc_applies_before_breaking() {
    // a + combining ring composes to å, then encodes
    assert_eq!(
        Config::default().to_ascii("a\u{30A}.example").unwrap(),
        "xn--5ca.example"
    );
    assert_eq!(
        uts46::nfc::normalize_nfc("A\u{30A}"),
        "\u{C5}"
    );
    // a decoded ACE label must already be NFC
    let mut ace = String::from("xn--");
    let mut buf = String::new();
    uts46::punycode::encode_into(&[0x61, 0x301, 0x301], &mut buf).unwrap();
    ace.push_str(&buf);
    assert_matches!(Config::default().to_ascii(&ace), Err(_));
}

#[test]
fn dns_length_limits() {
    let config = Config::default().verify_dns_length(true);
    assert!(config.to_ascii(&"a".repeat(63)).is_ok());
    assert_matches!(config.to_ascii(&"a".repeat(64)), Err(_));

    let label = "a".repeat(49);
    let domain = format!("{0}.{0}.{0}.{0}.{0}.abc", label); // 253 bytes
    assert_eq!(domain.len(), 253);
    assert!(config.to_ascii(&domain).is_ok());
    let domain = format!("{0}.{0}.{0}.{0}.{0}.abcd", label); // 254 bytes
    assert_matches!(config.to_ascii(&domain), Err(_));

    // empty labels and empty domains
    assert_matches!(config.to_ascii("a..b"), Err(_));
    assert_matches!(config.to_ascii(""), Err(_));
    assert_matches!(config.to_ascii("."), Err(_));

    // one trailing root label is allowed and emitted
    assert_eq!(config.to_ascii("example.").unwrap(), "example.");

    // without the flag none of this is checked
    assert_eq!(Config::default().to_ascii("a..b").unwrap(), "a..b");
    let (unicode, result) = Config::default().to_unicode("a..b");
    assert_eq!(unicode, "a..b");
    assert!(result.is_ok());
}

#[test]
fn bidi_domains() {
    let config = Config::default();
    // pure RTL
    assert_eq!(config.to_ascii("مثال.example").unwrap(), "xn--mgbh0fb.example");
    // Hebrew with European digits passes; trailing Arabic-Indic digit
    // mixed with EN fails
    assert!(config.to_ascii("\u{5D0}12.example").is_ok());
    assert_matches!(config.to_ascii("\u{627}1\u{661}.example"), Err(_));
    // an LTR label is constrained once the domain has an RTL label
    assert_matches!(config.to_ascii("0a.\u{5D0}"), Err(_));
    // the same LTR label alone is fine
    assert!(config.to_ascii("0a.b").is_ok());
    // bidi checking can be turned off
    assert!(config.check_bidi(false).to_ascii("0a.\u{5D0}").is_ok());
}

#[test]
fn joiner_contexts() {
    let config = Config::default();
    // virama context
    assert!(config.to_ascii("\u{915}\u{94D}\u{200D}").is_ok());
    // joining-type context around ZWNJ
    assert!(config.to_ascii("\u{628}\u{200C}\u{628}").is_ok());
    assert_matches!(config.to_ascii("a\u{200C}b"), Err(_));
    // with CheckJoiners off the ZWNJ is simply a deviation character
    assert!(config.check_joiners(false).to_ascii("a\u{200C}b").is_ok());
    // under transitional processing ZWNJ maps away entirely
    assert_eq!(
        config.transitional_processing(true).to_ascii("a\u{200C}b").unwrap(),
        "ab"
    );
}

#[test]
fn std3_rules() {
    let config = Config::default();
    assert_eq!(config.to_ascii("a_b.example").unwrap(), "a_b.example");
    assert_matches!(config.use_std3_ascii_rules(true).to_ascii("a_b.example"), Err(_));
    // a mapped STD3 character: the fullwidth exclamation mark
    assert_eq!(config.to_ascii("a\u{FF01}").unwrap(), "a!");
    assert_matches!(config.use_std3_ascii_rules(true).to_ascii("a\u{FF01}"), Err(_));
}

#[test]
fn disallowed_characters() {
    // plain disallowed code points flow through the mapper and fail
    // validation
    assert_matches!(Config::default().to_ascii("a\u{FFFF}b"), Err(_));
    let (unicode, result) = Config::default().to_unicode("a\u{FFFF}b");
    assert_eq!(unicode, "a\u{FFFF}b");
    assert!(result.is_err());
    // an NFC-composable disallowed code point fails to_ascii up front
    // (U+2260 is disallowed under STD3 as "=" + slash)
    assert_matches!(
        Config::default().use_std3_ascii_rules(true).to_ascii("=\u{338}"),
        Err(_)
    );
}

#[test]
fn ascii_fast_path() {
    let config = Config::default().input_ascii(true);
    assert_eq!(config.to_ascii("ABC.Example").unwrap(), "abc.example");
    // ACE labels are still decoded and validated
    assert_eq!(config.to_ascii("xn--bcher-kva.de").unwrap(), "xn--bcher-kva.de");
    let (unicode, result) = config.to_unicode("xn--bcher-kva.DE");
    assert_eq!(unicode, "bücher.de");
    assert!(result.is_ok());
    // STD3 violations are rejected in the mapper for to_ascii
    assert_matches!(config.use_std3_ascii_rules(true).to_ascii("a_b"), Err(_));
}

#[test]
fn other_input_encodings() {
    let config = Config::default();
    // UTF-8 bytes with an ill-formed sequence: U+FFFD is disallowed
    assert_eq!(config.to_ascii_bytes("Bücher.de".as_bytes()).unwrap(), "xn--bcher-kva.de");
    assert_matches!(config.to_ascii_bytes(b"a\xC2.b"), Err(_));
    // UTF-16 with a surrogate pair and with a lone surrogate
    let utf16: Vec<u16> = "Bücher.de".encode_utf16().collect();
    assert_eq!(config.to_ascii_utf16(&utf16).unwrap(), "xn--bcher-kva.de");
    assert_matches!(config.to_ascii_utf16(&[0x61, 0xD800, 0x62]), Err(_));
    let (unicode, result) = config.to_unicode_utf16(&[0x61, 0xD800, 0x62]);
    assert_eq!(unicode, "a\u{FFFD}b");
    assert!(result.is_err());
    // UTF-32
    let utf32: Vec<u32> = "faß.de".chars().map(|c| c as u32).collect();
    assert_eq!(config.to_ascii_utf32(&utf32).unwrap(), "xn--fa-hia.de");
}

#[test]
fn to_ascii_is_idempotent_on_its_output() {
    for input in ["Bücher.example", "faß.de", "مثال.example", "ex-ample.co."] {
        let once = Config::default().to_ascii(input).unwrap();
        assert!(once.is_ascii());
        assert_eq!(Config::default().to_ascii(&once).unwrap(), once);
    }
}

#[test]
fn to_unicode_is_idempotent_on_its_output() {
    for input in ["xn--bcher-kva.example", "Bücher.example", "abc.example"] {
        let (once, result) = Config::default().to_unicode(input);
        assert!(result.is_ok());
        let (twice, result) = Config::default().to_unicode(&once);
        assert!(result.is_ok());
        assert_eq!(twice, once);
    }
}

#[test]
fn to_unicode_inverts_to_ascii() {
    for input in ["Bücher.example", "βόλος.example", "نامه\u{200C}ای.example"] {
        let ascii = Config::default().to_ascii(input).unwrap();
        let (unicode, result) = Config::default().to_unicode(&ascii);
        assert!(result.is_ok());
        let (mapped_input, _) = Config::default().to_unicode(input);
        assert_eq!(unicode, mapped_input);
    }
}

#[test]
fn whatwg_wrappers() {
    assert_eq!(domain_to_ascii("motörhead.com").unwrap(), "xn--motrhead-p4a.com");
    assert_matches!(domain_to_ascii_strict("a_b.example"), Err(_));
    assert_eq!(domain_to_ascii_strict("Motörhead.com").unwrap(), "xn--motrhead-p4a.com");
    let (unicode, result) = domain_to_unicode("xn--mgbh0fb.example");
    assert_eq!(unicode, "مثال.example");
    assert!(result.is_ok());
    // mapping to the empty string is a wrapper-level failure
    assert_matches!(domain_to_ascii("\u{AD}"), Err(_));
}

#[test]
fn options_bit_values_are_stable() {
    assert_eq!(Options::USE_STD3_ASCII_RULES.bits(), 0x0001);
    assert_eq!(Options::TRANSITIONAL.bits(), 0x0002);
    assert_eq!(Options::VERIFY_DNS_LENGTH.bits(), 0x0004);
    assert_eq!(Options::CHECK_HYPHENS.bits(), 0x0008);
    assert_eq!(Options::CHECK_BIDI.bits(), 0x0010);
    assert_eq!(Options::CHECK_JOINERS.bits(), 0x0020);
    assert_eq!(Options::INPUT_ASCII.bits(), 0x1000);
}

#[test]
fn unicode_version_is_exposed() {
    let version = uts46::unicode_version();
    assert_eq!(version >> 24, 14);
    assert_eq!((version >> 16) & 0xFF, 0);
}
