//! This crate implements IDNA
//! [per the WHATWG URL Standard](https://url.spec.whatwg.org/#idna).
//!
//! It exposes the underlying algorithms from [*Unicode IDNA
//! Compatibility Processing* (Unicode Technical Standard
//! #46)](http://www.unicode.org/reports/tr46/) and [Punycode (RFC
//! 3492)](https://tools.ietf.org/html/rfc3492), together with the
//! Unicode Normalization Form C engine the processing pipeline rests
//! on. All Unicode property data is compiled in as block-compressed
//! static tables; nothing is loaded or mutated at run time, so every
//! entry point is safe to call from multiple threads.
//!
//! Quoting from [UTS #46's introduction](http://www.unicode.org/reports/tr46/#Introduction):
//!
//! > Initially, domain names were restricted to ASCII characters.
//! > A system was introduced in 2003 for internationalized domain names (IDN).
//! > This system is called Internationalizing Domain Names for Applications,
//! > or IDNA2003 for short.
//! > This mechanism supports IDNs by means of a client software transformation
//! > into a format known as Punycode.
//! > A revision of IDNA was approved in 2010 (IDNA2008).
//! > This revision has a number of incompatibilities with IDNA2003.
//! >
//! > The incompatibilities force implementers of client software,
//! > such as browsers and emailers,
//! > to face difficult choices during the transition period
//! > as registries shift from IDNA2003 to IDNA2008.
//! > This document specifies a mechanism
//! > that minimizes the impact of this transition for client software,
//! > allowing client software to access domains that are valid under either system.

mod codepoints;
mod idna_table;
pub mod nfc;
mod nfc_table;
pub mod punycode;
mod uts46;

pub use crate::uts46::{Config, Errors, Options};

/// The [domain to ASCII](https://url.spec.whatwg.org/#concept-domain-to-ascii)
/// algorithm.
///
/// Return the ASCII representation a domain name, normalizing characters
/// (upper-case to lower-case and other kinds of equivalence) and using
/// Punycode as necessary.
///
/// This process may fail.
pub fn domain_to_ascii(domain: &str) -> Result<String, Errors> {
    uts46::domain_to_ascii_impl(domain, false)
}

/// The [domain to ASCII](https://url.spec.whatwg.org/#concept-domain-to-ascii)
/// algorithm, with the `beStrict` flag set.
pub fn domain_to_ascii_strict(domain: &str) -> Result<String, Errors> {
    uts46::domain_to_ascii_impl(domain, true)
}

/// The [domain to Unicode](https://url.spec.whatwg.org/#concept-domain-to-unicode)
/// algorithm.
///
/// Return the Unicode representation of a domain name, normalizing
/// characters (upper-case to lower-case and other kinds of equivalence)
/// and decoding Punycode as necessary.
///
/// This may indicate [syntax violations](https://url.spec.whatwg.org/#syntax-violation)
/// but always returns a string for the mapped domain.
pub fn domain_to_unicode(domain: &str) -> (String, Result<(), Errors>) {
    Config::default().to_unicode(domain)
}

/// The Unicode version the compiled property tables conform to, packed
/// as `major << 24 | minor << 16 | micro << 8 | patch`.
pub const fn unicode_version() -> u32 {
    idna_table::UNICODE_VERSION
}
