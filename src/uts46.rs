//! [*Unicode IDNA Compatibility Processing*
//! (Unicode Technical Standard #46)](http://www.unicode.org/reports/tr46/)

use crate::codepoints::{Utf16CodePoints, Utf8CodePoints};
use crate::idna_table::{self, ASCII_DATA};
use crate::nfc;
use crate::punycode;
use bitflags::bitflags;
use std::{error::Error as StdError, fmt};

const PUNYCODE_PREFIX: [u32; 4] = [0x78, 0x6E, 0x2D, 0x2D]; // "xn--"
const DOT: u32 = 0x2E;
const HYPHEN: u32 = 0x2D;

bitflags! {
    /// Processing options.
    ///
    /// The bit values are stable; callers may persist them. `Config`
    /// offers a builder over the same set.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct Options: u32 {
        const USE_STD3_ASCII_RULES = 0x0001;
        const TRANSITIONAL = 0x0002;
        const VERIFY_DNS_LENGTH = 0x0004;
        const CHECK_HYPHENS = 0x0008;
        const CHECK_BIDI = 0x0010;
        const CHECK_JOINERS = 0x0020;
        /// The caller asserts the input is pure ASCII; the mapper takes
        /// a table-free fast path and normalization is skipped.
        const INPUT_ASCII = 0x1000;
    }
}

// Bidi state threaded across the labels of one domain.
const IS_BIDI_DOMAIN: u32 = 0x01;
const IS_BIDI_ERROR: u32 = 0x02;

/// Errors recorded during UTS #46 processing.
///
/// This is opaque, indicating what types of errors have been
/// encountered at least once. IDNA compliance requires rejecting the
/// name, not explaining why.
#[derive(Debug, Default)]
pub struct Errors {
    punycode: bool,
    validity_criteria: bool,
    disallowed_character: bool,
    too_long_for_dns: bool,
    too_short_for_dns: bool,
}

impl From<Errors> for Result<(), Errors> {
    fn from(e: Errors) -> Result<(), Errors> {
        let failed = e.punycode
            || e.validity_criteria
            || e.disallowed_character
            || e.too_long_for_dns
            || e.too_short_for_dns;
        if !failed {
            Ok(())
        } else {
            Err(e)
        }
    }
}

impl StdError for Errors {}

impl fmt::Display for Errors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

impl Errors {
    pub(crate) fn empty_result() -> Self {
        Errors {
            too_short_for_dns: true,
            ..Errors::default()
        }
    }
}

/// UTS #46 configuration, as a reusable builder.
///
/// The defaults are those of <https://url.spec.whatwg.org/#idna>:
/// CheckBidi and CheckJoiners on, everything else off.
#[derive(Clone, Copy)]
pub struct Config {
    options: Options,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            options: Options::CHECK_BIDI | Options::CHECK_JOINERS,
        }
    }
}

impl From<Options> for Config {
    fn from(options: Options) -> Self {
        Config { options }
    }
}

impl Config {
    #[inline]
    fn set(mut self, flag: Options, value: bool) -> Self {
        self.options.set(flag, value);
        self
    }

    #[inline]
    pub fn use_std3_ascii_rules(self, value: bool) -> Self {
        self.set(Options::USE_STD3_ASCII_RULES, value)
    }

    #[inline]
    pub fn transitional_processing(self, value: bool) -> Self {
        self.set(Options::TRANSITIONAL, value)
    }

    #[inline]
    pub fn verify_dns_length(self, value: bool) -> Self {
        self.set(Options::VERIFY_DNS_LENGTH, value)
    }

    #[inline]
    pub fn check_hyphens(self, value: bool) -> Self {
        self.set(Options::CHECK_HYPHENS, value)
    }

    #[inline]
    pub fn check_bidi(self, value: bool) -> Self {
        self.set(Options::CHECK_BIDI, value)
    }

    #[inline]
    pub fn check_joiners(self, value: bool) -> Self {
        self.set(Options::CHECK_JOINERS, value)
    }

    #[inline]
    pub fn input_ascii(self, value: bool) -> Self {
        self.set(Options::INPUT_ASCII, value)
    }

    /// <http://www.unicode.org/reports/tr46/#ToASCII>
    pub fn to_ascii(self, domain: &str) -> Result<String, Errors> {
        to_ascii_impl(domain.chars().map(|c| c as u32), self.options)
    }

    /// `to_ascii` over raw bytes, decoded as UTF-8 with U+FFFD
    /// replacement of ill-formed sequences.
    pub fn to_ascii_bytes(self, domain: &[u8]) -> Result<String, Errors> {
        to_ascii_impl(Utf8CodePoints::new(domain), self.options)
    }

    /// `to_ascii` over UTF-16; unpaired surrogates are processed as
    /// their numeric values and rejected by validation.
    pub fn to_ascii_utf16(self, domain: &[u16]) -> Result<String, Errors> {
        to_ascii_impl(Utf16CodePoints::new(domain), self.options)
    }

    /// `to_ascii` over UTF-32 code points.
    pub fn to_ascii_utf32(self, domain: &[u32]) -> Result<String, Errors> {
        to_ascii_impl(domain.iter().copied(), self.options)
    }

    /// <http://www.unicode.org/reports/tr46/#ToUnicode>
    ///
    /// Always returns output; validation failures only set the error.
    pub fn to_unicode(self, domain: &str) -> (String, Result<(), Errors>) {
        to_unicode_impl(domain.chars().map(|c| c as u32), self.options)
    }

    /// `to_unicode` over raw bytes, decoded as UTF-8 with U+FFFD
    /// replacement of ill-formed sequences.
    pub fn to_unicode_bytes(self, domain: &[u8]) -> (String, Result<(), Errors>) {
        to_unicode_impl(Utf8CodePoints::new(domain), self.options)
    }

    /// `to_unicode` over UTF-16.
    pub fn to_unicode_utf16(self, domain: &[u16]) -> (String, Result<(), Errors>) {
        to_unicode_impl(Utf16CodePoints::new(domain), self.options)
    }

    /// `to_unicode` over UTF-32 code points.
    pub fn to_unicode_utf32(self, domain: &[u32]) -> (String, Result<(), Errors>) {
        to_unicode_impl(domain.iter().copied(), self.options)
    }
}

/// <http://www.unicode.org/reports/tr46/#Processing>
///
/// Returns the mapped-and-normalized buffer (which to_ascii re-encodes),
/// the label-decoded buffer (which to_unicode emits) and the errors
/// recorded so far. Since Unicode 15.1 the mapper itself records no
/// error on a disallowed code point; the validator does. The one
/// exception is a disallowed code point NFC could fold into an allowed
/// composite, which must fail to_ascii before normalization hides it.
fn processing<I>(input: I, options: Options, is_to_ascii: bool) -> (Vec<u32>, Vec<u32>, Errors)
where
    I: Iterator<Item = u32>,
{
    let mut errors = Errors::default();
    let mut mapped: Vec<u32> = Vec::new();

    // P1 - Map
    if options.contains(Options::INPUT_ASCII) {
        let use_std3 = options.contains(Options::USE_STD3_ASCII_RULES);
        for cp in input {
            debug_assert!(cp < 0x80);
            let class = ASCII_DATA[(cp & 0x7F) as usize];
            // every ASCII byte carries a status, so only STD3 can reject
            debug_assert!(class & (idna_table::AC_VALID | idna_table::AC_MAPPED) != 0);
            if is_to_ascii && use_std3 && class & idna_table::AC_DISALLOWED_STD3 != 0 {
                errors.disallowed_character = true;
                return (mapped, Vec::new(), errors);
            }
            mapped.push(if class & idna_table::AC_MAPPED != 0 {
                cp + 0x20 // A-Z to a-z
            } else {
                cp
            });
        }
        // P2 is skipped: ASCII is already NFC
    } else {
        let status_mask = idna_table::status_mask(options.contains(Options::USE_STD3_ASCII_RULES));
        for cp in input {
            let value = idna_table::char_info(cp);
            match value & status_mask {
                idna_table::CP_VALID => mapped.push(cp),
                idna_table::CP_DEVIATION => {
                    if options.contains(Options::TRANSITIONAL) {
                        idna_table::apply_mapping(value, &mut mapped);
                    } else {
                        mapped.push(cp);
                    }
                }
                idna_table::CP_MAPPED => {
                    if options.contains(Options::TRANSITIONAL) && cp == 0x1E9E {
                        // capital sharp s becomes "ss"
                        mapped.extend_from_slice(&[0x73, 0x73]);
                    } else {
                        idna_table::apply_mapping(value, &mut mapped);
                    }
                }
                _ => {
                    // CP_DISALLOWED, or the STD3 variants under
                    // UseSTD3ASCIIRules; the validator reports these.
                    if is_to_ascii {
                        let composable = if value == idna_table::CP_DISALLOWED {
                            idna_table::is_comp_disallowed(cp)
                        } else {
                            idna_table::is_comp_disallowed_std3(cp)
                        };
                        if composable {
                            errors.disallowed_character = true;
                            return (mapped, Vec::new(), errors);
                        }
                    }
                    mapped.push(cp);
                }
            }
        }

        // P2 - Normalize
        nfc::normalize(&mut mapped);
    }

    // P3 - Break, P4 - Convert/Validate
    let mut bidi_state = 0u32;
    let mut valid = true;
    let mut decoded: Vec<u32> = Vec::with_capacity(mapped.len());
    let mut first_label = true;
    for label in mapped.split(|&cp| cp == DOT) {
        if first_label {
            first_label = false;
        } else {
            decoded.push(DOT);
        }
        if label.starts_with(&PUNYCODE_PREFIX) {
            // ICU compatibility: a bare "xn--" and an ACE label with a
            // trailing hyphen cannot round-trip and are rejected even
            // when the Punycode decoder would accept them.
            if label.len() == 4 || (label[label.len() - 1] == HYPHEN && label.len() != 5) {
                errors.punycode = true;
            }
            let mut ulabel: Vec<u32> = Vec::new();
            match punycode::decode_into(&label[4..], &mut ulabel) {
                Ok(()) => {
                    valid &= validate_label(
                        &ulabel,
                        options & !Options::TRANSITIONAL,
                        true,
                        &mut bidi_state,
                    );
                    decoded.extend_from_slice(&ulabel);
                }
                Err(_) => {
                    errors.punycode = true;
                    decoded.extend_from_slice(label);
                }
            }
        } else {
            valid &= validate_label(label, options, false, &mut bidi_state);
            decoded.extend_from_slice(label);
        }
    }
    if !valid {
        errors.validity_criteria = true;
    }

    (mapped, decoded, errors)
}

/// Check the validity criteria for one label.
///
/// `full_check` is set for labels that came out of the Punycode
/// decoder; mapped labels are NFC by construction, so V1 is skipped
/// for them.
///
/// <http://www.unicode.org/reports/tr46/#Validity_Criteria>
fn validate_label(label: &[u32], options: Options, full_check: bool, bidi_state: &mut u32) -> bool {
    if label.is_empty() {
        return true;
    }

    // V1 - the label must be in Unicode Normalization Form NFC
    if full_check && !nfc::is_normalized(label) {
        return false;
    }

    if options.contains(Options::CHECK_HYPHENS) {
        // V2 - no hyphens in both the third and fourth position
        if label.len() >= 4 && label[2] == HYPHEN && label[3] == HYPHEN {
            return false;
        }
        // V3 - neither begin nor end with a hyphen
        if label[0] == HYPHEN || label[label.len() - 1] == HYPHEN {
            return false;
        }
    } else {
        // V4 - without CheckHyphens the label must not begin with "xn--"
        // https://github.com/whatwg/url/issues/603#issuecomment-842625331
        if label.starts_with(&PUNYCODE_PREFIX) {
            return false;
        }
    }

    // V5 - must not begin with a combining mark
    if idna_table::char_info(label[0]) & idna_table::CAT_MARK != 0 {
        return false;
    }

    // V6 - every code point must be valid under the effective mask
    let valid_mask = idna_table::valid_mask(
        options.contains(Options::USE_STD3_ASCII_RULES),
        options.contains(Options::TRANSITIONAL),
    );
    for &cp in label {
        if idna_table::char_info(cp) & valid_mask != idna_table::CP_VALID {
            return false;
        }
    }

    // V7 - CONTEXTJ rules for the zero width joiners
    if options.contains(Options::CHECK_JOINERS) && !passes_joiners(label) {
        return false;
    }

    // V8 - the Bidi rule
    if options.contains(Options::CHECK_BIDI) && !validate_bidi(label, bidi_state) {
        return false;
    }

    true
}

/// CONTEXTJ (<https://tools.ietf.org/html/rfc5892#appendix-A>): ZWNJ
/// needs a preceding Virama, or a `(L|D) T*` run before it and a
/// `T* (R|D)` run after it; ZWJ needs a preceding Virama.
fn passes_joiners(label: &[u32]) -> bool {
    let mut i = 0;
    while i < label.len() {
        let start = i;
        let cp = label[i];
        i += 1;
        if cp == 0x200C {
            // ZERO WIDTH NON-JOINER
            if start == 0 {
                return false;
            }
            let mut j = start - 1;
            let mut flags = idna_table::char_info(label[j]);
            if flags & idna_table::CAT_VIRAMA == 0 {
                // {R,D} is required on the right
                if i == label.len() {
                    return false;
                }
                // (Joining_Type:{L,D}) (Joining_Type:T)* ZWNJ
                while flags & (idna_table::CAT_JOINER_L | idna_table::CAT_JOINER_D) == 0 {
                    if flags & idna_table::CAT_JOINER_T == 0 || j == 0 {
                        return false;
                    }
                    j -= 1;
                    flags = idna_table::char_info(label[j]);
                }
                // ZWNJ (Joining_Type:T)* (Joining_Type:{R,D})
                flags = idna_table::char_info(label[i]);
                i += 1;
                while flags & (idna_table::CAT_JOINER_R | idna_table::CAT_JOINER_D) == 0 {
                    if flags & idna_table::CAT_JOINER_T == 0 || i == label.len() {
                        return false;
                    }
                    flags = idna_table::char_info(label[i]);
                    i += 1;
                }
                // ZWNJ is Non_Joining and ZWJ is Join_Causing, neither
                // L, D, R nor T, so the outer scan can resume from the
                // advanced position without re-reading them.
            }
        } else if cp == 0x200D {
            // ZERO WIDTH JOINER
            if start == 0 || idna_table::char_info(label[start - 1]) & idna_table::CAT_VIRAMA == 0 {
                return false;
            }
        }
    }
    true
}

/// A "Bidi domain name" contains at least one RTL label, which in turn
/// is one with at least one character of type R, AL or AN.
/// <https://tools.ietf.org/html/rfc5893#section-2>
#[inline]
fn is_bidi(label: &[u32]) -> bool {
    label.iter().any(|&cp| {
        idna_table::char_info(cp) & (idna_table::CAT_BIDI_R_AL | idna_table::CAT_BIDI_AN) != 0
    })
}

fn validate_bidi(label: &[u32], bidi_state: &mut u32) -> bool {
    use crate::idna_table::{
        CAT_BIDI_AN as AN, CAT_BIDI_EN as EN, CAT_BIDI_ES_CS_ET_ON_BN as ES_CS_ET_ON_BN,
        CAT_BIDI_L as L, CAT_BIDI_NSM as NSM, CAT_BIDI_R_AL as R_AL,
    };

    if label.is_empty() {
        return true;
    }

    // After a pending bidi error every remaining label must prove the
    // domain is not a bidi domain.
    if *bidi_state & IS_BIDI_ERROR != 0 {
        return !is_bidi(label);
    }

    // 1. the first character must be of bidi property L, R or AL
    let first = idna_table::char_info(label[0]);
    if first & R_AL != 0 {
        // RTL label
        let mut end_flags = first;
        let mut all_flags = 0;
        for &cp in &label[1..] {
            let flags = idna_table::char_info(cp);
            // 2. only R, AL, AN, EN, ES, CS, ET, ON, BN, NSM
            if flags & (R_AL | AN | EN | ES_CS_ET_ON_BN | NSM) == 0 {
                return false;
            }
            // 3. track the last non-NSM character
            if flags & NSM == 0 {
                end_flags = flags;
            }
            all_flags |= flags;
        }
        // 3. the label must end with R, AL, AN or EN
        if end_flags & (R_AL | AN | EN) == 0 {
            return false;
        }
        // 4. EN and AN must not both appear
        if all_flags & (AN | EN) == (AN | EN) {
            return false;
        }
        *bidi_state |= IS_BIDI_DOMAIN;
    } else if first & L != 0 {
        // LTR label; a violation is only fatal once the domain is known
        // to be bidi, otherwise it parks the domain in the pending-error
        // state checked above.
        let mut end_flags = first;
        for (position, &cp) in label.iter().enumerate().skip(1) {
            let flags = idna_table::char_info(cp);
            // 5. only L, EN, ES, CS, ET, ON, BN, NSM; 6. the last non-NSM
            if flags & (L | EN | ES_CS_ET_ON_BN) != 0 {
                end_flags = flags;
            } else if flags & NSM == 0 {
                if *bidi_state & IS_BIDI_DOMAIN != 0
                    || flags & (R_AL | AN) != 0
                    || is_bidi(&label[position + 1..])
                {
                    return false;
                }
                *bidi_state |= IS_BIDI_ERROR;
            }
        }
        // 6. the last non-NSM character must be L or EN
        if end_flags & (L | EN) == 0 {
            if *bidi_state & IS_BIDI_DOMAIN != 0 {
                return false;
            }
            *bidi_state |= IS_BIDI_ERROR;
        }
    } else {
        if *bidi_state & IS_BIDI_DOMAIN != 0 || first & (R_AL | AN) != 0 || is_bidi(label) {
            return false;
        }
        *bidi_state |= IS_BIDI_ERROR;
    }
    true
}

fn to_ascii_impl<I>(input: I, options: Options) -> Result<String, Errors>
where
    I: Iterator<Item = u32>,
{
    // A1
    let (mapped, _, mut errors) = processing(input, options, true);

    // A2 - break at U+002E; A3 - encode each label with non-ASCII
    let mut result = String::with_capacity(mapped.len());
    let mut first_label = true;
    for label in mapped.split(|&cp| cp == DOT) {
        if first_label {
            first_label = false;
        } else {
            result.push('.');
        }
        if label.iter().any(|&cp| cp >= 0x80) {
            let mut alabel = String::new();
            match punycode::encode_into(label, &mut alabel) {
                Ok(()) => {
                    result.push_str("xn--");
                    result.push_str(&alabel);
                }
                Err(_) => {
                    errors.punycode = true;
                    for &cp in label {
                        result.push(
                            core::char::from_u32(cp).unwrap_or(core::char::REPLACEMENT_CHARACTER),
                        );
                    }
                }
            }
        } else {
            for &cp in label {
                result.push(cp as u8 as char);
            }
        }
    }

    // A4 - DNS length restrictions, excluding a trailing root label
    if options.contains(Options::VERIFY_DNS_LENGTH) {
        let domain = result.strip_suffix('.').unwrap_or(&result);
        if domain.is_empty() || domain.split('.').any(|label| label.is_empty()) {
            errors.too_short_for_dns = true;
        }
        if domain.len() > 253 || domain.split('.').any(|label| label.len() > 63) {
            errors.too_long_for_dns = true;
        }
    }

    Result::from(errors).map(|()| result)
}

fn to_unicode_impl<I>(input: I, options: Options) -> (String, Result<(), Errors>)
where
    I: Iterator<Item = u32>,
{
    // Processing, using Nontransitional_Processing
    let (_, decoded, errors) = processing(input, options & !Options::TRANSITIONAL, false);
    let output = decoded
        .iter()
        .map(|&cp| core::char::from_u32(cp).unwrap_or(core::char::REPLACEMENT_CHARACTER))
        .collect();
    (output, errors.into())
}

pub(crate) fn domain_to_ascii_impl(domain: &str, be_strict: bool) -> Result<String, Errors> {
    let result = Config::default()
        .use_std3_ascii_rules(be_strict)
        .verify_dns_length(be_strict)
        .to_ascii(domain)?;
    if result.is_empty() {
        return Err(Errors::empty_result());
    }
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cps(s: &str) -> Vec<u32> {
        s.chars().map(|c| c as u32).collect()
    }

    #[test]
    fn validate_rejects_leading_mark() {
        let mut state = 0;
        assert!(!validate_label(&cps("\u{301}a"), Options::empty(), false, &mut state));
        assert!(validate_label(&cps("a\u{301}"), Options::empty(), false, &mut state));
    }

    #[test]
    fn validate_hyphen_positions() {
        let mut state = 0;
        let opts = Options::CHECK_HYPHENS;
        assert!(validate_label(&cps("a-b"), opts, false, &mut state));
        assert!(!validate_label(&cps("ab--c"), opts, false, &mut state));
        assert!(!validate_label(&cps("-ab"), opts, false, &mut state));
        assert!(!validate_label(&cps("ab-"), opts, false, &mut state));
        // without CheckHyphens the ACE prefix is the rejected shape
        assert!(validate_label(&cps("-ab"), Options::empty(), false, &mut state));
        assert!(!validate_label(&cps("xn--a"), Options::empty(), false, &mut state));
    }

    #[test]
    fn bidi_state_spans_labels() {
        // a label not starting with L, R or AL stays pending until an
        // RTL label shows up
        let mut state = 0;
        assert!(validate_bidi(&cps("0abc"), &mut state));
        assert_eq!(state & IS_BIDI_ERROR, IS_BIDI_ERROR);
        assert!(!validate_bidi(&cps("\u{5D0}"), &mut state));
        // in the reverse order the same pair fails on the spot
        let mut state = 0;
        assert!(validate_bidi(&cps("\u{5D0}"), &mut state));
        assert_eq!(state & IS_BIDI_DOMAIN, IS_BIDI_DOMAIN);
        assert!(!validate_bidi(&cps("0abc"), &mut state));
    }

    #[test]
    fn rtl_label_rules() {
        // Hebrew with European digits
        let mut state = 0;
        assert!(validate_bidi(&cps("\u{5D0}12"), &mut state));
        // EN and AN together are out
        let mut state = 0;
        assert!(!validate_bidi(&cps("\u{627}1\u{661}"), &mut state));
    }

    #[test]
    fn joiner_contexts() {
        // Devanagari ka + virama + ZWJ
        assert!(passes_joiners(&cps("\u{915}\u{94D}\u{200D}")));
        // ZWJ without virama
        assert!(!passes_joiners(&cps("a\u{200D}b")));
        // Arabic beh (dual-joining) on both sides of ZWNJ
        assert!(passes_joiners(&cps("\u{628}\u{200C}\u{628}")));
        // ZWNJ with no joining context
        assert!(!passes_joiners(&cps("a\u{200C}b")));
        // ZWNJ at the edges
        assert!(!passes_joiners(&cps("\u{200C}a")));
        assert!(!passes_joiners(&cps("\u{628}\u{200C}")));
    }
}
