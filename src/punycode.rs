//! Punycode ([RFC 3492](http://tools.ietf.org/html/rfc3492)) implementation.
//!
//! Since Punycode fundamentally works on unicode code points,
//! `encode_into` and `decode_into` take and produce slices and vectors
//! of `u32` scalar values. `encode_str` and `decode_to_string` provide
//! convenience wrappers that convert from and to Rust's UTF-8 based
//! `str` and `String` types.

use std::{error::Error as StdError, fmt};

// Bootstring parameters for Punycode
static BASE: u32 = 36;
static T_MIN: u32 = 1;
static T_MAX: u32 = 26;
static SKEW: u32 = 38;
static DAMP: u32 = 700;
static INITIAL_BIAS: u32 = 72;
static INITIAL_N: u32 = 0x80;
static DELIMITER: u32 = 0x2D;

/// Cap on the number of code points the decoder may produce.
const MAX_CODE_POINTS: usize = u32::MAX as usize;

/// Decoding or encoding failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// Malformed input: a non-basic code point before the delimiter, an
    /// invalid digit, or a code point beyond U+10FFFF on the encode side.
    BadInput,
    /// The output would exceed the decoder's code-point cap.
    BigOutput,
    /// Wider integers would be needed to process this input.
    Overflow,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Error::BadInput => "invalid punycode input",
            Error::BigOutput => "punycode output too large",
            Error::Overflow => "punycode arithmetic overflow",
        })
    }
}

impl StdError for Error {}

/// Bias adaptation function.
#[inline]
fn adapt(mut delta: u32, num_points: u32, first_time: bool) -> u32 {
    delta /= if first_time { DAMP } else { 2 };
    delta += delta / num_points;
    let mut k = 0;
    while delta > ((BASE - T_MIN) * T_MAX) / 2 {
        delta /= BASE - T_MIN;
        k += BASE;
    }
    k + (((BASE - T_MIN + 1) * delta) / (delta + SKEW))
}

#[inline]
fn decode_digit(cp: u32) -> u32 {
    match cp {
        0x30..=0x39 => cp - 0x30 + 26, // 0..9
        0x41..=0x5A => cp - 0x41,      // A..Z
        0x61..=0x7A => cp - 0x61,      // a..z
        _ => BASE,
    }
}

#[inline]
fn encode_digit(d: u32) -> char {
    // 0..25 map to ASCII a..z, 26..35 map to ASCII 0..9
    let byte = if d < 26 { d as u8 + b'a' } else { d as u8 - 26 + b'0' };
    byte as char
}

/// Convert Punycode to an Unicode `String`.
///
/// This is a convenience wrapper around `decode_into`; code points that
/// are not Unicode scalar values are reported as `BadInput`.
pub fn decode_to_string(input: &str) -> Result<String, Error> {
    let cps: Vec<u32> = input.chars().map(|c| c as u32).collect();
    let mut output = Vec::new();
    decode_into(&cps, &mut output)?;
    output
        .iter()
        .map(|&cp| core::char::from_u32(cp).ok_or(Error::BadInput))
        .collect()
}

/// Convert an Unicode `str` to Punycode.
///
/// This is a convenience wrapper around `encode_into`.
pub fn encode_str(input: &str) -> Result<String, Error> {
    let cps: Vec<u32> = input.chars().map(|c| c as u32).collect();
    let mut output = String::with_capacity(input.len());
    encode_into(&cps, &mut output)?;
    Ok(output)
}

/// Decode Punycode, appending the code points to `output`.
///
/// Everything before the last delimiter must be basic (ASCII) and is
/// copied verbatim; the rest is the delta stream. Decoded values are
/// not checked against the Unicode scalar range: the caller validates
/// them (surrogates are disallowed by the IDNA status table).
pub fn decode_into(input: &[u32], output: &mut Vec<u32>) -> Result<(), Error> {
    let start_len = output.len();
    let (basic, mut rest) = match input.iter().rposition(|&cp| cp == DELIMITER) {
        // a delimiter with no basic code points before it
        Some(0) => return Err(Error::BadInput),
        Some(position) => (&input[..position], &input[position + 1..]),
        None => (&input[..0], input),
    };
    if basic.len() > MAX_CODE_POINTS {
        return Err(Error::BigOutput);
    }
    output.reserve(input.len());
    for &cp in basic {
        if cp >= 0x80 {
            return Err(Error::BadInput);
        }
        output.push(cp);
    }

    let mut n = INITIAL_N;
    let mut out_len = (output.len() - start_len) as u32;
    let mut i = 0u32;
    let mut bias = INITIAL_BIAS;

    while !rest.is_empty() {
        // Decode a generalized variable-length integer into delta, which
        // gets added to i. The overflow checking is easier if we increase
        // i as we go, then subtract off its starting value at the end.
        let previous_i = i;
        let mut weight = 1u32;
        let mut k = BASE;
        loop {
            let digit = match rest.split_first() {
                None => return Err(Error::BadInput),
                Some((&cp, tail)) => {
                    rest = tail;
                    decode_digit(cp)
                }
            };
            if digit >= BASE {
                return Err(Error::BadInput);
            }
            if digit > (u32::MAX - i) / weight {
                return Err(Error::Overflow);
            }
            i += digit * weight;
            let t = if k <= bias {
                T_MIN
            } else if k >= bias + T_MAX {
                T_MAX
            } else {
                k - bias
            };
            if digit < t {
                break;
            }
            if weight > u32::MAX / (BASE - t) {
                return Err(Error::Overflow);
            }
            weight *= BASE - t;
            k += BASE;
        }

        bias = adapt(i - previous_i, out_len + 1, previous_i == 0);

        // i was supposed to wrap around from out_len + 1 to 0,
        // incrementing n each time:
        if i / (out_len + 1) > u32::MAX - n {
            return Err(Error::Overflow);
        }
        n += i / (out_len + 1);
        i %= out_len + 1;

        if out_len as usize >= MAX_CODE_POINTS {
            return Err(Error::BigOutput);
        }
        output.insert(start_len + i as usize, n);
        i += 1;
        out_len += 1;
    }
    Ok(())
}

/// Encode code points as Punycode, appending ASCII to `output`.
///
/// On an error the output may hold a partially written label; callers
/// encode into a scratch string.
pub fn encode_into(input: &[u32], output: &mut String) -> Result<(), Error> {
    if input.len() > MAX_CODE_POINTS {
        return Err(Error::Overflow);
    }
    let input_length = input.len() as u32;

    // Handle the basic code points:
    let start_len = output.len();
    for &cp in input {
        if cp < 0x80 {
            output.push(cp as u8 as char);
        } else if cp > 0x10FFFF {
            return Err(Error::BadInput);
        }
    }
    let basic_length = (output.len() - start_len) as u32;
    if basic_length > 0 {
        output.push('-');
    }

    let mut n = INITIAL_N;
    let mut delta = 0u32;
    let mut bias = INITIAL_BIAS;

    // h is the number of code points handled so far
    let mut h = basic_length;
    while h < input_length {
        // All non-basic code points below n have been handled already;
        // find the next larger one:
        let mut m = u32::MAX;
        for &cp in input {
            if cp >= n && cp < m {
                m = cp;
            }
        }

        // Increase delta enough to advance the decoder's <n, i> state to
        // <m, 0>, but guard against overflow:
        if m - n > (u32::MAX - delta) / (h + 1) {
            return Err(Error::Overflow);
        }
        delta += (m - n) * (h + 1);
        n = m;

        for &cp in input {
            if cp < n {
                delta = delta.checked_add(1).ok_or(Error::Overflow)?;
            }
            if cp == n {
                // Represent delta as a generalized variable-length integer:
                let mut q = delta;
                let mut k = BASE;
                loop {
                    let t = if k <= bias {
                        T_MIN
                    } else if k >= bias + T_MAX {
                        T_MAX
                    } else {
                        k - bias
                    };
                    if q < t {
                        break;
                    }
                    output.push(encode_digit(t + (q - t) % (BASE - t)));
                    q = (q - t) / (BASE - t);
                    k += BASE;
                }
                output.push(encode_digit(q));
                bias = adapt(delta, h + 1, h == basic_length);
                delta = 0;
                h += 1;
            }
        }

        delta = delta.checked_add(1).ok_or(Error::Overflow)?;
        n += 1;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn decode(input: &str) -> Result<Vec<u32>, Error> {
        let cps: Vec<u32> = input.chars().map(|c| c as u32).collect();
        let mut out = Vec::new();
        decode_into(&cps, &mut out).map(|()| out)
    }

    #[test]
    fn rfc3492_arabic_sample() {
        let cps = [
            0x0644, 0x064A, 0x0647, 0x0645, 0x0627, 0x0628, 0x062A, 0x0643, 0x0644,
            0x0645, 0x0648, 0x0634, 0x0639, 0x0631, 0x0628, 0x064A, 0x061F,
        ];
        let mut encoded = String::new();
        encode_into(&cps, &mut encoded).unwrap();
        assert_eq!(encoded, "egbpdaj6bu4bxfgehfvwxn");
        assert_eq!(decode("egbpdaj6bu4bxfgehfvwxn").unwrap(), cps);
    }

    #[test]
    fn mixed_basic_and_extended() {
        assert_eq!(encode_str("bücher").unwrap(), "bcher-kva");
        assert_eq!(decode_to_string("bcher-kva").unwrap(), "bücher");
        assert_eq!(encode_str("点心").unwrap(), "15t909a");
        // all-basic input keeps its trailing delimiter form
        assert_eq!(encode_str("abc").unwrap(), "abc-");
        assert_eq!(decode_to_string("abc-").unwrap(), "abc");
    }

    #[test]
    fn uppercase_digits_accepted() {
        assert_eq!(decode_to_string("bcher-KVA").unwrap(), "bücher");
    }

    #[test]
    fn empty_input() {
        assert!(decode("").unwrap().is_empty());
        assert_eq!(encode_str("").unwrap(), "");
    }

    #[test]
    fn bad_input() {
        // delimiter with nothing before it
        assert_eq!(decode("-abc"), Err(Error::BadInput));
        // invalid digit
        assert_eq!(decode("ab!c"), Err(Error::BadInput));
        // truncated variable-length integer
        assert_eq!(decode("bcher-kv"), Err(Error::BadInput));
        // encode rejects values beyond the code space
        let mut out = String::new();
        assert_eq!(encode_into(&[0x110000], &mut out), Err(Error::BadInput));
    }

    #[test]
    fn overflow() {
        assert_eq!(decode("999999999"), Err(Error::Overflow));
    }

    #[test]
    fn round_trips() {
        for s in ["abc", "künzli", "ليهمابتكلموشعربي", "中文测试", "a1-b2", "ß"] {
            let encoded = encode_str(s).unwrap();
            assert!(encoded.is_ascii());
            assert_eq!(decode_to_string(&encoded).unwrap(), s);
        }
    }
}
