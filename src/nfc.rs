//! Unicode Normalization Form C
//! ([UAX #15](https://www.unicode.org/reports/tr15/)): canonical
//! decomposition, canonical ordering and primary-composite
//! recomposition, driven by the tables in `nfc_table`.
//!
//! Hangul syllables are handled arithmetically rather than through the
//! tables. All operations are total; there are no failure cases.

use crate::nfc_table;

pub(crate) mod hangul {
    pub const S_BASE: u32 = 0xAC00;
    pub const L_BASE: u32 = 0x1100;
    pub const V_BASE: u32 = 0x1161;
    pub const T_BASE: u32 = 0x11A7;
    pub const L_COUNT: u32 = 19;
    pub const V_COUNT: u32 = 21;
    pub const T_COUNT: u32 = 28;
    pub const N_COUNT: u32 = V_COUNT * T_COUNT; // 588
    pub const S_COUNT: u32 = L_COUNT * N_COUNT; // 11172
}

/// Replaces `buf` with its full canonical decomposition in canonical
/// order. Stored decompositions are already expanded to a fixed point,
/// so a single table lookup per code point suffices; the insertion sort
/// only ever moves marks within a run of nonzero combining classes
/// (starters act as fences).
pub(crate) fn canonical_decompose(buf: &mut Vec<u32>) {
    let mut out = Vec::with_capacity(buf.len());

    for &cp in buf.iter() {
        if (hangul::S_BASE..hangul::S_BASE + hangul::S_COUNT).contains(&cp) {
            // Hangul Decomposition Algorithm
            let s_index = cp - hangul::S_BASE;
            out.push(hangul::L_BASE + s_index / hangul::N_COUNT);
            out.push(hangul::V_BASE + (s_index % hangul::N_COUNT) / hangul::T_COUNT);
            if s_index % hangul::T_COUNT != 0 {
                out.push(hangul::T_BASE + s_index % hangul::T_COUNT);
            }
        } else {
            let info = nfc_table::decomposition_info(cp);
            if info != 0 {
                out.extend_from_slice(nfc_table::decomposition_chars(info));
            } else {
                out.push(cp);
            }
        }
    }

    // Canonical Ordering Algorithm, by insertion sort
    for i in 1..out.len() {
        let ccc = nfc_table::ccc(out[i]);
        if ccc != 0 && nfc_table::ccc(out[i - 1]) > ccc {
            let cp = out[i];
            let mut j = i;
            loop {
                out[j] = out[j - 1];
                j -= 1;
                if j == 0 || nfc_table::ccc(out[j - 1]) <= ccc {
                    break;
                }
            }
            out[j] = cp;
        }
    }

    *buf = out;
}

/// Recomposes a decomposed, canonically ordered buffer in place.
///
/// The blocking rule is the `prev_ccc < ccc` comparison: a mark can only
/// combine with the pending starter if no mark of the same or higher
/// combining class sits between them. `prev_ccc` starts at -1 so a mark
/// directly after the starter always gets a chance.
pub(crate) fn compose(buf: &mut Vec<u32>) {
    if buf.is_empty() {
        return;
    }
    let mut dest = 0;

    let mut i = 1;
    while i < buf.len() {
        let mut last = buf[i - 1];
        let cp = buf[i];

        if (hangul::L_BASE..hangul::L_BASE + hangul::L_COUNT).contains(&last) {
            if (hangul::V_BASE..hangul::V_BASE + hangul::V_COUNT).contains(&cp) {
                let l_index = last - hangul::L_BASE;
                let v_index = cp - hangul::V_BASE;
                // make a syllable of form LV
                last = hangul::S_BASE + (l_index * hangul::V_COUNT + v_index) * hangul::T_COUNT;
                i += 1; // cp consumed
                if i < buf.len() {
                    let next_cp = buf[i];
                    if next_cp > hangul::T_BASE && next_cp < hangul::T_BASE + hangul::T_COUNT {
                        // make a syllable of form LVT
                        last += next_cp - hangul::T_BASE;
                        i += 1; // next_cp consumed
                    }
                }
            }
            buf[dest] = last;
            dest += 1;
        } else if (hangul::S_BASE..hangul::S_BASE + hangul::S_COUNT).contains(&last) {
            if (last - hangul::S_BASE) % hangul::T_COUNT == 0
                && cp > hangul::T_BASE
                && cp < hangul::T_BASE + hangul::T_COUNT
            {
                // LV plus T makes a syllable of form LVT
                last += cp - hangul::T_BASE;
                i += 1; // cp consumed
            }
            buf[dest] = last;
            dest += 1;
        } else {
            let last_dest = dest;
            dest += 1;
            let mut last_info = nfc_table::composition_info(last);
            let mut prev_ccc = -1i32;
            while i < buf.len() {
                let cp = buf[i];
                let cp_ccc = nfc_table::ccc(cp) as i32;
                if last_info != 0 && prev_ccc < cp_ccc {
                    // does <last, cp> have a primary composite?
                    let pairs = nfc_table::composition_data(last_info);
                    if let Ok(found) = pairs.binary_search_by_key(&cp, |&(key, _)| key) {
                        last = pairs[found].1;
                        last_info = nfc_table::composition_info(last);
                        i += 1;
                        continue;
                    }
                }

                if cp_ccc == 0 {
                    break;
                }
                prev_ccc = cp_ccc;
                buf[dest] = cp;
                dest += 1;
                i += 1;
            }
            buf[last_dest] = last;
        }
        i += 1;
    }
    if i == buf.len() {
        buf[dest] = buf[i - 1];
        dest += 1;
    }
    buf.truncate(dest);
}

pub(crate) fn normalize(buf: &mut Vec<u32>) {
    canonical_decompose(buf);
    compose(buf);
}

pub(crate) fn is_normalized(buf: &[u32]) -> bool {
    let mut copy = buf.to_vec();
    normalize(&mut copy);
    copy == buf
}

/// Returns the NFC normalization of `input`.
pub fn normalize_nfc(input: &str) -> String {
    let mut buf: Vec<u32> = input.chars().map(|c| c as u32).collect();
    normalize(&mut buf);
    buf.iter()
        .map(|&cp| core::char::from_u32(cp).unwrap_or(core::char::REPLACEMENT_CHARACTER))
        .collect()
}

/// Whether `input` is already in NFC.
pub fn is_normalized_nfc(input: &str) -> bool {
    let buf: Vec<u32> = input.chars().map(|c| c as u32).collect();
    is_normalized(&buf)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn nfc(s: &str) -> String {
        normalize_nfc(s)
    }

    #[test]
    fn composes_and_preserves() {
        assert_eq!(nfc("A\u{30A}"), "\u{C5}");
        assert_eq!(nfc("\u{F4}"), "\u{F4}");
        assert_eq!(nfc("s\u{323}\u{307}"), "\u{1E69}");
        assert_eq!(nfc("s\u{307}\u{323}"), "\u{1E69}");
        assert_eq!(nfc("q\u{307}\u{323}"), "q\u{323}\u{307}");
    }

    #[test]
    fn singletons_and_exclusions() {
        assert_eq!(nfc("\u{212B}"), "\u{C5}"); // angstrom sign
        assert_eq!(nfc("\u{2126}"), "\u{3A9}"); // ohm sign
        assert_eq!(nfc("\u{958}"), "\u{915}\u{93C}"); // excluded composite
    }

    #[test]
    fn blocked_marks_do_not_compose() {
        // the cedilla (ccc 202) composes first; the acute is left behind
        assert_eq!(nfc("e\u{327}\u{301}"), "\u{229}\u{301}");
        // a grave (ccc 230) blocks a following acute of the same class
        assert_eq!(nfc("e\u{300}\u{301}"), "\u{E8}\u{301}");
    }

    #[test]
    fn hangul_round_trip() {
        assert_eq!(nfc("\u{1100}\u{1161}"), "\u{AC00}");
        assert_eq!(nfc("\u{1100}\u{1161}\u{11A8}"), "\u{AC01}");
        assert_eq!(nfc("\u{AC00}\u{11A8}"), "\u{AC01}");
        assert_eq!(nfc("\u{D4DB}"), "\u{D4DB}");
        // decompose side
        let mut buf = vec![0xD4DB];
        canonical_decompose(&mut buf);
        assert_eq!(buf, [0x1111, 0x1171, 0x11B6]);
    }

    #[test]
    fn idempotent() {
        for s in ["", "abc", "A\u{30A}\u{301}x", "\u{1100}\u{1161}\u{11A8}", "\u{FB1E}"] {
            let once = nfc(s);
            assert_eq!(nfc(&once), once);
        }
    }

    #[test]
    fn is_normalized_matches_normalize() {
        assert!(is_normalized_nfc("caf\u{E9}"));
        assert!(!is_normalized_nfc("cafe\u{301}"));
        assert!(is_normalized_nfc(""));
        assert!(!is_normalized_nfc("\u{212B}"));
    }
}
