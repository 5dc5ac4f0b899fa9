//! Predefined maximal-length feedback polynomials.
//!
//! Each mask selects the taps of a right-shifting Fibonacci register whose
//! feedback polynomial is primitive over GF(2): started from any non-zero
//! state it visits all `2^width - 1` non-zero states before repeating.
//! The values are reference data and must not be derived or altered.

use crate::word::Word;
use num_traits::NumCast;

const KNOWN_TAPS: [(u32, u64); 24] = [
    (2, 0x3),     // x^2 + x + 1
    (3, 0x3),     // x^3 + x^2 + 1
    (4, 0x3),     // x^4 + x^3 + 1
    (5, 0x5),     // x^5 + x^3 + 1
    (6, 0x3),     // x^6 + x^5 + 1
    (7, 0x3),     // x^7 + x^6 + 1
    (8, 0x1d),    // x^8 + x^6 + x^5 + x^4 + 1
    (9, 0x11),    // x^9 + x^5 + 1
    (10, 0x9),    // x^10 + x^7 + 1
    (11, 0x5),    // x^11 + x^9 + 1
    (12, 0x107),  // x^12 + x^11 + x^10 + x^4 + 1
    (13, 0x27),   // x^13 + x^12 + x^11 + x^8 + 1
    (14, 0x1007), // x^14 + x^13 + x^12 + x^2 + 1
    (15, 0x3),    // x^15 + x^14 + 1
    (16, 0x100b), // x^16 + x^15 + x^13 + x^4 + 1
    (17, 0x9),    // x^17 + x^14 + 1
    (18, 0x81),   // x^18 + x^11 + 1
    (19, 0x27),   // x^19 + x^18 + x^17 + x^14 + 1
    (20, 0x9),    // x^20 + x^17 + 1
    (21, 0x5),    // x^21 + x^19 + 1
    (22, 0x3),    // x^22 + x^21 + 1
    (23, 0x21),   // x^23 + x^18 + 1
    (24, 0x87),   // x^24 + x^23 + x^22 + x^17 + 1
    (31, 0x9),    // x^31 + x^28 + 1
];

/// Returns the predefined Fibonacci tap mask for `width`, if there is one.
///
/// Widths 2..=24 and 31 are tabulated; everything else (1, 25..=30, >31) is `None`.
pub fn known_taps(width: u32) -> Option<u64> {
    KNOWN_TAPS
        .iter()
        .find(|(w, _)| *w == width)
        .map(|(_, taps)| *taps)
}

/// [`known_taps`] converted to the register word, `None` when the word is too narrow.
pub fn known_taps_for<W: Word>(width: u32) -> Option<W> {
    if width > W::BITS {
        return None;
    }
    known_taps(width).and_then(<W as NumCast>::from)
}

/// All tabulated `(width, taps)` pairs in ascending width order.
pub fn tabulated_widths() -> impl Iterator<Item = (u32, u64)> {
    KNOWN_TAPS.iter().copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_taps() {
        assert_eq!(known_taps(2), Some(0x3));
        assert_eq!(known_taps(5), Some(0x5));
        assert_eq!(known_taps(8), Some(0x1d));
        assert_eq!(known_taps(14), Some(0x1007));
        assert_eq!(known_taps(16), Some(0x100b));
        assert_eq!(known_taps(24), Some(0x87));
        assert_eq!(known_taps(31), Some(0x9));
    }

    #[test]
    fn test_untabulated_widths() {
        assert_eq!(known_taps(0), None);
        assert_eq!(known_taps(1), None);
        for width in 25..=30 {
            assert_eq!(known_taps(width), None);
        }
        assert_eq!(known_taps(32), None);
        assert_eq!(known_taps(64), None);
    }

    #[test]
    fn test_known_taps_for_word() {
        assert_eq!(known_taps_for::<u8>(8), Some(0x1d_u8));
        assert_eq!(known_taps_for::<u8>(12), None);
        assert_eq!(known_taps_for::<u16>(16), Some(0x100b_u16));
        assert_eq!(known_taps_for::<u32>(31), Some(0x9_u32));
    }

    #[test]
    fn test_tabulated_widths() {
        let widths: Vec<u32> = tabulated_widths().map(|(w, _)| w).collect();
        let mut expected: Vec<u32> = (2..=24).collect();
        expected.push(31);
        assert_eq!(widths, expected);
        for (width, taps) in tabulated_widths() {
            assert_ne!(taps, 0);
            assert!(taps < (1u64 << width), "width={} taps={:#x}", width, taps);
        }
    }
}
