//! Register storage words.
//!
//! The widest register a run can use is the bit width of the integer type
//! that stores it, so every width-dependent limit is expressed through
//! [`Word::BITS`] instead of a hard-coded 64.

use num_traits::{PrimInt, Unsigned};
use std::fmt::{Binary, Debug, LowerHex};

pub trait Word:
    PrimInt + Unsigned + Debug + LowerHex + Binary + Send + Sync + 'static
{
    const BITS: u32;

    /// Lossless widening, used for period arithmetic across word sizes.
    fn widen(self) -> u128;
}

impl Word for u8 {
    const BITS: u32 = u8::BITS;
    fn widen(self) -> u128 {
        self as u128
    }
}
impl Word for u16 {
    const BITS: u32 = u16::BITS;
    fn widen(self) -> u128 {
        self as u128
    }
}
impl Word for u32 {
    const BITS: u32 = u32::BITS;
    fn widen(self) -> u128 {
        self as u128
    }
}
impl Word for u64 {
    const BITS: u32 = u64::BITS;
    fn widen(self) -> u128 {
        self as u128
    }
}
impl Word for u128 {
    const BITS: u32 = u128::BITS;
    fn widen(self) -> u128 {
        self
    }
}

/// Returns a word with the low `width` bits set.
///
/// Valid for `width <= W::BITS`; a zero width yields zero.
pub fn width_mask<W: Word>(width: u32) -> W {
    if width == 0 {
        W::zero()
    } else {
        W::max_value() >> (W::BITS - width) as usize
    }
}

/// Period of a maximal-length sequence for a register of `width` bits: `2^width - 1`.
pub fn max_period<W: Word>(width: u32) -> W {
    width_mask(width)
}
