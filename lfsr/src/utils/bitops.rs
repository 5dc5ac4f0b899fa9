use crate::word::{width_mask, Word};

/// Number of set bits in `x`.
pub fn population_count<W: Word>(x: W) -> u32 {
    x.count_ones()
}

/// Parity of `x`: 1 when an odd number of bits is set, 0 otherwise.
///
/// The Fibonacci feedback bit is the parity of `taps & state`.
pub fn parity<W: Word>(x: W) -> u8 {
    (population_count(x) & 0x1) as u8
}

/// Reverses the order of the low `width` bits of `x` (bit i <-> bit width-1-i).
///
/// Bits of `x` above `width` are ignored and the result never has bits set
/// above `width`. Turns a Fibonacci tap mask into its mirrored Galois mask.
pub fn reverse_bits<W: Word>(width: u32, x: W) -> W {
    if width == 0 {
        return W::zero();
    }
    (x & width_mask::<W>(width)).reverse_bits() >> (W::BITS - width) as usize
}
