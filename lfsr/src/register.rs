//! Linear Feedback Shift Register (LFSR) engine.
//!
//! Two step functions advance a register of `width` bits by one position and
//! return the bit shifted out:
//!
//! - [`fibonacci_step`] (external XOR, many-to-one): the parity of the tapped
//!   bits is fed back into the vacated end of the register.
//! - [`galois_step`] (internal XOR, one-to-many): the shifted-out bit is XORed
//!   into every tapped position.
//!
//! A Fibonacci register with mask `t` and a Galois register with mask
//! `reverse_bits(width, t)` produce the same output sequence up to a phase
//! shift, which is why the default Galois mask is the mirrored table value.
//!
//! [`Lfsr`] wraps a resolved configuration into a stateful PRBS generator.

use serde::Serialize;
use strum::{Display, EnumString};

use crate::config::{LfsrConfig, ResolvedRun};
use crate::error::ConfigError;
use crate::utils::bitops::parity;
use crate::word::{width_mask, Word};

/// Feedback structure of the register.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Display, EnumString, Serialize,
)]
#[strum(ascii_case_insensitive)]
#[serde(rename_all = "lowercase")]
pub enum Variant {
    #[default]
    #[strum(
        to_string = "fibonacci",
        serialize = "standard",
        serialize = "external",
        serialize = "many2one"
    )]
    Fibonacci,
    #[strum(
        to_string = "galois",
        serialize = "modular",
        serialize = "internal",
        serialize = "one2many"
    )]
    Galois,
}

impl Variant {
    /// Advances `state` by one step with this variant's feedback and returns the output bit.
    pub fn step<W: Word>(self, width: u32, shift: ShiftDirection, taps: W, state: &mut W) -> bool {
        match self {
            Variant::Fibonacci => fibonacci_step(width, shift, taps, state),
            Variant::Galois => galois_step(width, shift, taps, state),
        }
    }
}

/// Direction the register contents move on every step.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Display, EnumString, Serialize,
)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
#[serde(rename_all = "lowercase")]
pub enum ShiftDirection {
    Left,
    #[default]
    Right,
}

fn top_bit<W: Word>(width: u32, state: W) -> bool {
    (state >> (width - 1) as usize) & W::one() == W::one()
}

fn low_bit<W: Word>(state: W) -> bool {
    state & W::one() == W::one()
}

/// One Fibonacci step.
///
/// The feedback bit is `parity(taps & state)`. Shifting right outputs bit 0
/// and inserts the feedback at bit `width - 1`; shifting left outputs bit
/// `width - 1` and inserts the feedback at bit 0.
pub fn fibonacci_step<W: Word>(width: u32, shift: ShiftDirection, taps: W, state: &mut W) -> bool {
    let feedback = if parity(taps & *state) == 1 {
        W::one()
    } else {
        W::zero()
    };

    match shift {
        ShiftDirection::Left => {
            let output = top_bit(width, *state);
            *state = ((*state << 1) | feedback) & width_mask(width);
            output
        }
        ShiftDirection::Right => {
            let output = low_bit(*state);
            *state = (*state >> 1) | (feedback << (width - 1) as usize);
            output
        }
    }
}

/// One Galois step.
///
/// The bit shifted out is XORed into every tapped position. The left shift
/// drops whatever crosses bit `width`, so a mask with or without the leading
/// x^width term behaves the same.
pub fn galois_step<W: Word>(width: u32, shift: ShiftDirection, taps: W, state: &mut W) -> bool {
    match shift {
        ShiftDirection::Left => {
            let output = top_bit(width, *state);
            let xor = if output { taps } else { W::zero() };
            *state = ((*state << 1) ^ xor) & width_mask(width);
            output
        }
        ShiftDirection::Right => {
            let output = low_bit(*state);
            let xor = if output { taps } else { W::zero() };
            *state = (*state >> 1) ^ xor;
            output
        }
    }
}

/// A stateful linear feedback shift register producing a PRBS.
///
/// Unlike [`crate::driver::SequenceDriver`] it never stops on its own and
/// performs no period checking; it is meant for streaming bits and for
/// scrambling.
#[derive(Debug, Clone)]
pub struct Lfsr<W: Word> {
    width: u32,
    shift: ShiftDirection,
    variant: Variant,
    taps: W,
    state: W,
}

impl<W: Word> Lfsr<W> {
    /// Builds a register from a configuration, applying the same defaults as a
    /// sequence run (zero start means all-ones, zero taps means the table mask).
    pub fn new(config: &LfsrConfig<W>) -> Result<Self, ConfigError> {
        Ok(Self::from_resolved(&config.resolve()?))
    }

    pub fn from_resolved(run: &ResolvedRun<W>) -> Self {
        Self {
            width: run.width,
            shift: run.shift,
            variant: run.variant,
            taps: run.taps,
            state: run.start,
        }
    }

    /// Advances the register by one step and returns the output bit.
    pub fn step(&mut self) -> bool {
        self.variant
            .step(self.width, self.shift, self.taps, &mut self.state)
    }

    /// Advances the register by `n` steps and packs the output bits into a
    /// word, first bit in the most significant of the `n` positions.
    ///
    /// Returns `None` without advancing if `n` exceeds the bit width of `W`.
    pub fn next_bits(&mut self, n: u32) -> Option<W> {
        if n > W::BITS {
            return None;
        }
        let mut bits = W::zero();
        for _ in 0..n {
            let bit = if self.step() { W::one() } else { W::zero() };
            bits = (bits << 1) | bit;
        }
        Some(bits)
    }

    /// XORs every bit of `data`, most significant bit first, with successive
    /// output bits. Running it again from the same starting state restores
    /// the original data.
    pub fn scramble(&mut self, data: &mut [u8]) {
        for byte in data.iter_mut() {
            for bit in (0..8).rev() {
                if self.step() {
                    *byte ^= 1 << bit;
                }
            }
        }
    }

    pub fn state(&self) -> W {
        self.state
    }

    pub fn taps(&self) -> W {
        self.taps
    }

    pub fn width(&self) -> u32 {
        self.width
    }
}

impl<W: Word> Iterator for Lfsr<W> {
    type Item = bool;

    fn next(&mut self) -> Option<bool> {
        Some(self.step())
    }
}
