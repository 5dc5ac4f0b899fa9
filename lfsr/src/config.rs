//! Run configuration for a shift register sequence.
//!
//! A [`LfsrConfig`] is what the caller asks for; [`LfsrConfig::resolve`]
//! validates it and fills in the defaults, producing the [`ResolvedRun`] the
//! register and the sequence driver actually operate on:
//!
//! - `width` must lie in `2..=W::BITS`
//! - `start` is truncated to `width` bits; zero selects the all-ones state
//! - `taps` is truncated to `width` bits; zero selects the predefined mask
//!   for `width`, mirrored for the Galois form and mirrored again for a left
//!   shift (the two mirrors cancel)
//! - `step_limit` of `None` or `Some(0)` runs until the register returns to
//!   `start`
//!
//! # Usage Examples
//! ```
//! use lfsr::config::LfsrConfig;
//! use lfsr::register::Variant;
//!
//! let run = LfsrConfig::<u64>::from_width(8)
//!     .with_variant(Variant::Galois)
//!     .resolve()
//!     .unwrap();
//! assert_eq!(run.taps, 0xb8);
//! assert_eq!(run.start, 0xff);
//! ```

#![allow(clippy::too_many_arguments)]

use log::warn;

use crate::error::ConfigError;
use crate::polynomial::known_taps_for;
use crate::register::{ShiftDirection, Variant};
use crate::utils::bitops::reverse_bits;
use crate::word::{max_period, width_mask, Word};

/// Narrowest register that can carry a feedback polynomial.
pub const MIN_WIDTH: u32 = 2;

/// Requested parameters of a run. Zero `start`/`taps` ask for the defaults.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LfsrConfig<W: Word> {
    /// Register size in bits
    pub width: u32,
    /// Initial state, 0 for all-ones
    pub start: W,
    /// Feedback tap mask, 0 for the predefined polynomial
    pub taps: W,
    pub variant: Variant,
    pub shift: ShiftDirection,
    /// Stop after exactly this many steps instead of after one full period
    pub step_limit: Option<u64>,
    /// Validate the maximal-length period invariant after every step
    pub error_check: bool,
}

impl<W: Word> Default for LfsrConfig<W> {
    /// Defaults to the widest register with every other field at its default:
    /// all-ones start, predefined taps, Fibonacci, right shift, full period,
    /// error checking on.
    fn default() -> Self {
        Self {
            width: W::BITS,
            start: W::zero(),
            taps: W::zero(),
            variant: Variant::default(),
            shift: ShiftDirection::default(),
            step_limit: None,
            error_check: true,
        }
    }
}

impl<W: Word> LfsrConfig<W> {
    pub fn new(
        width: u32,
        start: W,
        taps: W,
        variant: Variant,
        shift: ShiftDirection,
        step_limit: Option<u64>,
        error_check: bool,
    ) -> Self {
        Self {
            width,
            start,
            taps,
            variant,
            shift,
            step_limit,
            error_check,
        }
    }

    /// Default configuration for a register of `width` bits.
    pub fn from_width(width: u32) -> Self {
        Self {
            width,
            ..Self::default()
        }
    }

    pub fn with_start(mut self, start: W) -> Self {
        self.start = start;
        self
    }

    pub fn with_taps(mut self, taps: W) -> Self {
        self.taps = taps;
        self
    }

    pub fn with_variant(mut self, variant: Variant) -> Self {
        self.variant = variant;
        self
    }

    pub fn with_shift(mut self, shift: ShiftDirection) -> Self {
        self.shift = shift;
        self
    }

    /// A limit of 0 means "no limit", matching `period=0` on the command line.
    pub fn with_step_limit(mut self, step_limit: u64) -> Self {
        self.step_limit = (step_limit != 0).then_some(step_limit);
        self
    }

    pub fn with_error_check(mut self, error_check: bool) -> Self {
        self.error_check = error_check;
        self
    }

    /// Validates the configuration and substitutes defaults.
    ///
    /// Fails with [`ConfigError::InvalidWidth`] for widths outside
    /// `2..=W::BITS`, [`ConfigError::InvalidTaps`] when an explicit mask has
    /// no bits within the width, and [`ConfigError::NoTapsAvailable`] when no
    /// mask was given and the width is not tabulated.
    pub fn resolve(&self) -> Result<ResolvedRun<W>, ConfigError> {
        let width = self.width;
        if !(MIN_WIDTH..=W::BITS).contains(&width) {
            return Err(ConfigError::InvalidWidth {
                width,
                max: W::BITS,
            });
        }
        let mask = width_mask::<W>(width);

        let mut start = self.start & mask;
        if start != self.start {
            warn!(
                "start={:#x} truncated to {} bits: {:#x}",
                self.start, width, start
            );
        }
        if start.is_zero() {
            start = mask;
        }

        let taps = if self.taps.is_zero() {
            let taps = known_taps_for::<W>(width).ok_or(ConfigError::NoTapsAvailable { width })?;
            let mirrored =
                (self.variant == Variant::Galois) != (self.shift == ShiftDirection::Left);
            if mirrored {
                reverse_bits(width, taps)
            } else {
                taps
            }
        } else {
            let taps = self.taps & mask;
            if taps.is_zero() {
                return Err(ConfigError::InvalidTaps { width });
            }
            if taps != self.taps {
                warn!(
                    "taps={:#x} truncated to {} bits: {:#x}",
                    self.taps, width, taps
                );
            }
            taps
        };

        Ok(ResolvedRun {
            width,
            start,
            taps,
            variant: self.variant,
            shift: self.shift,
            step_limit: self.step_limit.filter(|limit| *limit != 0),
            error_check: self.error_check,
            max_period: max_period::<W>(width),
        })
    }
}

/// A validated run with every default substituted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolvedRun<W: Word> {
    pub width: u32,
    pub start: W,
    pub taps: W,
    pub variant: Variant,
    pub shift: ShiftDirection,
    pub step_limit: Option<u64>,
    pub error_check: bool,
    /// `2^width - 1`, the period of a maximal-length sequence
    pub max_period: W,
}
