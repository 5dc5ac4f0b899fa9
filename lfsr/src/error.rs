use thiserror::Error;

use crate::word::Word;

/// Configuration rejected before any step executes.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid size={width}: register size must be between 2 and {max} bits")]
    InvalidWidth { width: u32, max: u32 },

    #[error("invalid taps: no feedback bit set within {width} bits")]
    InvalidTaps { width: u32 },

    #[error("no predefined feedback polynomial for size={width}, taps must be given")]
    NoTapsAvailable { width: u32 },
}

/// Failure detected while a sequence is running.
///
/// Steps emitted before the failure stay valid.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SequenceError<W: Word> {
    #[error("invalid period={step_index} state={state:#x}")]
    PeriodViolation { step_index: u64, state: W },
}
