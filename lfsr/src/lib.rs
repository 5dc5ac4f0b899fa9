//! Linear Feedback Shift Register simulation.
//!
//! # Overview
//! The crate generates pseudo-random binary sequences (PRBS) with a shift
//! register driven by a feedback polynomial, and checks that maximal-length
//! registers really return to their start state after `2^width - 1` steps.
//!
//! ## Components
//! - [`utils::bitops`]: population count, parity and bit reversal
//! - [`polynomial`]: predefined maximal-length tap masks for widths 2..=24 and 31
//! - [`register`]: the Fibonacci and Galois step functions and the [`Lfsr`]
//!   bit generator / scrambler
//! - [`driver`]: the [`SequenceDriver`] that runs one period (or a fixed number
//!   of steps), validates the period invariant and reports every step to a
//!   [`StepSink`]
//! - [`config`]: the run configuration and its validation
//!
//! Register storage is generic over [`Word`] (`u8` through `u128`); the
//! widest register is the bit width of the chosen word.
//!
//! # Example Usage
//! ```
//! use lfsr::{LfsrConfig, SequenceDriver, Step};
//!
//! let config = LfsrConfig::<u64>::from_width(4).with_taps(0x3);
//! let mut steps: Vec<Step<u64>> = Vec::new();
//! let summary = SequenceDriver::new(&config).unwrap().run(&mut steps).unwrap();
//! assert_eq!(summary.steps, 15);
//! assert_eq!(steps.last().unwrap().state, 0xf);
//! ```

pub mod config;
pub mod driver;
pub mod error;
pub mod polynomial;
pub mod register;
pub mod utils;
pub mod word;

pub use config::{LfsrConfig, ResolvedRun};
pub use driver::{RunOutcome, RunSummary, SequenceDriver, Step, StepSink};
pub use error::{ConfigError, SequenceError};
pub use register::{Lfsr, ShiftDirection, Variant};
pub use word::Word;
