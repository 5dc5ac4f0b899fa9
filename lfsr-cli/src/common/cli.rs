use clap::{Parser, Subcommand, ValueEnum};
use lfsr::{ShiftDirection, Variant};
use serde::Serialize;

use super::utils::{parse_number, parse_size};

#[derive(Subcommand, Debug, Serialize, Clone)]
pub enum Command {
    /// List the predefined feedback polynomials (for lfsr=fibonacci)
    Taps,
}

#[derive(ValueEnum, Debug, Serialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum PrintFormat {
    /// Output bit sequence on one line
    Output,
    /// State in binary, one per line
    #[default]
    #[value(alias = "bin")]
    State,
    /// State in hex, one per line
    Hex,
    /// Step number, output bit and grouped binary state
    Full,
}

#[derive(Parser, Debug, Serialize, Clone)]
#[command(name = "lfsr-gen", version, about = "Linear feedback shift register sequence generator")]
pub struct LfsrCli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Register size in bits (2 to 64)
    #[arg(long, value_parser = parse_size)]
    pub size: Option<u32>,

    /// Initial state, 0 for all-ones
    #[arg(long, default_value = "0", value_parser = parse_number)]
    pub start: u64,

    /// Feedback polynomial, 0 to use the predefined one
    #[arg(long, default_value = "0", value_parser = parse_number)]
    pub taps: u64,

    /// Type of register: fibonacci|standard|external|many2one or galois|modular|internal|one2many
    #[arg(long, default_value = "fibonacci")]
    pub lfsr: Variant,

    /// Shift direction: left or right
    #[arg(long, default_value = "right")]
    pub shift: ShiftDirection,

    /// Number of steps to generate, 0 for 2^size - 1
    #[arg(long, default_value = "0", value_parser = parse_number)]
    pub period: u64,

    /// Print format
    #[arg(long, value_enum, default_value_t = PrintFormat::State)]
    pub print: PrintFormat,

    /// Error check, 0 to disable
    #[arg(long, default_value = "1", value_parser = parse_number)]
    pub errchk: u64,

    /// Display debug messages
    #[arg(long)]
    pub debug: bool,

    /// Write a JSON run summary to this file
    #[arg(long)]
    pub summary: Option<String>,
}
