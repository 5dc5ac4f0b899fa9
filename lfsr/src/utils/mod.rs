//! Bit-manipulation helpers shared by the register engine and the tap table.

pub mod bitops;
