use std::io::{self, Write};

use lfsr::polynomial::tabulated_widths;

pub fn init_logging(max_level: &str) {
    env_logger::init_from_env(env_logger::Env::default().default_filter_or(max_level));
}

/// Parses an unsigned integer the way `strtoul(s, NULL, 0)` does:
/// `0x`/`0X` prefix for hex, a leading `0` for octal, decimal otherwise.
pub fn parse_number(s: &str) -> Result<u64, String> {
    let s = s.trim();
    let (digits, radix) = if let Some(hex) = s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
        (hex, 16)
    } else if s.len() > 1 && s.starts_with('0') {
        (&s[1..], 8)
    } else {
        (s, 10)
    };
    u64::from_str_radix(digits, radix).map_err(|err| format!("invalid number '{}': {}", s, err))
}

pub fn parse_size(s: &str) -> Result<u32, String> {
    let size = parse_number(s)?;
    u32::try_from(size).map_err(|_| format!("size {} out of range", size))
}

/// Writes the predefined feedback polynomial table.
pub fn write_known_taps<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "Pre-defined feedback polynomial: (for lfsr=fibonacci)")?;
    for (size, taps) in tabulated_widths() {
        writeln!(out, "  size={} taps={:#x}", size, taps)?;
    }
    Ok(())
}
