//! Text rendering of a running sequence.

use std::io::{self, Write};

use lfsr::{RunSummary, Step, StepSink};

use super::cli::PrintFormat;

/// Writes every step in the chosen format.
///
/// The first write error stops all further output and is returned by
/// [`Printer::into_inner`].
pub struct Printer<Wr: Write> {
    out: Wr,
    format: PrintFormat,
    width: u32,
    error: Option<io::Error>,
    summary: Option<RunSummary<u64>>,
}

impl<Wr: Write> Printer<Wr> {
    pub fn new(out: Wr, format: PrintFormat, width: u32) -> Self {
        Self {
            out,
            format,
            width,
            error: None,
            summary: None,
        }
    }

    /// How the run ended, once it has.
    pub fn summary(&self) -> Option<RunSummary<u64>> {
        self.summary
    }

    pub fn into_inner(mut self) -> io::Result<Wr> {
        if let Some(err) = self.error.take() {
            return Err(err);
        }
        self.out.flush()?;
        Ok(self.out)
    }

    fn binary(&self, state: u64) -> String {
        format!("{:0width$b}", state, width = self.width as usize)
    }

    fn write_step(&mut self, step: &Step<u64>) -> io::Result<()> {
        match self.format {
            PrintFormat::Output => write!(self.out, "{}", step.output as u8),
            PrintFormat::State => {
                let bits = self.binary(step.state);
                writeln!(self.out, "{}", bits)
            }
            PrintFormat::Hex => {
                let digits = (self.width as usize + 3) / 4;
                writeln!(self.out, "0x{:0digits$x}", step.state, digits = digits)
            }
            PrintFormat::Full => {
                let bits = self.binary(step.state);
                let index_width = (((self.width as usize + 9) / 10) * 3 + 1).max(6);
                write!(
                    self.out,
                    "{:>index_width$}  output: {}  state:",
                    step.index,
                    step.output as u8,
                    index_width = index_width
                )?;
                let mut group = match self.width as usize % 4 {
                    0 => 4,
                    n => n,
                };
                let mut rest = bits.as_str();
                while !rest.is_empty() {
                    let (head, tail) = rest.split_at(group.min(rest.len()));
                    write!(self.out, " {}", head)?;
                    rest = tail;
                    group = 4;
                }
                writeln!(self.out)
            }
        }
    }

    fn record(&mut self, result: io::Result<()>) {
        if let Err(err) = result {
            self.error = Some(err);
        }
    }
}

impl<Wr: Write> StepSink<u64> for Printer<Wr> {
    fn on_step(&mut self, step: &Step<u64>) {
        if self.error.is_none() {
            let result = self.write_step(step);
            self.record(result);
        }
    }

    fn on_finish(&mut self, summary: &RunSummary<u64>) {
        self.summary = Some(*summary);
        if self.error.is_none() {
            let result = match self.format {
                PrintFormat::Output => writeln!(self.out).and_then(|_| self.out.flush()),
                _ => self.out.flush(),
            };
            self.record(result);
        }
    }
}
