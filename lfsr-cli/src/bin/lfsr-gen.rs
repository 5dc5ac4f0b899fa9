// Command-line front end for the shift register engine.
// - default: generate one period (or --period steps) and print every step
// - taps: list the predefined feedback polynomials
use std::io::{self, BufWriter};

use chrono::Utc;
use clap::{error::ErrorKind, CommandFactory, Parser};
use lfsr::{ConfigError, LfsrConfig, SequenceDriver};
use lfsr_cli::common::{cli, printer::Printer, summary, utils};
use log::{error, info};

fn main() -> anyhow::Result<()> {
    let args = cli::LfsrCli::parse();
    utils::init_logging(if args.debug { "debug" } else { "warn" });

    if let Some(cli::Command::Taps) = args.command {
        utils::write_known_taps(&mut io::stdout().lock())?;
        return Ok(());
    }

    let Some(size) = args.size else {
        cli::LfsrCli::command()
            .error(ErrorKind::MissingRequiredArgument, "--size is required")
            .exit();
    };

    let config = LfsrConfig::<u64>::new(
        size,
        args.start,
        args.taps,
        args.lfsr,
        args.shift,
        (args.period != 0).then_some(args.period),
        args.errchk != 0,
    );
    let driver = match SequenceDriver::new(&config) {
        Ok(driver) => driver,
        Err(err) => {
            let hint = match err {
                ConfigError::NoTapsAvailable { .. } => {
                    "\n\nRun `lfsr-gen taps` to list the predefined feedback polynomials."
                }
                _ => "",
            };
            cli::LfsrCli::command()
                .error(ErrorKind::ValueValidation, format!("{}{}", err, hint))
                .exit();
        }
    };
    let run = *driver.resolved();
    info!(
        "size={} start={:#x} taps={:#x} lfsr={}",
        run.width, run.start, run.taps, run.variant
    );

    let start_ts = Utc::now();
    let mut printer = Printer::new(BufWriter::new(io::stdout().lock()), args.print, size);
    let result = driver.run(&mut printer);
    let end_ts = Utc::now();
    let finished = printer.summary();
    printer.into_inner()?;

    if let Some(path) = &args.summary {
        let report = summary::run_report(&args, &run, finished.as_ref(), start_ts, end_ts);
        info!("Dumping run summary to {}", path);
        summary::write_report(path, &report)?;
    }

    if let Err(err) = result {
        error!("{}", err);
        std::process::exit(1);
    }
    Ok(())
}
