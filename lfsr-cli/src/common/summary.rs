use std::path::Path;

use anyhow::Context;
use chrono::{DateTime, Utc};
use lfsr::{ResolvedRun, RunSummary};
use serde_json::{json, Value};

use super::cli::LfsrCli;

/// Builds the JSON document describing one run.
pub fn run_report(
    args: &LfsrCli,
    run: &ResolvedRun<u64>,
    summary: Option<&RunSummary<u64>>,
    start_ts: DateTime<Utc>,
    end_ts: DateTime<Utc>,
) -> Value {
    let duration_secs = (end_ts - start_ts).num_milliseconds() as f64 / 1000.0;
    json!({
        "cli": args,
        "run": {
            "size": run.width,
            "start": format!("{:#x}", run.start),
            "taps": format!("{:#x}", run.taps),
            "lfsr": run.variant,
            "shift": run.shift,
            "period": run.step_limit,
            "max_period": format!("{:#x}", run.max_period),
            "errchk": run.error_check,
        },
        "outcome": summary.map(|s| s.outcome),
        "steps": summary.map(|s| s.steps),
        "final_state": summary.map(|s| format!("{:#x}", s.state)),
        "timestamps": {
            "start": start_ts.to_rfc3339(),
            "end": end_ts.to_rfc3339(),
            "duration_seconds": duration_secs
        },
    })
}

pub fn write_report(path: &str, report: &Value) -> anyhow::Result<()> {
    if let Some(dir) = Path::new(path).parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(dir)
            .with_context(|| format!("creating summary directory {}", dir.display()))?;
    }
    let text = serde_json::to_string_pretty(report)?;
    std::fs::write(path, text).with_context(|| format!("writing summary to {}", path))?;
    Ok(())
}
