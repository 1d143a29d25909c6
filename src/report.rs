//! Results file output.

use crate::model::{ProgressionResult, TrialReport};
use anyhow::{Context, Result};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

pub const RESULTS_HEADER: &str = "Runner Name, Progresses to Next Stage";

/// Write the progression table to `path`, replacing any existing file.
pub fn write_runner_data(path: &Path, results: &[ProgressionResult]) -> Result<()> {
    let file =
        File::create(path).with_context(|| format!("create results file {}", path.display()))?;
    let mut out = BufWriter::new(file);
    writeln!(out, "{RESULTS_HEADER}")?;
    for r in results {
        writeln!(out, "{}, {}", r.name, r.label())?;
    }
    out.flush()
        .with_context(|| format!("write results file {}", path.display()))?;
    tracing::info!(path = %path.display(), count = results.len(), "wrote results file");
    Ok(())
}

/// Export the full report as pretty-printed JSON.
pub fn export_json(path: &Path, report: &TrialReport) -> Result<()> {
    let json = serde_json::to_string_pretty(report).context("serialize report")?;
    std::fs::write(path, json).with_context(|| format!("write {}", path.display()))?;
    Ok(())
}
