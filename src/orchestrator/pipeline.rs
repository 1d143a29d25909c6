//! Trial report pipeline.
//!
//! Reads the runner file, then runs classification and analysis and prints
//! each report section in a fixed order.

use crate::analysis;
use crate::classify;
use crate::model::TrialReport;
use crate::parser;
use crate::report;
use crate::text_summary;
use anyhow::Result;
use std::io::Write;
use std::path::PathBuf;

pub(crate) const DEFAULT_INPUT: &str = "runners.txt";
pub(crate) const DEFAULT_OUTPUT: &str = "runners_results.txt";

/// File locations for one run.
#[derive(Debug, Clone)]
pub(crate) struct TrialConfig {
    pub input: PathBuf,
    pub output: PathBuf,
    pub export_json: Option<PathBuf>,
}

impl Default for TrialConfig {
    fn default() -> Self {
        Self {
            input: PathBuf::from(DEFAULT_INPUT),
            output: PathBuf::from(DEFAULT_OUTPUT),
            export_json: None,
        }
    }
}

#[derive(Debug)]
pub(crate) enum TrialOutcome {
    Reported(Box<TrialReport>),
    /// The input was missing, empty or malformed; nothing was written.
    NothingToReport,
}

/// Run the whole report against `cfg`, printing to `console`.
///
/// Only console write failures are returned. A results file that cannot be
/// written is reported on the console and the remaining sections still print.
pub(crate) fn run_trial(cfg: &TrialConfig, console: &mut impl Write) -> Result<TrialOutcome> {
    text_summary::header().write_to(console)?;

    let records = parser::read_runner_data(&cfg.input, console)?;
    if records.is_empty() {
        tracing::info!(input = %cfg.input.display(), "no runner records, nothing to report");
        return Ok(TrialOutcome::NothingToReport);
    }

    let progression = classify::progress_to_next_stage(&records);
    let Some(fastest) = analysis::find_fastest_runner(&records) else {
        tracing::warn!(runners = records.len(), "no fastest runner among non-empty records");
        writeln!(console, "Error: no fastest lap could be determined")?;
        return Ok(TrialOutcome::NothingToReport);
    };
    text_summary::build_progression_summary(&fastest, &progression).write_to(console)?;

    if let Err(e) = report::write_runner_data(&cfg.output, &progression) {
        let msg = format!("{e:#}");
        tracing::error!(output = %cfg.output.display(), error = %msg, "results file not written");
        writeln!(console, "Error: {msg}")?;
    }

    let tally = analysis::count_occurrences(&records);
    text_summary::build_tally_summary(&tally).write_to(console)?;

    let ranking = analysis::sort_runners_by_lap_time(&records);
    text_summary::build_ranking_summary(&ranking).write_to(console)?;

    let trial = TrialReport {
        timestamp_utc: timestamp_utc(),
        records,
        progression,
        fastest,
        tally,
        ranking,
    };

    if let Some(p) = cfg.export_json.as_deref() {
        match report::export_json(p, &trial) {
            Ok(()) => tracing::info!(path = %p.display(), "exported JSON report"),
            Err(e) => {
                let msg = format!("{e:#}");
                tracing::error!(path = %p.display(), error = %msg, "JSON export failed");
                writeln!(console, "Export JSON failed: {msg}")?;
            }
        }
    }

    Ok(TrialOutcome::Reported(Box::new(trial)))
}

fn timestamp_utc() -> String {
    time::OffsetDateTime::now_utc()
        .format(&time::format_description::well_known::Rfc3339)
        .unwrap_or_default()
}
