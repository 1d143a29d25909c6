use crate::orchestrator::{self, TrialConfig, TrialOutcome};
use anyhow::Result;
use clap::Parser;
use std::io::Write;

#[derive(Debug, Parser, Clone)]
#[command(
    name = "lap-trials",
    version,
    about = "Two-lap trial report: progression, fastest lap, lap-time counts and ranking"
)]
pub struct Cli {
    /// Runner times, one `name,lap1,lap2` record per line
    #[arg(long, default_value = orchestrator::DEFAULT_INPUT)]
    pub input: std::path::PathBuf,

    /// Where to write the progression table (overwritten each run)
    #[arg(long, default_value = orchestrator::DEFAULT_OUTPUT)]
    pub output: std::path::PathBuf,

    /// Also export the full report as JSON
    #[arg(long)]
    pub export_json: Option<std::path::PathBuf>,
}

/// Build a `TrialConfig` from CLI arguments.
pub fn build_config(args: &Cli) -> TrialConfig {
    TrialConfig {
        input: args.input.clone(),
        output: args.output.clone(),
        export_json: args.export_json.clone(),
    }
}

pub fn run(args: Cli) -> Result<()> {
    let cfg = build_config(&args);
    let stdout = std::io::stdout();
    let mut console = std::io::LineWriter::new(stdout.lock());

    match orchestrator::run_trial(&cfg, &mut console)? {
        TrialOutcome::Reported(report) => {
            tracing::debug!(runners = report.records.len(), "report complete");
        }
        TrialOutcome::NothingToReport => {
            tracing::debug!("nothing to report");
        }
    }
    console.flush()?;
    Ok(())
}
