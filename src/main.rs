mod analysis;
mod classify;
mod cli;
mod model;
mod orchestrator;
mod parser;
mod report;
mod telemetry;
mod text_summary;

use clap::Parser;

fn main() {
    telemetry::init();
    let args = cli::Cli::parse();

    // A failed run still exits 0; the report is the only contract with callers.
    if let Err(e) = cli::run(args) {
        let msg = format!("{e:#}");
        tracing::error!(error = %msg, "report aborted");
    }
}
