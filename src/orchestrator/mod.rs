//! Application-level orchestration.
//!
//! This module owns the file locations for a run and sequences parsing,
//! classification, analysis and reporting. The CLI layer only builds a
//! `TrialConfig` and hands over a console.

mod pipeline;

pub(crate) use pipeline::{run_trial, TrialConfig, TrialOutcome, DEFAULT_INPUT, DEFAULT_OUTPUT};
