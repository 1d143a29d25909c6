//! Lap-time analysis over a full set of runner records.
//!
//! All operations borrow the records and never reorder them in place.

use crate::model::{FastestLap, LapTimeTally, RunnerRecord};

/// The runner with the lowest best lap. Ties go to the earlier record.
///
/// Returns `None` only when `records` is empty. If every best lap is NaN the
/// first record is the fastest.
pub fn find_fastest_runner(records: &[RunnerRecord]) -> Option<FastestLap> {
    let fastest = records.iter().map(RunnerRecord::best_lap).reduce(f64::min)?;
    records
        .iter()
        .find(|r| same_time(r.best_lap(), fastest))
        .map(|r| FastestLap {
            name: r.name.clone(),
            seconds: fastest,
        })
}

fn same_time(a: f64, b: f64) -> bool {
    a == b || (a.is_nan() && b.is_nan())
}

/// Count every lap time, lap1 and lap2 counted separately.
pub fn count_occurrences(records: &[RunnerRecord]) -> LapTimeTally {
    let mut tally = LapTimeTally::new();
    for r in records {
        tally.record(r.lap1);
        tally.record(r.lap2);
    }
    tally
}

/// Records ordered by ascending best lap; equal best laps keep input order.
pub fn sort_runners_by_lap_time(records: &[RunnerRecord]) -> Vec<RunnerRecord> {
    let mut sorted = records.to_vec();
    sorted.sort_by(|a, b| a.best_lap().total_cmp(&b.best_lap()));
    sorted
}
