use crate::model::{ProgressionResult, RunnerRecord};

/// A lap strictly under this many seconds earns a place in the next stage.
pub const QUALIFYING_TIME_SECS: f64 = 50.0;

pub fn advances(record: &RunnerRecord) -> bool {
    record.lap1 < QUALIFYING_TIME_SECS || record.lap2 < QUALIFYING_TIME_SECS
}

/// One result per record, in input order.
pub fn progress_to_next_stage(records: &[RunnerRecord]) -> Vec<ProgressionResult> {
    records
        .iter()
        .map(|r| ProgressionResult {
            name: r.name.clone(),
            advances: advances(r),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn either_lap_under_threshold_advances() {
        assert!(advances(&RunnerRecord::new("a", 49.9, 60.0)));
        assert!(advances(&RunnerRecord::new("b", 60.0, 49.9)));
        assert!(!advances(&RunnerRecord::new("c", 50.1, 60.0)));
    }

    #[test]
    fn exactly_fifty_does_not_advance() {
        assert!(!advances(&RunnerRecord::new("a", 50.0, 50.0)));
    }

    #[test]
    fn results_follow_input_order() {
        let records = vec![
            RunnerRecord::new("Alice", 48.5, 51.0),
            RunnerRecord::new("Bob", 52.0, 53.0),
            RunnerRecord::new("Cara", 49.0, 49.0),
        ];
        let results = progress_to_next_stage(&records);
        let pairs: Vec<(&str, bool)> = results
            .iter()
            .map(|r| (r.name.as_str(), r.advances))
            .collect();
        assert_eq!(pairs, vec![("Alice", true), ("Bob", false), ("Cara", true)]);
    }
}
