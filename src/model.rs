use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// One runner's two recorded lap times, in seconds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunnerRecord {
    pub name: String,
    pub lap1: f64,
    pub lap2: f64,
}

impl RunnerRecord {
    pub fn new(name: impl Into<String>, lap1: f64, lap2: f64) -> Self {
        Self {
            name: name.into(),
            lap1,
            lap2,
        }
    }

    /// The smaller of the two lap times. A NaN lap is ignored unless both are NaN.
    pub fn best_lap(&self) -> f64 {
        self.lap1.min(self.lap2)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProgressionResult {
    pub name: String,
    pub advances: bool,
}

impl ProgressionResult {
    /// Label used in both the console table and the results file.
    pub fn label(&self) -> &'static str {
        if self.advances {
            "Yes"
        } else {
            "No"
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FastestLap {
    pub name: String,
    pub seconds: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LapCount {
    pub seconds: f64,
    pub count: usize,
}

/// Occurrence count per distinct lap time.
///
/// Keys compare by exact floating-point value. Entries keep first-seen order
/// so the console listing is reproducible.
#[derive(Debug, Clone, Default, Serialize)]
pub struct LapTimeTally {
    entries: Vec<LapCount>,
    #[serde(skip)]
    index: HashMap<u64, usize>,
}

impl LapTimeTally {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, seconds: f64) {
        match self.index.get(&tally_key(seconds)) {
            Some(&i) => self.entries[i].count += 1,
            None => {
                self.index.insert(tally_key(seconds), self.entries.len());
                self.entries.push(LapCount { seconds, count: 1 });
            }
        }
    }

    #[cfg(test)]
    pub fn count(&self, seconds: f64) -> usize {
        self.index
            .get(&tally_key(seconds))
            .map(|&i| self.entries[i].count)
            .unwrap_or(0)
    }

    pub fn entries(&self) -> &[LapCount] {
        &self.entries
    }
}

// -0.0 == 0.0 under float equality, so both must land on the same key.
fn tally_key(seconds: f64) -> u64 {
    if seconds == 0.0 {
        0.0f64.to_bits()
    } else {
        seconds.to_bits()
    }
}

/// Everything a completed run produced, ready for presentation layers.
#[derive(Debug, Clone, Serialize)]
pub struct TrialReport {
    pub timestamp_utc: String,
    pub records: Vec<RunnerRecord>,
    pub progression: Vec<ProgressionResult>,
    pub fastest: FastestLap,
    pub tally: LapTimeTally,
    pub ranking: Vec<RunnerRecord>,
}
