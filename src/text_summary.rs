//! Text summary builder for console output.
//!
//! Each section is a list of pre-formatted lines; the orchestrator decides
//! when each one is printed.

use crate::model::{FastestLap, LapTimeTally, ProgressionResult, RunnerRecord};

const TITLE: &str = "Scottish Athletics 400m Trials - Female Group";
const RULE: &str = "-----------------------------------------------------";
const TABLE_HEADING: &str = "Runner Name           Progresses to Next Stage";
const NAME_WIDTH: usize = 22;

/// Pre-formatted lines for text output.
pub(crate) struct TextSummary {
    pub lines: Vec<String>,
}

impl TextSummary {
    pub fn write_to(&self, out: &mut impl std::io::Write) -> std::io::Result<()> {
        for line in &self.lines {
            writeln!(out, "{line}")?;
        }
        Ok(())
    }
}

pub(crate) fn header() -> TextSummary {
    TextSummary {
        lines: vec![TITLE.to_string(), RULE.to_string()],
    }
}

/// Fastest lap line followed by the progression table.
pub(crate) fn build_progression_summary(
    fastest: &FastestLap,
    progression: &[ProgressionResult],
) -> TextSummary {
    let mut lines = Vec::with_capacity(progression.len() + 2);
    lines.push(format!(
        "Fastest lap was completed by {} in {} seconds",
        fastest.name,
        format_seconds(fastest.seconds)
    ));
    lines.push(TABLE_HEADING.to_string());
    for p in progression {
        lines.push(format!("{:<NAME_WIDTH$} {}", p.name, p.label()));
    }
    TextSummary { lines }
}

pub(crate) fn build_tally_summary(tally: &LapTimeTally) -> TextSummary {
    let mut lines = vec![String::new(), "Occurrences of each lap time:".to_string()];
    lines.extend(tally.entries().iter().map(|e| {
        format!(
            "Lap time {}: {} occurrence(s)",
            format_seconds(e.seconds),
            e.count
        )
    }));
    TextSummary { lines }
}

pub(crate) fn build_ranking_summary(ranking: &[RunnerRecord]) -> TextSummary {
    let mut lines = vec![
        String::new(),
        "Runners sorted by their lap times:".to_string(),
    ];
    lines.extend(
        ranking
            .iter()
            .map(|r| format!("{}: {} seconds", r.name, format_seconds(r.best_lap()))),
    );
    TextSummary { lines }
}

/// Render a lap time as the shortest decimal that round-trips.
///
/// Whole seconds keep a trailing `.0`. Exponents of 16 and above or below -4
/// switch to scientific form with a signed, two-digit exponent (`1e+16`).
pub(crate) fn format_seconds(seconds: f64) -> String {
    if seconds.is_nan() {
        return "nan".to_string();
    }
    if seconds.is_infinite() {
        return if seconds > 0.0 { "inf" } else { "-inf" }.to_string();
    }
    let sci = format!("{seconds:e}");
    if let Some((mantissa, exp)) = sci.split_once('e') {
        if let Ok(exp) = exp.parse::<i32>() {
            if seconds != 0.0 && !(-4..16).contains(&exp) {
                let sign = if exp < 0 { '-' } else { '+' };
                return format!("{mantissa}e{sign}{:02}", exp.unsigned_abs());
            }
        }
    }
    let s = seconds.to_string();
    if s.contains('.') {
        s
    } else {
        format!("{s}.0")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_whole_and_fractional_seconds() {
        assert_eq!(format_seconds(49.0), "49.0");
        assert_eq!(format_seconds(48.5), "48.5");
        assert_eq!(format_seconds(47.123), "47.123");
        assert_eq!(format_seconds(-0.0), "-0.0");
        assert_eq!(format_seconds(f64::INFINITY), "inf");
        assert_eq!(format_seconds(f64::NAN), "nan");
    }

    #[test]
    fn switches_to_exponent_form_outside_the_positional_range() {
        assert_eq!(format_seconds(1e16), "1e+16");
        assert_eq!(format_seconds(1.5e17), "1.5e+17");
        assert_eq!(format_seconds(1e-5), "1e-05");
        assert_eq!(format_seconds(-2.5e-7), "-2.5e-07");
        assert_eq!(format_seconds(1e300), "1e+300");
        assert_eq!(format_seconds(1e15), "1000000000000000.0");
        assert_eq!(format_seconds(0.0001), "0.0001");
        assert_eq!(format_seconds(0.0), "0.0");
    }

    #[test]
    fn progression_table_pads_names_to_fixed_width() {
        let fastest = FastestLap {
            name: "Alice".into(),
            seconds: 48.5,
        };
        let progression = vec![
            ProgressionResult {
                name: "Alice".into(),
                advances: true,
            },
            ProgressionResult {
                name: "Bob".into(),
                advances: false,
            },
        ];
        let summary = build_progression_summary(&fastest, &progression);
        assert_eq!(
            summary.lines,
            vec![
                "Fastest lap was completed by Alice in 48.5 seconds",
                "Runner Name           Progresses to Next Stage",
                "Alice                  Yes",
                "Bob                    No",
            ]
        );
    }

    #[test]
    fn long_names_are_not_truncated() {
        let fastest = FastestLap {
            name: "x".into(),
            seconds: 1.0,
        };
        let long = "A".repeat(30);
        let progression = vec![ProgressionResult {
            name: long.clone(),
            advances: true,
        }];
        let summary = build_progression_summary(&fastest, &progression);
        assert_eq!(summary.lines[2], format!("{long} Yes"));
    }

    #[test]
    fn ranking_lists_best_lap() {
        let ranking = vec![
            RunnerRecord::new("Alice", 51.0, 48.5),
            RunnerRecord::new("Bob", 52.0, 53.0),
        ];
        let summary = build_ranking_summary(&ranking);
        assert_eq!(
            summary.lines,
            vec![
                "",
                "Runners sorted by their lap times:",
                "Alice: 48.5 seconds",
                "Bob: 52.0 seconds",
            ]
        );
    }
}
