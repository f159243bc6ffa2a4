use chrono::NaiveDate;
use tempfile::TempDir;

use trade_planner::journal::{Journal, PlanDraft};
use trade_planner::models::Direction;

/// Journal backed by a throwaway file. Keep the TempDir alive for the test.
pub fn temp_journal() -> (TempDir, Journal) {
    let dir = TempDir::new().expect("temp dir");
    let journal = Journal::open(dir.path().join("planner_data.json"));
    (dir, journal)
}

pub fn draft(name: &str, direction: Direction, tp: f64, sl: f64, note: &str) -> PlanDraft {
    PlanDraft {
        name: name.to_string(),
        direction,
        tp,
        sl,
        note: note.to_string(),
    }
}

pub fn date(s: &str) -> NaiveDate {
    s.parse().expect("valid test date")
}
