use chrono::{Duration, NaiveDate};

use crate::models::Outcome;
use crate::store::Ledger;

/// Days covered by the rolling history view, reference date included.
pub const DEFAULT_WINDOW: usize = 5;

/// Aggregate for one calendar day.
#[derive(Debug, Clone, PartialEq)]
pub enum DayResult {
    /// No plans recorded for the day (absent key or empty list).
    NoData,
    Net { net_result: f64, status: Outcome },
}

#[derive(Debug, Clone, PartialEq)]
pub struct DaySummary {
    pub date: NaiveDate,
    pub result: DayResult,
}

/// Summarize the `window` days ending at `reference`, newest first.
///
/// The day status uses a zero threshold on the net result. That is a
/// different policy from the per-plan margin in `classify`: a day whose
/// plans individually classify Win and Loss can still net to Breakeven.
pub fn summarize(ledger: &Ledger, reference: NaiveDate, window: usize) -> Vec<DaySummary> {
    (0..window)
        .map(|i| {
            let date = reference - Duration::days(i as i64);
            DaySummary {
                date,
                result: day_result(ledger, date),
            }
        })
        .collect()
}

fn day_result(ledger: &Ledger, date: NaiveDate) -> DayResult {
    let trades = match ledger.get(&date) {
        Some(day) if !day.trades.is_empty() => &day.trades,
        _ => return DayResult::NoData,
    };

    let net_result: f64 = trades.iter().map(|t| t.tp - t.sl).sum();
    let status = if net_result > 0.0 {
        Outcome::Win
    } else if net_result < 0.0 {
        Outcome::Loss
    } else {
        Outcome::Breakeven
    };

    DayResult::Net { net_result, status }
}
