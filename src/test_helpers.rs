use chrono::NaiveDate;

use crate::core::classify::classify;
use crate::models::{Direction, TradePlan};
use crate::store::{DayEntry, Ledger};

/// Plan with the given levels; result pre-classified like the save path does.
pub fn make_plan(tp: f64, sl: f64) -> TradePlan {
    TradePlan {
        name: String::new(),
        direction: Direction::Buy,
        tp,
        sl,
        result: classify(tp, sl),
        note: String::new(),
    }
}

pub fn date(s: &str) -> NaiveDate {
    s.parse().expect("valid test date")
}

/// Build a ledger from (date, plans) pairs.
pub fn ledger_with(days: &[(&str, Vec<TradePlan>)]) -> Ledger {
    days.iter()
        .map(|(d, plans)| {
            (
                date(d),
                DayEntry {
                    trades: plans.clone(),
                },
            )
        })
        .collect()
}
