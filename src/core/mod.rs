pub mod classify;
pub mod history;

pub use classify::{classify, OUTCOME_MARGIN};
pub use history::{summarize, DayResult, DaySummary, DEFAULT_WINDOW};
