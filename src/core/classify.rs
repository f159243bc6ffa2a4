use crate::models::Outcome;

/// Minimum tp/sl edge required to call a directional outcome. Differences
/// inside the margin are noise and classify as Breakeven.
pub const OUTCOME_MARGIN: f64 = 10.0;

/// The per-plan outcome rule. Called from the save path and from
/// `TradePlan::outcome`; nothing else reimplements it.
pub fn classify(tp: f64, sl: f64) -> Outcome {
    if tp - sl > OUTCOME_MARGIN {
        Outcome::Win
    } else if sl - tp > OUTCOME_MARGIN {
        Outcome::Loss
    } else {
        Outcome::Breakeven
    }
}
