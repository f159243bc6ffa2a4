use serde::{Deserialize, Serialize};

use crate::core::classify::classify;
use crate::models::{Direction, Outcome};

/// A single trading plan entry. Every field defaults so records written by
/// older versions or edited by hand still deserialize.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TradePlan {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub direction: Direction,
    #[serde(default)]
    pub tp: f64,
    #[serde(default)]
    pub sl: f64,
    #[serde(default)]
    pub result: Outcome,
    #[serde(default)]
    pub note: String,
}

impl TradePlan {
    /// Label shown for plans saved without a name.
    pub fn display_name(&self) -> &str {
        if self.name.is_empty() {
            "Unnamed Plan"
        } else {
            &self.name
        }
    }

    /// Outcome recomputed from the stored tp/sl. Display paths use this
    /// instead of the persisted `result`, so the two can never drift.
    pub fn outcome(&self) -> Outcome {
        classify(self.tp, self.sl)
    }
}
