use serde::{Deserialize, Serialize};
use std::fmt;

/// Planned side of a trade. `Unset` is what an untouched form control saves,
/// so it serializes as an empty string and older files read back unchanged.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Buy,
    Sell,
    #[default]
    #[serde(rename = "", alias = "Unset")]
    Unset,
}

impl Direction {
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Buy => "Buy",
            Direction::Sell => "Sell",
            Direction::Unset => "Unset",
        }
    }

    pub fn from_str_loose(s: &str) -> Option<Direction> {
        match s.to_ascii_lowercase().as_str() {
            "buy" => Some(Direction::Buy),
            "sell" => Some(Direction::Sell),
            "" | "unset" => Some(Direction::Unset),
            _ => None,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
