//! Enumeration types used throughout the simulation.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Initial deployment layout of a force.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Formation {
    /// All units on a single line parallel to the force's own edge,
    /// evenly spaced across the field.
    #[default]
    OneLine,
}

impl Formation {
    /// Canonical configuration string.
    pub fn as_str(self) -> &'static str {
        match self {
            Formation::OneLine => "one line",
        }
    }
}

impl FromStr for Formation {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "one line" => Ok(Formation::OneLine),
            other => Err(other.to_string()),
        }
    }
}

impl std::fmt::Display for Formation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classification of a run from the final roster sizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    /// Red destroyed, Blue still standing.
    BlueVictory,
    /// Blue destroyed, Red still standing.
    RedVictory,
    /// Both rosters emptied in the same step.
    MutualDestruction,
    /// Step budget exhausted with both sides still standing.
    Undecided,
}

impl Outcome {
    /// Classify a pair of final roster sizes.
    pub fn classify(blue: usize, red: usize) -> Self {
        match (blue, red) {
            (0, 0) => Outcome::MutualDestruction,
            (_, 0) => Outcome::BlueVictory,
            (0, _) => Outcome::RedVictory,
            _ => Outcome::Undecided,
        }
    }

    pub fn is_decided(self) -> bool {
        !matches!(self, Outcome::Undecided)
    }
}
