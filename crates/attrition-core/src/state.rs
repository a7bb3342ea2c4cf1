//! Observable state: the per-step view handed to renderers and the
//! summary handed to report formatters.

use serde::{Deserialize, Serialize};

use crate::enums::Outcome;
use crate::types::{Faction, Position};

/// Everything a renderer needs to draw one completed step.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StepSnapshot {
    /// Number of steps completed so far (0 = initial deployment).
    pub step: u32,
    /// Surviving units after casualty removal, Blue first, roster order.
    pub units: Vec<UnitView>,
    /// Shots that hit during this step.
    pub engagements: Vec<EngagementView>,
    pub blue_strength: usize,
    pub red_strength: usize,
}

/// A living unit on the battlefield.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct UnitView {
    pub faction: Faction,
    pub position: Position,
}

/// A successful shot, drawn as a transient line from shooter to target.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EngagementView {
    /// Side of the shooter.
    pub faction: Faction,
    /// Shooter position at the end of its action.
    pub shooter: Position,
    /// Target position as captured during targeting.
    pub target: Position,
}

/// Final result of a run with the full strength history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunSummary {
    pub steps: u32,
    pub outcome: Outcome,
    pub names: [String; 2],
    pub blue_final: usize,
    pub red_final: usize,
    /// Blue roster size after each step, in step order.
    pub blue: Vec<usize>,
    /// Red roster size after each step, in step order.
    pub red: Vec<usize>,
}

impl RunSummary {
    /// Per-step (blue, red) roster sizes.
    pub fn series(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.blue.iter().copied().zip(self.red.iter().copied())
    }

    /// Display name of the winning side, if there is one.
    pub fn winner_name(&self) -> Option<&str> {
        match self.outcome {
            Outcome::BlueVictory => Some(&self.names[Faction::Blue.index()]),
            Outcome::RedVictory => Some(&self.names[Faction::Red.index()]),
            Outcome::MutualDestruction | Outcome::Undecided => None,
        }
    }
}
