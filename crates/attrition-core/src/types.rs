//! Fundamental geometric and simulation types.

use serde::{Deserialize, Serialize};

/// 2D position on the battlefield (abstract distance units, Cartesian).
/// The field is open: nothing clamps a position to the deployment area.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to another position.
    pub fn distance_to(&self, other: &Position) -> f64 {
        let dx = (self.x - other.x).abs();
        let dy = (self.y - other.y).abs();
        (dx * dx + dy * dy).sqrt()
    }
}

/// One of the two opposing sides. Blue deploys at the near edge (index 0),
/// Red at the far edge (index 1).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Faction {
    Blue,
    Red,
}

impl Faction {
    /// Both factions in index order.
    pub const ALL: [Faction; 2] = [Faction::Blue, Faction::Red];

    /// Numeric identifier (0 for Blue, 1 for Red).
    pub fn index(self) -> usize {
        match self {
            Faction::Blue => 0,
            Faction::Red => 1,
        }
    }

    pub fn opponent(self) -> Faction {
        match self {
            Faction::Blue => Faction::Red,
            Faction::Red => Faction::Blue,
        }
    }
}

impl std::fmt::Display for Faction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Faction::Blue => write!(f, "blue"),
            Faction::Red => write!(f, "red"),
        }
    }
}
