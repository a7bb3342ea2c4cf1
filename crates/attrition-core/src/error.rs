//! Configuration errors. These are the only errors the engine produces:
//! once a configuration validates, a run cannot fail.

use thiserror::Error;

use crate::types::Faction;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("{faction} strength must be at least 1, got {value}")]
    InvalidStrength { faction: Faction, value: u32 },

    #[error("{faction} engagement range must be finite and positive, got {value}")]
    InvalidRange { faction: Faction, value: f64 },

    #[error("{faction} speed must be finite and non-negative, got {value}")]
    InvalidSpeed { faction: Faction, value: f64 },

    #[error("{faction} accuracy must be a probability in [0, 1], got {value}")]
    InvalidAccuracy { faction: Faction, value: f64 },

    #[error("{faction} formation '{formation}' is not supported (expected 'one line')")]
    UnsupportedFormation { faction: Faction, formation: String },

    #[error("max steps must be at least 1, got {0}")]
    InvalidMaxSteps(u32),

    #[error("firing distance fraction must be in [0, 1], got {0}")]
    InvalidFiringDistanceFraction(f64),

    #[error("field size must be finite and positive, got {0}")]
    InvalidFieldSize(f64),

    #[error("border offset must be in [0, field size {field_size}), got {value}")]
    InvalidBorderOffset { value: f64, field_size: f64 },
}
