//! Run configuration.
//!
//! A `SimConfig` is built once (defaults, a JSON file, or CLI flags),
//! validated once, and then only read. Nothing in the engine mutates it.

use serde::{Deserialize, Deserializer, Serialize};

use crate::constants::*;
use crate::enums::Formation;
use crate::error::ConfigError;
use crate::types::Faction;

/// Attributes shared by every unit of one force.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForceConfig {
    /// Display name. Passed through to reports, not used by the engine.
    pub name: String,
    /// Display color. Passed through to renderers, not used by the engine.
    pub color: String,
    /// Number of units deployed at the start of a run.
    pub strength: u32,
    /// Maximum distance at which a shot can hit.
    pub engagement_range: f64,
    /// Distance covered per step while closing in.
    pub speed: f64,
    /// Per-step hit probability when the target is in range.
    pub accuracy: f64,
    /// Deployment layout name, parsed during validation.
    pub formation: String,
}

impl ForceConfig {
    /// Defaults for the given side.
    pub fn for_faction(faction: Faction) -> Self {
        Self {
            name: DEFAULT_NAMES[faction.index()].to_string(),
            color: DEFAULT_COLORS[faction.index()].to_string(),
            strength: DEFAULT_STRENGTH,
            engagement_range: DEFAULT_ENGAGEMENT_RANGE,
            speed: DEFAULT_SPEED,
            accuracy: DEFAULT_ACCURACY,
            formation: DEFAULT_FORMATION.to_string(),
        }
    }

    fn validate(&self, faction: Faction) -> Result<Formation, ConfigError> {
        if self.strength == 0 {
            return Err(ConfigError::InvalidStrength {
                faction,
                value: self.strength,
            });
        }
        if !self.engagement_range.is_finite() || self.engagement_range <= 0.0 {
            return Err(ConfigError::InvalidRange {
                faction,
                value: self.engagement_range,
            });
        }
        if !self.speed.is_finite() || self.speed < 0.0 {
            return Err(ConfigError::InvalidSpeed {
                faction,
                value: self.speed,
            });
        }
        if !(0.0..=1.0).contains(&self.accuracy) {
            return Err(ConfigError::InvalidAccuracy {
                faction,
                value: self.accuracy,
            });
        }
        self.formation
            .parse::<Formation>()
            .map_err(|formation| ConfigError::UnsupportedFormation { faction, formation })
    }
}

/// A force entry as read from a config file. Missing fields fall back to
/// the defaults of the side whose slot the entry occupies.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct PartialForceConfig {
    name: Option<String>,
    color: Option<String>,
    strength: Option<u32>,
    engagement_range: Option<f64>,
    speed: Option<f64>,
    accuracy: Option<f64>,
    formation: Option<String>,
}

impl PartialForceConfig {
    fn resolve(self, faction: Faction) -> ForceConfig {
        let base = ForceConfig::for_faction(faction);
        ForceConfig {
            name: self.name.unwrap_or(base.name),
            color: self.color.unwrap_or(base.color),
            strength: self.strength.unwrap_or(base.strength),
            engagement_range: self.engagement_range.unwrap_or(base.engagement_range),
            speed: self.speed.unwrap_or(base.speed),
            accuracy: self.accuracy.unwrap_or(base.accuracy),
            formation: self.formation.unwrap_or(base.formation),
        }
    }
}

fn deserialize_forces<'de, D>(deserializer: D) -> Result<[ForceConfig; 2], D::Error>
where
    D: Deserializer<'de>,
{
    let [blue, red] = <[PartialForceConfig; 2]>::deserialize(deserializer)?;
    Ok([blue.resolve(Faction::Blue), red.resolve(Faction::Red)])
}

/// Complete configuration for one run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    /// Per-side attributes, indexed by `Faction::index()`.
    #[serde(deserialize_with = "deserialize_forces")]
    pub forces: [ForceConfig; 2],
    /// Step budget for a full run.
    pub max_steps: u32,
    /// Fraction of engagement range at which units stop closing in.
    pub firing_distance_fraction: f64,
    /// Side length of the deployment area.
    pub field_size: f64,
    /// Distance of a one-line formation from its own edge.
    pub border_offset: f64,
    /// RNG seed for determinism. Same seed = same run.
    pub seed: u64,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            forces: [
                ForceConfig::for_faction(Faction::Blue),
                ForceConfig::for_faction(Faction::Red),
            ],
            max_steps: DEFAULT_MAX_STEPS,
            firing_distance_fraction: DEFAULT_FIRING_DISTANCE_FRACTION,
            field_size: DEFAULT_FIELD_SIZE,
            border_offset: DEFAULT_BORDER_OFFSET,
            seed: DEFAULT_SEED,
        }
    }
}

impl SimConfig {
    pub fn force(&self, faction: Faction) -> &ForceConfig {
        &self.forces[faction.index()]
    }

    pub fn force_mut(&mut self, faction: Faction) -> &mut ForceConfig {
        &mut self.forces[faction.index()]
    }

    /// Check every field and return the parsed formation of each side.
    pub fn validate(&self) -> Result<[Formation; 2], ConfigError> {
        if self.max_steps == 0 {
            return Err(ConfigError::InvalidMaxSteps(self.max_steps));
        }
        if !(0.0..=1.0).contains(&self.firing_distance_fraction) {
            return Err(ConfigError::InvalidFiringDistanceFraction(
                self.firing_distance_fraction,
            ));
        }
        if !self.field_size.is_finite() || self.field_size <= 0.0 {
            return Err(ConfigError::InvalidFieldSize(self.field_size));
        }
        if !self.border_offset.is_finite()
            || self.border_offset < 0.0
            || self.border_offset >= self.field_size
        {
            return Err(ConfigError::InvalidBorderOffset {
                value: self.border_offset,
                field_size: self.field_size,
            });
        }

        let blue = self.force(Faction::Blue).validate(Faction::Blue)?;
        let red = self.force(Faction::Red).validate(Faction::Red)?;
        Ok([blue, red])
    }
}
