//! Default configuration values and tuning parameters.

// --- Forces ---

/// Default number of units per force.
pub const DEFAULT_STRENGTH: u32 = 10;

/// Default engagement (firing) range in distance units.
pub const DEFAULT_ENGAGEMENT_RANGE: f64 = 50.0;

/// Default movement per step in distance units.
pub const DEFAULT_SPEED: f64 = 1.0;

/// Default probability that an in-range unit hits its target per step.
pub const DEFAULT_ACCURACY: f64 = 0.05;

/// Default deployment formation name.
pub const DEFAULT_FORMATION: &str = "one line";

/// Display names, indexed by faction.
pub const DEFAULT_NAMES: [&str; 2] = ["Blue", "Red"];

/// Display colors, indexed by faction. Opaque to the engine.
pub const DEFAULT_COLORS: [&str; 2] = ["blue", "darkred"];

// --- Battlefield ---

/// Side length of the square deployment area.
pub const DEFAULT_FIELD_SIZE: f64 = 100.0;

/// Distance of a one-line formation from its own edge of the field.
pub const DEFAULT_BORDER_OFFSET: f64 = 10.0;

/// Proportion of engagement range at which units stop closing in.
pub const DEFAULT_FIRING_DISTANCE_FRACTION: f64 = 0.5;

// --- Run control ---

/// Default step budget for a full run.
pub const DEFAULT_MAX_STEPS: u32 = 100;

/// Default RNG seed. Same seed = same run.
pub const DEFAULT_SEED: u64 = 42;
