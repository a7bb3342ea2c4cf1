//! Command-line arguments and their mapping onto `SimConfig`.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use attrition_core::config::SimConfig;
use attrition_core::types::Faction;

use crate::CliError;

/// How the run result is printed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Step count, outcome and final strengths.
    #[default]
    Result,
    /// CSV of both strengths after every step.
    Full,
    /// The complete run summary as JSON.
    Json,
}

#[derive(Parser, Debug, Default)]
#[command(
    name = "attrition",
    version,
    about = "Individual-based stochastic simulation of attrition warfare"
)]
pub struct Cli {
    /// JSON configuration file. Flags below override its values.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Result)]
    pub output: OutputFormat,

    /// Maximum number of simulation steps. Default: 100
    #[arg(long)]
    pub max_steps: Option<u32>,

    /// RNG seed. Same seed = same run. Default: 42
    #[arg(long)]
    pub seed: Option<u64>,

    /// Side length of the battlefield. Default: 100
    #[arg(long)]
    pub field_size: Option<f64>,

    /// Distance of the starting lines from the field edges. Default: 10
    #[arg(long)]
    pub border_offset: Option<f64>,

    /// Fraction of range at which units stop closing in. Default: 0.5
    #[arg(long)]
    pub firing_distance_fraction: Option<f64>,

    /// Displayed name of the first force.
    #[arg(long)]
    pub name_blue: Option<String>,

    /// Displayed name of the second force.
    #[arg(long)]
    pub name_red: Option<String>,

    /// Numerical strength of the first force. Default: 10
    #[arg(long)]
    pub strength_blue: Option<u32>,

    /// Numerical strength of the second force. Default: 10
    #[arg(long)]
    pub strength_red: Option<u32>,

    /// Firing range of the first force. Default: 50
    #[arg(long)]
    pub range_blue: Option<f64>,

    /// Firing range of the second force. Default: 50
    #[arg(long)]
    pub range_red: Option<f64>,

    /// Speed of the first force in distance units per step. Default: 1
    #[arg(long)]
    pub speed_blue: Option<f64>,

    /// Speed of the second force in distance units per step. Default: 1
    #[arg(long)]
    pub speed_red: Option<f64>,

    /// Per-step hit probability of the first force, in [0, 1]. Default: 0.05
    #[arg(long)]
    pub accuracy_blue: Option<f64>,

    /// Per-step hit probability of the second force, in [0, 1]. Default: 0.05
    #[arg(long)]
    pub accuracy_red: Option<f64>,

    /// Formation of the first force. Only 'one line' is supported.
    #[arg(long)]
    pub formation_blue: Option<String>,

    /// Formation of the second force. Only 'one line' is supported.
    #[arg(long)]
    pub formation_red: Option<String>,
}

impl Cli {
    /// Start from the config file (or defaults) and apply every flag given.
    pub fn build_config(&self) -> Result<SimConfig, CliError> {
        let mut config = match &self.config {
            Some(path) => {
                let text = std::fs::read_to_string(path).map_err(|source| CliError::ReadConfig {
                    path: path.clone(),
                    source,
                })?;
                serde_json::from_str(&text).map_err(|source| CliError::ParseConfig {
                    path: path.clone(),
                    source,
                })?
            }
            None => SimConfig::default(),
        };
        self.apply_overrides(&mut config);
        Ok(config)
    }

    fn apply_overrides(&self, config: &mut SimConfig) {
        if let Some(max_steps) = self.max_steps {
            config.max_steps = max_steps;
        }
        if let Some(seed) = self.seed {
            config.seed = seed;
        }
        if let Some(field_size) = self.field_size {
            config.field_size = field_size;
        }
        if let Some(border_offset) = self.border_offset {
            config.border_offset = border_offset;
        }
        if let Some(fraction) = self.firing_distance_fraction {
            config.firing_distance_fraction = fraction;
        }

        let sides = [
            (
                Faction::Blue,
                &self.name_blue,
                self.strength_blue,
                self.range_blue,
                self.speed_blue,
                self.accuracy_blue,
                &self.formation_blue,
            ),
            (
                Faction::Red,
                &self.name_red,
                self.strength_red,
                self.range_red,
                self.speed_red,
                self.accuracy_red,
                &self.formation_red,
            ),
        ];
        for (faction, name, strength, range, speed, accuracy, formation) in sides {
            let force = config.force_mut(faction);
            if let Some(name) = name {
                force.name = name.clone();
            }
            if let Some(strength) = strength {
                force.strength = strength;
            }
            if let Some(range) = range {
                force.engagement_range = range;
            }
            if let Some(speed) = speed {
                force.speed = speed;
            }
            if let Some(accuracy) = accuracy {
                force.accuracy = accuracy;
            }
            if let Some(formation) = formation {
                force.formation = formation.clone();
            }
        }
    }
}
