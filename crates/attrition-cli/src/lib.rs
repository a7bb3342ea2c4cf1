//! Command-line front end for the attrition simulation.
//!
//! Parses flags (and an optional JSON config file) into a `SimConfig`,
//! runs the engine to completion and formats the summary.

pub mod args;
pub mod report;

use std::path::PathBuf;

use thiserror::Error;

use attrition_core::error::ConfigError;
use attrition_sim::run_simulation;

use crate::args::Cli;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("cannot read config file {}: {source}", path.display())]
    ReadConfig {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("cannot parse config file {}: {source}", path.display())]
    ParseConfig {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),

    #[error("cannot serialize result: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Run the simulation described by the arguments and return the report.
pub fn run(cli: &Cli) -> Result<String, CliError> {
    let config = cli.build_config()?;
    let summary = run_simulation(config)?;
    Ok(report::render(&summary, cli.output)?)
}
