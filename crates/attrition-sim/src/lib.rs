//! Simulation engine for individual-based attrition combat.
//!
//! Two forces close in, lock onto their nearest enemy and trade
//! probabilistic fire each step until one side is gone or the step
//! budget runs out.

pub mod engine;
pub mod force;
pub mod orchestrator;
pub mod snapshot;
pub mod tracker;
pub mod unit;

pub use attrition_core as core;
pub use engine::{run_simulation, SimulationRunner};
