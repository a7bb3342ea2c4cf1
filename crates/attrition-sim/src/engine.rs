//! Simulation runner — owns both forces, the RNG and the result tracker.
//!
//! `SimulationRunner` is the explicit context for one run: nothing it
//! touches lives outside it. Headless and deterministic for a given seed.

use log::{debug, info};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use attrition_core::config::SimConfig;
use attrition_core::error::ConfigError;
use attrition_core::state::{RunSummary, StepSnapshot};
use attrition_core::types::Faction;

use crate::force::Force;
use crate::orchestrator;
use crate::snapshot::build_snapshot;
use crate::tracker::ResultTracker;

pub struct SimulationRunner {
    config: SimConfig,
    blue: Force,
    red: Force,
    tracker: ResultTracker,
    rng: ChaCha8Rng,
}

impl SimulationRunner {
    /// Validate the config and deploy both forces.
    ///
    /// Fails before any force is constructed if the config is invalid.
    pub fn new(config: SimConfig) -> Result<Self, ConfigError> {
        let [blue_formation, red_formation] = config.validate()?;

        let mut blue = Force::new(Faction::Blue, config.force(Faction::Blue), blue_formation);
        blue.initialize_units(config.field_size, config.border_offset);
        let mut red = Force::new(Faction::Red, config.force(Faction::Red), red_formation);
        red.initialize_units(config.field_size, config.border_offset);

        info!(
            "deployed {} ({} units) against {} ({} units), seed {}",
            blue.name,
            blue.len(),
            red.name,
            red.len(),
            config.seed
        );

        let tracker = ResultTracker::new(
            [blue.name.clone(), red.name.clone()],
            blue.len(),
            red.len(),
        );

        Ok(Self {
            rng: ChaCha8Rng::seed_from_u64(config.seed),
            config,
            blue,
            red,
            tracker,
        })
    }

    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    pub fn blue(&self) -> &Force {
        &self.blue
    }

    pub fn red(&self) -> &Force {
        &self.red
    }

    pub fn force(&self, faction: Faction) -> &Force {
        match faction {
            Faction::Blue => &self.blue,
            Faction::Red => &self.red,
        }
    }

    pub fn tracker(&self) -> &ResultTracker {
        &self.tracker
    }

    /// Steps completed so far.
    pub fn steps(&self) -> u32 {
        self.tracker.steps()
    }

    /// Combat is over once either roster is empty.
    pub fn is_finished(&self) -> bool {
        self.blue.is_empty() || self.red.is_empty()
    }

    /// Deployment view before the first step.
    pub fn initial_snapshot(&self) -> StepSnapshot {
        build_snapshot(0, &self.blue, &self.red, Vec::new())
    }

    /// Run one step and record it. `None` once combat is over.
    ///
    /// Ignores the step budget; `run` applies it.
    pub fn step(&mut self) -> Option<StepSnapshot> {
        if self.is_finished() {
            return None;
        }

        let report = orchestrator::run(
            &mut self.blue,
            &mut self.red,
            &mut self.rng,
            self.config.firing_distance_fraction,
        );
        self.tracker.update(self.blue.len(), self.red.len());

        debug!(
            "step {}: blue {} (-{}), red {} (-{})",
            self.tracker.steps(),
            self.blue.len(),
            report.casualties[Faction::Blue.index()],
            self.red.len(),
            report.casualties[Faction::Red.index()]
        );

        Some(build_snapshot(
            self.tracker.steps(),
            &self.blue,
            &self.red,
            report.engagements,
        ))
    }

    /// Run up to `steps` more steps, stopping early when combat ends.
    pub fn advance(&mut self, steps: u32) -> Vec<StepSnapshot> {
        let mut snapshots = Vec::new();
        for _ in 0..steps {
            match self.step() {
                Some(snapshot) => snapshots.push(snapshot),
                None => break,
            }
        }
        snapshots
    }

    /// Run until a roster is empty or the step budget is spent.
    pub fn run(&mut self) -> RunSummary {
        while !self.is_finished() && self.tracker.steps() < self.config.max_steps {
            self.step();
        }

        let summary = self.tracker.summarize();
        info!(
            "run finished after {} steps: {:?} (blue {}, red {})",
            summary.steps, summary.outcome, summary.blue_final, summary.red_final
        );
        summary
    }
}

/// Validate, deploy and run to completion in one call.
pub fn run_simulation(config: SimConfig) -> Result<RunSummary, ConfigError> {
    let mut runner = SimulationRunner::new(config)?;
    Ok(runner.run())
}
