//! Snapshot builder: turns the two rosters into a `StepSnapshot`.
//!
//! Read-only over the forces.

use attrition_core::state::{EngagementView, StepSnapshot, UnitView};

use crate::force::Force;

/// Build the renderer view of a completed step.
pub fn build_snapshot(
    step: u32,
    blue: &Force,
    red: &Force,
    engagements: Vec<EngagementView>,
) -> StepSnapshot {
    let units = blue
        .units
        .iter()
        .chain(red.units.iter())
        .map(|unit| UnitView {
            faction: unit.faction,
            position: unit.position,
        })
        .collect();

    StepSnapshot {
        step,
        units,
        engagements,
        blue_strength: blue.len(),
        red_strength: red.len(),
    }
}
