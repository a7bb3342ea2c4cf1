//! One simulation step over both forces.
//!
//! Phases run in a fixed order and each phase finishes for both forces
//! before the next begins:
//!
//! 1. Targeting: Blue locks onto Red's roster, then Red onto Blue's.
//!    Both see the rosters as they stood at the start of the step.
//! 2. Action: Blue's units move then fire, in roster order; then Red's.
//! 3. Casualty removal on both rosters.
//!
//! Movement and firing read the targeting lock, never live geometry, so
//! processing Blue first changes nothing about who gets hit.

use log::trace;
use rand::Rng;

use attrition_core::state::EngagementView;

use crate::force::Force;

/// What happened during one step.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StepReport {
    /// Hits scored, indexed by the shooter's faction.
    pub hits: [usize; 2],
    /// Units removed, indexed by the casualty's faction.
    pub casualties: [usize; 2],
    /// Every successful shot, Blue's first, in roster order.
    pub engagements: Vec<EngagementView>,
}

/// Execute one full step.
pub fn run(
    blue: &mut Force,
    red: &mut Force,
    rng: &mut impl Rng,
    firing_distance_fraction: f64,
) -> StepReport {
    let mut report = StepReport::default();

    blue.begin_step();
    red.begin_step();

    // A side facing an empty roster has nothing to target or shoot,
    // and an empty side has no one to act.
    if !blue.is_empty() && !red.is_empty() {
        // 1. Targeting
        targeting(blue, red);
        targeting(red, blue);

        // 2. Action
        report.hits[blue.faction.index()] =
            action(blue, red, rng, firing_distance_fraction, &mut report.engagements);
        report.hits[red.faction.index()] =
            action(red, blue, rng, firing_distance_fraction, &mut report.engagements);
    }

    // 3. Casualty removal
    report.casualties[blue.faction.index()] = blue.remove_casualties();
    report.casualties[red.faction.index()] = red.remove_casualties();

    report
}

/// Lock every unit of `force` onto its closest enemy.
pub fn targeting(force: &mut Force, enemy: &Force) {
    debug_assert_eq!(enemy.faction, force.faction.opponent());
    for unit in &mut force.units {
        unit.find_target(&enemy.units);
    }
}

/// Move then fire for every unit of `force`, in roster order.
/// Returns the number of hits scored.
pub fn action(
    force: &mut Force,
    enemy: &mut Force,
    rng: &mut impl Rng,
    firing_distance_fraction: f64,
    engagements: &mut Vec<EngagementView>,
) -> usize {
    let mut hits = 0;
    for unit in &mut force.units {
        unit.move_to_engage(firing_distance_fraction);
        if !unit.fire(&mut enemy.units, rng) {
            continue;
        }
        hits += 1;
        if let Some(target) = unit.target {
            trace!(
                "{} unit at ({:.2}, {:.2}) hit {} unit #{}",
                force.faction,
                unit.position.x,
                unit.position.y,
                force.faction.opponent(),
                target.index
            );
            engagements.push(EngagementView {
                faction: force.faction,
                shooter: unit.position,
                target: target.position,
            });
        }
    }
    hits
}
