//! A single combatant.
//!
//! Targeting, movement and firing for one unit. The unit never looks at
//! live enemy geometry after targeting: `move_to_engage` and `fire` both
//! read the `TargetLock` captured by `find_target` at the start of the
//! step, so both sides act on the same information regardless of which
//! roster is processed first.

use rand::Rng;

use attrition_core::types::{Faction, Position};

/// Target information captured once per step during targeting.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TargetLock {
    /// Index into the enemy roster as it stood at the start of the step.
    /// Stale as soon as casualties are removed.
    pub index: usize,
    /// Copy of the enemy's position when the lock was taken.
    pub position: Position,
    /// Distance to the enemy when the lock was taken.
    pub distance: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Unit {
    pub faction: Faction,
    pub position: Position,
    pub engagement_range: f64,
    pub speed: f64,
    pub accuracy: f64,
    /// Current step's target. `None` until targeting runs, or when the
    /// enemy roster was empty.
    pub target: Option<TargetLock>,
    /// Hit by an enemy during this step's action phase.
    pub is_hit: bool,
    /// Scored a hit during this step's action phase.
    pub has_hit: bool,
}

impl Unit {
    pub fn new(
        faction: Faction,
        position: Position,
        engagement_range: f64,
        speed: f64,
        accuracy: f64,
    ) -> Self {
        Self {
            faction,
            position,
            engagement_range,
            speed,
            accuracy,
            target: None,
            is_hit: false,
            has_hit: false,
        }
    }

    /// Clear all per-step state.
    pub fn begin_step(&mut self) {
        self.target = None;
        self.is_hit = false;
        self.has_hit = false;
    }

    pub fn distance_to(&self, other: &Unit) -> f64 {
        self.position.distance_to(&other.position)
    }

    /// Lock onto the closest enemy. Ties go to the lowest roster index.
    ///
    /// Returns `false` (and leaves the unit without a target) when the
    /// enemy roster is empty.
    pub fn find_target(&mut self, enemies: &[Unit]) -> bool {
        let mut best: Option<TargetLock> = None;
        for (index, enemy) in enemies.iter().enumerate() {
            let distance = self.distance_to(enemy);
            if best.is_none_or(|b| distance < b.distance) {
                best = Some(TargetLock {
                    index,
                    position: enemy.position,
                    distance,
                });
            }
        }
        self.target = best;
        best.is_some()
    }

    /// Close in on the locked target.
    ///
    /// Holds position with no target, a zero-distance target, or a target
    /// already within engagement range. When the target is within one
    /// step's reach the unit only advances to the stand-off point,
    /// `engagement_range * firing_distance_fraction` short of the target.
    pub fn move_to_engage(&mut self, firing_distance_fraction: f64) {
        let Some(target) = self.target else {
            return;
        };
        let distance = target.distance;
        if distance == 0.0 || distance <= self.engagement_range {
            return;
        }

        let closing_speed = if distance <= self.speed {
            distance - self.engagement_range * firing_distance_fraction
        } else {
            self.speed
        };
        if closing_speed <= 0.0 {
            return;
        }

        let dx = target.position.x - self.position.x;
        let dy = target.position.y - self.position.y;

        // Coincident x: straight up or down, no angle needed.
        if dx == 0.0 {
            if dy < 0.0 {
                self.position.y -= closing_speed;
            } else {
                self.position.y += closing_speed;
            }
            return;
        }

        // An angled step never reaches or passes the target itself.
        if closing_speed >= distance {
            return;
        }

        let alpha = (dy.abs() / dx.abs()).atan();
        self.position.x += alpha.cos() * closing_speed * dx.signum();
        if dy != 0.0 {
            self.position.y += alpha.sin() * closing_speed * dy.signum();
        }
    }

    /// Bernoulli trial against the locked target.
    ///
    /// In range (by the targeting-time distance) and a uniform draw below
    /// `accuracy` marks the target hit. The draw is only taken when the
    /// target is in range. Returns whether the shot hit.
    pub fn fire(&mut self, enemies: &mut [Unit], rng: &mut impl Rng) -> bool {
        let Some(target) = self.target else {
            return false;
        };
        if target.distance > self.engagement_range {
            return false;
        }
        if rng.gen::<f64>() >= self.accuracy {
            return false;
        }

        self.has_hit = true;
        if let Some(enemy) = enemies.get_mut(target.index) {
            enemy.is_hit = true;
        }
        true
    }
}
