//! A force: one side's roster of identical units.

use attrition_core::config::ForceConfig;
use attrition_core::enums::Formation;
use attrition_core::types::{Faction, Position};

use crate::unit::Unit;

#[derive(Debug, Clone)]
pub struct Force {
    pub faction: Faction,
    pub name: String,
    pub color: String,
    /// Units deployed at the start of the run.
    pub strength: u32,
    pub engagement_range: f64,
    pub speed: f64,
    pub accuracy: f64,
    pub formation: Formation,
    /// Living units. Only ever shrinks during a run.
    pub units: Vec<Unit>,
}

impl Force {
    /// Create a force with an empty roster. Call `initialize_units` to deploy.
    pub fn new(faction: Faction, config: &ForceConfig, formation: Formation) -> Self {
        Self {
            faction,
            name: config.name.clone(),
            color: config.color.clone(),
            strength: config.strength,
            engagement_range: config.engagement_range,
            speed: config.speed,
            accuracy: config.accuracy,
            formation,
            units: Vec::new(),
        }
    }

    /// Initial positions for every slot of the roster.
    ///
    /// One line: units are spaced `field_size / (strength + 1)` apart along
    /// y, on a vertical line `border_offset` in from the force's own edge.
    pub fn generate_positions(&self, field_size: f64, border_offset: f64) -> Vec<Position> {
        match self.formation {
            Formation::OneLine => {
                let spacing = field_size / (self.strength as f64 + 1.0);
                let x = match self.faction {
                    Faction::Blue => border_offset,
                    Faction::Red => field_size - border_offset,
                };
                (0..self.strength)
                    .map(|slot| Position::new(x, (1.0 + slot as f64) * spacing))
                    .collect()
            }
        }
    }

    /// Replace the roster with a freshly deployed one.
    pub fn initialize_units(&mut self, field_size: f64, border_offset: f64) {
        self.units = self
            .generate_positions(field_size, border_offset)
            .into_iter()
            .map(|position| {
                Unit::new(
                    self.faction,
                    position,
                    self.engagement_range,
                    self.speed,
                    self.accuracy,
                )
            })
            .collect();
    }

    /// Drop every unit hit this step. Returns the number removed.
    pub fn remove_casualties(&mut self) -> usize {
        let before = self.units.len();
        self.units.retain(|unit| !unit.is_hit);
        before - self.units.len()
    }

    /// Clear per-step state on every unit.
    pub fn begin_step(&mut self) {
        for unit in &mut self.units {
            unit.begin_step();
        }
    }

    pub fn len(&self) -> usize {
        self.units.len()
    }

    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use attrition_core::constants::{DEFAULT_BORDER_OFFSET, DEFAULT_FIELD_SIZE};

    fn force(faction: Faction, strength: u32) -> Force {
        let config = ForceConfig {
            strength,
            ..ForceConfig::for_faction(faction)
        };
        Force::new(faction, &config, Formation::OneLine)
    }

    #[test]
    fn test_generate_positions_nine_units() {
        let blue = force(Faction::Blue, 9);
        let positions = blue.generate_positions(DEFAULT_FIELD_SIZE, DEFAULT_BORDER_OFFSET);
        assert_eq!(positions.len(), 9);
        assert!((positions[0].y - 10.0).abs() < 1e-10);
        assert!((positions[8].y - 90.0).abs() < 1e-10);
        assert!(positions.iter().all(|p| p.x == 10.0));
    }

    #[test]
    fn test_generate_positions_red_far_edge() {
        let red = force(Faction::Red, 4);
        let positions = red.generate_positions(100.0, 10.0);
        assert!(positions.iter().all(|p| p.x == 90.0));
        assert!((positions[0].y - 20.0).abs() < 1e-10);
        assert!((positions[3].y - 80.0).abs() < 1e-10);
    }

    #[test]
    fn test_generate_positions_custom_field() {
        let red = force(Faction::Red, 1);
        let positions = red.generate_positions(200.0, 25.0);
        assert_eq!(positions, vec![Position::new(175.0, 100.0)]);
    }

    #[test]
    fn test_initialize_units_inherits_attributes() {
        let config = ForceConfig {
            strength: 9,
            engagement_range: 30.0,
            speed: 2.5,
            accuracy: 0.3,
            ..ForceConfig::for_faction(Faction::Blue)
        };
        let mut blue = Force::new(Faction::Blue, &config, Formation::OneLine);
        assert!(blue.is_empty());

        blue.initialize_units(DEFAULT_FIELD_SIZE, DEFAULT_BORDER_OFFSET);
        assert_eq!(blue.len(), 9);
        assert!((blue.units[0].position.y - 10.0).abs() < 1e-10);
        for unit in &blue.units {
            assert_eq!(unit.faction, Faction::Blue);
            assert_eq!(unit.engagement_range, 30.0);
            assert_eq!(unit.speed, 2.5);
            assert_eq!(unit.accuracy, 0.3);
            assert!(unit.target.is_none());
            assert!(!unit.is_hit && !unit.has_hit);
        }
    }

    #[test]
    fn test_rosters_are_independent() {
        let mut a = force(Faction::Blue, 3);
        let mut b = force(Faction::Blue, 3);
        a.initialize_units(100.0, 10.0);
        b.initialize_units(100.0, 10.0);
        a.units[0].is_hit = true;
        a.remove_casualties();
        assert_eq!(a.len(), 2);
        assert_eq!(b.len(), 3);
    }

    #[test]
    fn test_remove_casualties_single() {
        let mut blue = force(Faction::Blue, 9);
        blue.initialize_units(100.0, 10.0);
        blue.units[0].is_hit = true;
        assert_eq!(blue.remove_casualties(), 1);
        assert_eq!(blue.len(), 8);
    }

    #[test]
    fn test_remove_casualties_adjacent_hits() {
        let mut red = force(Faction::Red, 6);
        red.initialize_units(100.0, 10.0);
        for index in [1, 2, 3, 5] {
            red.units[index].is_hit = true;
        }
        let survivors: Vec<Position> = [0, 4].iter().map(|&i| red.units[i].position).collect();

        assert_eq!(red.remove_casualties(), 4);
        assert_eq!(red.len(), 2);
        let remaining: Vec<Position> = red.units.iter().map(|u| u.position).collect();
        assert_eq!(remaining, survivors);
    }

    #[test]
    fn test_remove_casualties_all() {
        let mut red = force(Faction::Red, 3);
        red.initialize_units(100.0, 10.0);
        for unit in &mut red.units {
            unit.is_hit = true;
        }
        assert_eq!(red.remove_casualties(), 3);
        assert!(red.is_empty());
    }

    #[test]
    fn test_begin_step_resets_every_unit() {
        let mut blue = force(Faction::Blue, 3);
        blue.initialize_units(100.0, 10.0);
        for unit in &mut blue.units {
            unit.has_hit = true;
        }
        blue.begin_step();
        assert!(blue.units.iter().all(|u| !u.has_hit && !u.is_hit));
    }
}
