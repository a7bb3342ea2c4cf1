//! Property tests over randomly generated valid configurations.

use proptest::prelude::*;

use attrition_core::config::SimConfig;
use attrition_core::enums::Outcome;
use attrition_core::types::Faction;
use attrition_sim::{run_simulation, SimulationRunner};

prop_compose! {
    fn arb_config()(
        strengths in prop::array::uniform2(1u32..25),
        ranges in prop::array::uniform2(1.0f64..80.0),
        speeds in prop::array::uniform2(0.0f64..6.0),
        accuracies in prop::array::uniform2(0.0f64..=1.0),
        max_steps in 1u32..150,
        fraction in 0.0f64..=1.0,
        seed in any::<u64>(),
    ) -> SimConfig {
        let mut config = SimConfig::default();
        for faction in Faction::ALL {
            let i = faction.index();
            let force = config.force_mut(faction);
            force.strength = strengths[i];
            force.engagement_range = ranges[i];
            force.speed = speeds[i];
            force.accuracy = accuracies[i];
        }
        config.max_steps = max_steps;
        config.firing_distance_fraction = fraction;
        config.seed = seed;
        config
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn rosters_never_grow(config in arb_config()) {
        let initial = [
            config.force(Faction::Blue).strength as usize,
            config.force(Faction::Red).strength as usize,
        ];
        let summary = run_simulation(config).unwrap();

        let mut previous = initial;
        for (blue, red) in summary.series() {
            prop_assert!(blue <= previous[0]);
            prop_assert!(red <= previous[1]);
            previous = [blue, red];
        }
    }

    #[test]
    fn run_terminates_within_budget(config in arb_config()) {
        let max_steps = config.max_steps;
        let summary = run_simulation(config).unwrap();

        prop_assert!(summary.steps >= 1);
        prop_assert!(summary.steps <= max_steps);
        prop_assert_eq!(summary.blue.len(), summary.steps as usize);
        if summary.steps < max_steps {
            prop_assert!(summary.outcome.is_decided());
        }
        prop_assert_eq!(
            summary.outcome,
            Outcome::classify(summary.blue_final, summary.red_final)
        );
    }

    #[test]
    fn same_seed_same_series(config in arb_config()) {
        let a = run_simulation(config.clone()).unwrap();
        let b = run_simulation(config).unwrap();
        prop_assert_eq!(a.blue, b.blue);
        prop_assert_eq!(a.red, b.red);
        prop_assert_eq!(a.outcome, b.outcome);
    }

    #[test]
    fn zero_accuracy_means_no_hits(mut config in arb_config()) {
        for faction in Faction::ALL {
            config.force_mut(faction).accuracy = 0.0;
        }
        let mut runner = SimulationRunner::new(config.clone()).unwrap();
        let snapshots = runner.advance(config.max_steps);
        prop_assert!(snapshots.iter().all(|s| s.engagements.is_empty()));

        let summary = runner.run();
        prop_assert_eq!(summary.outcome, Outcome::Undecided);
        prop_assert_eq!(summary.blue_final, config.force(Faction::Blue).strength as usize);
        prop_assert_eq!(summary.red_final, config.force(Faction::Red).strength as usize);
    }

    #[test]
    fn snapshot_units_match_roster_sizes(config in arb_config()) {
        let mut runner = SimulationRunner::new(config).unwrap();
        while let Some(snapshot) = runner.step() {
            let blue = snapshot.units.iter().filter(|u| u.faction == Faction::Blue).count();
            let red = snapshot.units.iter().filter(|u| u.faction == Faction::Red).count();
            prop_assert_eq!(blue, snapshot.blue_strength);
            prop_assert_eq!(red, snapshot.red_strength);
            if runner.steps() >= 200 {
                break;
            }
        }
    }
}
