//! Per-step roster size history and outcome classification.

use attrition_core::enums::Outcome;
use attrition_core::state::RunSummary;

#[derive(Debug, Clone)]
pub struct ResultTracker {
    names: [String; 2],
    /// Roster sizes at deployment, reported when no step has run yet.
    initial: (usize, usize),
    steps: u32,
    blue: Vec<usize>,
    red: Vec<usize>,
}

impl ResultTracker {
    pub fn new(names: [String; 2], initial_blue: usize, initial_red: usize) -> Self {
        Self {
            names,
            initial: (initial_blue, initial_red),
            steps: 0,
            blue: Vec::new(),
            red: Vec::new(),
        }
    }

    /// Record one completed step.
    pub fn update(&mut self, blue_roster_size: usize, red_roster_size: usize) {
        self.steps += 1;
        self.blue.push(blue_roster_size);
        self.red.push(red_roster_size);
    }

    pub fn steps(&self) -> u32 {
        self.steps
    }

    pub fn blue_history(&self) -> &[usize] {
        &self.blue
    }

    pub fn red_history(&self) -> &[usize] {
        &self.red
    }

    /// Most recently recorded (blue, red) sizes.
    pub fn latest(&self) -> (usize, usize) {
        match (self.blue.last(), self.red.last()) {
            (Some(&blue), Some(&red)) => (blue, red),
            _ => self.initial,
        }
    }

    pub fn outcome(&self) -> Outcome {
        let (blue, red) = self.latest();
        Outcome::classify(blue, red)
    }

    pub fn summarize(&self) -> RunSummary {
        let (blue_final, red_final) = self.latest();
        RunSummary {
            steps: self.steps,
            outcome: self.outcome(),
            names: self.names.clone(),
            blue_final,
            red_final,
            blue: self.blue.clone(),
            red: self.red.clone(),
        }
    }
}
