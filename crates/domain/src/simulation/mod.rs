//! Creature simulation
//!
//! Deterministic rules turning "time elapsed + an action" into a new
//! snapshot. Every operation takes the current time as a parameter and returns
//! a fresh snapshot; the input is never mutated. Callers are responsible for
//! serializing read-modify-write cycles per owner.

mod actions;
mod decay;
mod evolution;
mod rest;

pub use evolution::check_for_evolution;

use crate::simulation_config::SimulationConfig;

/// Runs the creature rules against one tuning configuration.
#[derive(Debug, Clone, Default)]
pub struct CreatureSimulator {
    config: SimulationConfig,
}

impl CreatureSimulator {
    pub fn new(config: SimulationConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }
}
