//! Simulation configuration.

use crate::modes::{Mode, Personality};

/// Configuration for a batch of simulated sessions.
#[derive(Debug, Clone)]
pub struct SimConfig {
    /// Number of independent sessions to simulate
    pub num_runs: u32,

    /// Simulated hours per session
    pub hours: u32,

    pub mode: Mode,
    pub personality: Personality,
    pub age_months: u32,

    /// Random seed for reproducibility (None = entropy)
    pub seed: Option<u64>,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            num_runs: 100,
            hours: 72,
            mode: Mode::Intern,
            personality: Personality::Angel,
            age_months: 1,
            seed: None,
        }
    }
}
