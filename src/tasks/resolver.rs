//! Shared outcome algorithm: weighted factors fold into a success
//! probability, one uniform draw decides the branch.
//!
//! Deterministic edge paths (categorically wrong discrete inputs) never reach
//! this module — they are fixed-delta branches in `logic`, independent of the
//! random source.

use rand::Rng;

/// One contributing factor. Inactive factors contribute nothing; weights are
/// signed and cumulative, not mutually exclusive.
#[derive(Debug, Clone, Copy)]
pub struct Factor {
    pub label: &'static str,
    pub weight: f64,
    pub active: bool,
}

impl Factor {
    pub fn new(label: &'static str, weight: f64, active: bool) -> Self {
        Self {
            label,
            weight,
            active,
        }
    }
}

/// Result of one probabilistic resolution. `chance` doubles as the
/// effectiveness magnitude some tasks use to scale their primary delta.
#[derive(Debug, Clone, Copy)]
pub struct Outcome {
    pub success: bool,
    pub chance: f64,
}

/// Folds the factor table into the base rate and clamps to `[0, 1]`.
///
/// The floor is 0.0: factors that cancel below zero make success impossible
/// but never produce a negative draw threshold.
pub fn success_chance(base_rate: f64, factors: &[Factor]) -> f64 {
    let mut rate = base_rate;
    for factor in factors {
        if factor.active {
            rate += factor.weight;
        }
    }
    rate.clamp(0.0, 1.0)
}

/// Exactly one uniform draw against the folded chance.
pub fn roll<R: Rng>(base_rate: f64, factors: &[Factor], rng: &mut R) -> Outcome {
    let chance = success_chance(base_rate, factors);
    let draw: f64 = rng.gen();
    Outcome {
        success: draw < chance,
        chance,
    }
}
