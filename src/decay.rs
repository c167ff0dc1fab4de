//! Need decay: advances the child's physiological state with elapsed time.
//!
//! Pull-based — nothing here runs on a timer. The hosting layer reports
//! active elapsed hours through `Session::tick`; unwatched time goes through
//! the away-time path at a reduced charge.

use crate::core::constants::*;
use crate::modes::ModeProfile;
use crate::state::{ChildState, Stat};
use chrono::{DateTime, Utc};
use serde::Serialize;

/// What a decay pass did, for reports and logging.
#[derive(Debug, Clone, Copy, Default, Serialize)]
pub struct DecayOutcome {
    /// False when night protection suppressed the pass entirely.
    pub applied: bool,
    pub hours_charged: f64,
    /// Total comfort subtracted by breached-need thresholds.
    pub comfort_penalty: i32,
}

/// Applies linear per-hour decay, scaled by the mode's rate.
///
/// Comfort is not decayed directly: after the linear pass, every breached
/// need threshold subtracts its own comfort penalty.
pub fn run_decay(
    child: &mut ChildState,
    elapsed_hours: f64,
    profile: &ModeProfile,
    now: DateTime<Utc>,
) -> DecayOutcome {
    if elapsed_hours <= 0.0 {
        return DecayOutcome::default();
    }
    if profile.night_protected(now) {
        return DecayOutcome::default();
    }
    charge(child, elapsed_hours * profile.decay_rate)
}

/// Charges reported away time at the reduced multiplier, unless the mode
/// pauses decay entirely while unwatched.
pub fn run_away_decay(
    child: &mut ChildState,
    away_hours: f64,
    profile: &ModeProfile,
) -> DecayOutcome {
    if away_hours <= 0.0 || profile.offline_pause {
        return DecayOutcome::default();
    }
    charge(
        child,
        away_hours * profile.decay_rate * AWAY_DECAY_MULTIPLIER,
    )
}

fn charge(child: &mut ChildState, hours: f64) -> DecayOutcome {
    child.apply(Stat::Hunger, (hours * HUNGER_PER_HOUR) as i32);
    child.apply(Stat::Hygiene, -((hours * HYGIENE_LOSS_PER_HOUR) as i32));
    child.apply(Stat::SleepDebt, (hours * SLEEP_DEBT_PER_HOUR) as i32);
    if child.energy > ENERGY_DRAIN_FLOOR {
        child.apply(Stat::Energy, -((hours * ENERGY_LOSS_PER_HOUR) as i32));
    }

    let mut comfort_penalty = 0;
    if child.hunger > COMFORT_HUNGER_THRESHOLD {
        comfort_penalty += COMFORT_HUNGER_PENALTY;
    }
    if child.hygiene < COMFORT_HYGIENE_THRESHOLD {
        comfort_penalty += COMFORT_HYGIENE_PENALTY;
    }
    if child.sleep_debt > COMFORT_SLEEP_THRESHOLD {
        comfort_penalty += COMFORT_SLEEP_PENALTY;
    }
    if comfort_penalty > 0 {
        child.apply(Stat::Comfort, -comfort_penalty);
    }
    child.refresh_emotion();

    DecayOutcome {
        applied: true,
        hours_charged: hours,
        comfort_penalty,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modes::Mode;
    use chrono::TimeZone;

    fn daytime() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 1, 14, 0, 0).unwrap()
    }

    fn night() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 1, 23, 0, 0).unwrap()
    }

    #[test]
    fn test_linear_decay_at_normal_rate() {
        let mut child = ChildState::new(1, daytime());
        let outcome = run_decay(&mut child, 2.0, &Mode::Intern.profile(), daytime());
        assert!(outcome.applied);
        assert_eq!(child.hunger, 30);
        assert_eq!(child.hygiene, 80);
        assert_eq!(child.sleep_debt, 40);
        assert_eq!(child.energy, 84);
    }

    #[test]
    fn test_cloud_mode_halves_decay() {
        let mut child = ChildState::new(1, daytime());
        run_decay(&mut child, 2.0, &Mode::Cloud.profile(), daytime());
        assert_eq!(child.hunger, 15);
        assert_eq!(child.sleep_debt, 20);
    }

    #[test]
    fn test_hell_week_accelerates_decay() {
        let mut child = ChildState::new(1, daytime());
        run_decay(&mut child, 2.0, &Mode::HellWeek.profile(), daytime());
        assert_eq!(child.hunger, 45);
    }

    #[test]
    fn test_night_protection_suppresses_decay() {
        let mut child = ChildState::new(1, night());
        let before = child.clone();
        let outcome = run_decay(&mut child, 6.0, &Mode::Cloud.profile(), night());
        assert!(!outcome.applied);
        assert_eq!(child.hunger, before.hunger);
        assert_eq!(child.hygiene, before.hygiene);
        assert_eq!(child.sleep_debt, before.sleep_debt);
        assert_eq!(child.comfort, before.comfort);
    }

    #[test]
    fn test_night_protection_requires_the_mode_flag() {
        let mut child = ChildState::new(1, night());
        let outcome = run_decay(&mut child, 2.0, &Mode::Intern.profile(), night());
        assert!(outcome.applied);
        assert!(child.hunger > 0);
    }

    #[test]
    fn test_comfort_penalty_scales_with_breaches() {
        let mut child = ChildState::new(1, daytime());
        child.hunger = 75;
        child.hygiene = 30;
        child.sleep_debt = 85;
        let outcome = run_decay(&mut child, 0.1, &Mode::Intern.profile(), daytime());
        assert_eq!(
            outcome.comfort_penalty,
            COMFORT_HUNGER_PENALTY + COMFORT_HYGIENE_PENALTY + COMFORT_SLEEP_PENALTY
        );
        assert_eq!(child.comfort, 100 - outcome.comfort_penalty);
    }

    #[test]
    fn test_energy_stops_at_resting_floor() {
        let mut child = ChildState::new(1, daytime());
        child.energy = 51;
        run_decay(&mut child, 1.0, &Mode::Intern.profile(), daytime());
        let settled = child.energy;
        assert!(settled <= ENERGY_DRAIN_FLOOR);
        run_decay(&mut child, 5.0, &Mode::Intern.profile(), daytime());
        assert_eq!(child.energy, settled);
    }

    #[test]
    fn test_away_decay_charged_at_quarter_rate() {
        let mut live = ChildState::new(1, daytime());
        let mut away = ChildState::new(1, daytime());
        run_decay(&mut live, 4.0, &Mode::Intern.profile(), daytime());
        run_away_decay(&mut away, 4.0, &Mode::Intern.profile());
        assert_eq!(away.hunger, 15);
        assert_eq!(live.hunger, 60);
    }

    #[test]
    fn test_offline_pause_charges_nothing() {
        let mut child = ChildState::new(1, daytime());
        let outcome = run_away_decay(&mut child, 12.0, &Mode::Cloud.profile());
        assert!(!outcome.applied);
        assert_eq!(child.hunger, 0);
    }

    #[test]
    fn test_negative_elapsed_is_ignored() {
        let mut child = ChildState::new(1, daytime());
        let outcome = run_decay(&mut child, -3.0, &Mode::Intern.profile(), daytime());
        assert!(!outcome.applied);
        assert_eq!(child.hunger, 0);
    }
}
