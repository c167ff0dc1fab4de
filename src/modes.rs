//! Difficulty/pace profiles and the child personality bias.
//!
//! A [`Mode`] is a named tier controlling decay rate, event frequency, and
//! time-of-day gating. A [`Personality`] only skews the event manager's
//! category selection between the negative and positive pools.

use chrono::{DateTime, Timelike, Utc};
use serde::{Deserialize, Serialize};

use crate::core::constants::{
    NIGHT_PROTECTION_END_HOUR, NIGHT_PROTECTION_START_HOUR, NOCTURNAL_WINDOW,
};

/// Difficulty/pace tier for a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Mode {
    /// Relaxed: halved decay, night protection, away time is not charged.
    Cloud,
    /// Default pacing.
    Intern,
    /// Accelerated decay, frequent and harsher events, nocturnal specials.
    HellWeek,
}

/// Resolved tuning values for a mode. Read-only after construction.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ModeProfile {
    pub decay_rate: f64,
    pub event_frequency: f64,
    pub night_protection: bool,
    pub offline_pause: bool,
    /// Inclusive severity range for triggered events.
    pub severity_range: (u8, u8),
    /// Whether restricted nocturnal categories may trigger.
    pub nocturnal_events: bool,
}

impl Mode {
    pub fn profile(&self) -> ModeProfile {
        match self {
            Mode::Cloud => ModeProfile {
                decay_rate: 0.5,
                event_frequency: 0.3,
                night_protection: true,
                offline_pause: true,
                severity_range: (3, 8),
                nocturnal_events: false,
            },
            Mode::Intern => ModeProfile {
                decay_rate: 1.0,
                event_frequency: 1.0,
                night_protection: false,
                offline_pause: false,
                severity_range: (3, 8),
                nocturnal_events: false,
            },
            Mode::HellWeek => ModeProfile {
                decay_rate: 1.5,
                event_frequency: 1.8,
                night_protection: false,
                offline_pause: false,
                severity_range: (6, 10),
                nocturnal_events: true,
            },
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Mode::Cloud => "cloud_parenting",
            Mode::Intern => "intern_parent",
            Mode::HellWeek => "hell_week",
        }
    }
}

impl ModeProfile {
    /// True when this mode shields the given instant from decay and events.
    pub fn night_protected(&self, now: DateTime<Utc>) -> bool {
        self.night_protection && in_overnight_band(now.hour())
    }
}

/// Overnight band used by night protection (wraps midnight).
pub fn in_overnight_band(hour: u32) -> bool {
    hour >= NIGHT_PROTECTION_START_HOUR || hour < NIGHT_PROTECTION_END_HOUR
}

/// Small-hours band in which restricted high-severity categories unlock.
pub fn in_nocturnal_window(hour: u32) -> bool {
    (NOCTURNAL_WINDOW.0..=NOCTURNAL_WINDOW.1).contains(&hour)
}

/// Bias applied to event category selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Personality {
    /// Mostly sunny: 30% negative, 70% positive events.
    Angel,
    /// High-need: 70% negative, 30% positive events.
    Fussy,
}

impl Personality {
    pub fn negative_weight(&self) -> f64 {
        match self {
            Personality::Angel => 0.3,
            Personality::Fussy => 0.7,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Personality::Angel => "chill_angel",
            Personality::Fussy => "fussy_crybaby",
        }
    }
}
