// Body temperature (°C)
pub const BODY_TEMP_MIN: f64 = 35.0;
pub const BODY_TEMP_MAX: f64 = 40.0;
pub const BODY_TEMP_NOMINAL: f64 = 36.5;
pub const FEVER_THRESHOLD: f64 = 38.0;

// Decay rates per hour, before the mode multiplier
pub const HUNGER_PER_HOUR: f64 = 15.0;
pub const HYGIENE_LOSS_PER_HOUR: f64 = 10.0;
pub const SLEEP_DEBT_PER_HOUR: f64 = 20.0;
pub const ENERGY_LOSS_PER_HOUR: f64 = 8.0;
// Energy only drains down to a resting floor
pub const ENERGY_DRAIN_FLOOR: i32 = 50;

// Away-time (unwatched) decay is charged at a fraction of the live rate
pub const AWAY_DECAY_MULTIPLIER: f64 = 0.25;

// Comfort is derived: each breached threshold subtracts its penalty
pub const COMFORT_HUNGER_THRESHOLD: i32 = 70;
pub const COMFORT_HUNGER_PENALTY: i32 = 10;
pub const COMFORT_HYGIENE_THRESHOLD: i32 = 40;
pub const COMFORT_HYGIENE_PENALTY: i32 = 15;
pub const COMFORT_SLEEP_THRESHOLD: i32 = 80;
pub const COMFORT_SLEEP_PENALTY: i32 = 20;

// Time-of-day bands (hours, local to the passed-in timestamp)
pub const NIGHT_PROTECTION_START_HOUR: u32 = 22;
pub const NIGHT_PROTECTION_END_HOUR: u32 = 8;
/// Inclusive small-hours window for restricted nocturnal events.
pub const NOCTURNAL_WINDOW: (u32, u32) = (2, 5);

// Event triggering
pub const BASE_EVENT_CHANCE_PER_TICK: f64 = 0.10;
pub const MAX_ACTIVE_EVENTS: usize = 3;

// Scoring
pub const RECENT_ACTION_CAPACITY: usize = 20;
pub const FAST_RESPONSE_SECS: f64 = 30.0;
pub const OK_RESPONSE_SECS: f64 = 60.0;
pub const KPI_FAST_BONUS: i32 = 10;
pub const KPI_OK_BONUS: i32 = 5;
pub const KPI_SLOW_PENALTY: i32 = -5;
pub const KPI_STRESS_HIGH_THRESHOLD: i32 = 70;
pub const KPI_STRESS_HIGH_PENALTY: i32 = -15;
pub const KPI_STRESS_MID_THRESHOLD: i32 = 50;
pub const KPI_STRESS_MID_PENALTY: i32 = -5;
pub const KPI_MAX: i32 = 100;

// Caregiver cumulative score
pub const PERFORMANCE_SCORE_MAX: i32 = 1000;

// Contained execution faults apply a fixed, small penalty
pub const FAULT_STRESS_PENALTY: i32 = 5;
pub const FAULT_SCORE_PENALTY: i32 = -5;

// Task thresholds
pub const BOTTLE_TEMP_MIN: f64 = 37.0;
pub const BOTTLE_TEMP_MAX: f64 = 41.0;
pub const HUG_LONG_PRESS_SECS: f64 = 3.0;
/// Lifting the legs slower than this invites a spray ambush.
pub const DIAPER_SLOW_LIFT_SECS: f64 = 5.0;
pub const DIAPER_SPRAY_CHANCE: f64 = 0.35;
pub const IDEAL_SHAKE_FREQ: (f64, f64) = (1.5, 2.5);
pub const SOOTHE_MIN_EFFECTIVE_SECS: u32 = 45;
pub const CATCH_FAST_REACTION_SECS: f64 = 1.0;
pub const CATCH_OK_REACTION_SECS: f64 = 2.0;
pub const DRESSING_COMFORTABLE_MARGIN_SECS: u32 = 15;

// Urgency accumulation rates (points per hour since last service)
pub const FEED_URGENCY_PER_HOUR: f64 = 20.0;
pub const SOLIDS_URGENCY_PER_HOUR: f64 = 15.0;
pub const SLEEP_URGENCY_PER_HOUR: f64 = 15.0;
pub const FEED_OVERDUE_HOURS: f64 = 2.0;
pub const SOLIDS_OVERDUE_HOURS: f64 = 3.0;
pub const SLEEP_OVERDUE_HOURS: f64 = 1.5;
/// Caregiver stress above this raises the urgency of emotionally-loaded tasks.
pub const STRESS_URGENCY_THRESHOLD: i32 = 70;
pub const STRESS_URGENCY_BUMP: i32 = 15;
