//! Static rule tables for every task variant: base success rates and the
//! positive/negative/edge delta tables the resolver applies.
//!
//! One engine, fourteen thin tables. Dynamic, magnitude-scaled deltas (such
//! as how much a feed reduces hunger) live in `logic`; everything fixed is
//! here.

use crate::state::Stat;

pub type DeltaTable = &'static [(Stat, i32)];

// ── Newborn ─────────────────────────────────────────────────────

pub const BOTTLE_BASE_RATE: f64 = 0.8;
pub const BOTTLE_OK: DeltaTable = &[
    (Stat::Comfort, 15),
    (Stat::Wellbeing, 10),
    (Stat::Confidence, 5),
    (Stat::PerformanceScore, 15),
];
pub const BOTTLE_FAIL: DeltaTable = &[
    (Stat::Comfort, -10),
    (Stat::Stress, 12),
    (Stat::Patience, -8),
    (Stat::PerformanceScore, -5),
];
/// Scald edge: the bottle is refused outright and the feed backfires.
pub const BOTTLE_SCALD: DeltaTable = &[
    (Stat::Hunger, 10),
    (Stat::Health, -5),
    (Stat::Wellbeing, -10),
    (Stat::Stress, 15),
    (Stat::PerformanceScore, -10),
];

pub const SOOTHE_BASE_RATE: f64 = 0.6;
pub const SOOTHE_OK: DeltaTable = &[
    (Stat::SleepDebt, -40),
    (Stat::Comfort, 15),
    (Stat::Energy, 20),
    (Stat::Confidence, 8),
    (Stat::Stress, -10),
    (Stat::PerformanceScore, 15),
];
pub const SOOTHE_FAIL: DeltaTable = &[
    (Stat::SleepDebt, 5),
    (Stat::Patience, -15),
    (Stat::Stress, 15),
    (Stat::PerformanceScore, -5),
];
/// Checking the phone mid-rock restarts the whole ordeal.
pub const SOOTHE_DISTRACTED: DeltaTable = &[
    (Stat::SleepDebt, 10),
    (Stat::Wellbeing, -5),
    (Stat::Stress, 10),
    (Stat::PerformanceScore, -10),
];

pub const DIAPER_BASE_RATE: f64 = 0.8;
pub const DIAPER_OK: DeltaTable = &[
    (Stat::Comfort, 20),
    (Stat::Wellbeing, 8),
    (Stat::Confidence, 5),
    (Stat::PerformanceScore, 15),
];
pub const DIAPER_FAIL: DeltaTable = &[
    (Stat::Hygiene, 30),
    (Stat::Comfort, -5),
    (Stat::Stress, 10),
    (Stat::Patience, -8),
    (Stat::PerformanceScore, -5),
];
/// Fresh diaper over an unwiped bottom: partially restored hygiene and a
/// rash risk charged against health.
pub const DIAPER_WRONG_ORDER: DeltaTable = &[
    (Stat::Hygiene, 40),
    (Stat::Health, -5),
    (Stat::Comfort, -5),
    (Stat::Stress, 10),
    (Stat::PerformanceScore, -10),
];
pub const DIAPER_SPRAY: DeltaTable = &[(Stat::Hygiene, -10), (Stat::Stress, 8)];

pub const MEDICINE_BASE_RATE: f64 = 0.9;
pub const MEDICINE_OK: DeltaTable = &[
    (Stat::Health, 15),
    (Stat::Comfort, 10),
    (Stat::Confidence, 6),
    (Stat::PerformanceScore, 20),
];
pub const MEDICINE_FAIL: DeltaTable = &[
    (Stat::Health, -3),
    (Stat::Stress, 8),
    (Stat::PerformanceScore, -5),
];
/// Wrong remedy for the symptoms.
pub const MEDICINE_WRONG: DeltaTable = &[
    (Stat::Health, -8),
    (Stat::Comfort, -10),
    (Stat::Stress, 12),
    (Stat::PerformanceScore, -15),
];

pub const HUG_SHORT_BASE_RATE: f64 = 0.5;
/// Long press: guaranteed warm landing.
pub const HUG_LONG: DeltaTable = &[
    (Stat::Intimacy, 10),
    (Stat::Wellbeing, 8),
    (Stat::Stress, -8),
    (Stat::PerformanceScore, 10),
];
pub const HUG_SHORT_OK: DeltaTable = &[
    (Stat::Intimacy, 4),
    (Stat::Wellbeing, 3),
    (Stat::PerformanceScore, 5),
];
pub const HUG_SHORT_FAIL: DeltaTable = &[
    (Stat::Wellbeing, -2),
    (Stat::Stress, 3),
    (Stat::PerformanceScore, -2),
];

// ── Infant ──────────────────────────────────────────────────────

pub const BABBLE_BASE_RATE: f64 = 0.6;
pub const BABBLE_OK: DeltaTable = &[
    (Stat::LanguageSkill, 8),
    (Stat::Wellbeing, 10),
    (Stat::Intimacy, 5),
    (Stat::SocialConfidence, 4),
    (Stat::PerformanceScore, 10),
];
pub const BABBLE_FAIL: DeltaTable = &[
    (Stat::Wellbeing, -3),
    (Stat::Confidence, -3),
    (Stat::PerformanceScore, -3),
];

pub const SOLIDS_BASE_RATE: f64 = 0.7;
pub const SOLIDS_OK: DeltaTable = &[
    (Stat::Wellbeing, 8),
    (Stat::MotorSkill, 3),
    (Stat::Confidence, 5),
    (Stat::PerformanceScore, 15),
];
pub const SOLIDS_FAIL: DeltaTable = &[
    (Stat::Hunger, 5),
    (Stat::Stress, 10),
    (Stat::Patience, -8),
    (Stat::PerformanceScore, -5),
];
/// The carrot trap: a fussy eater launches the bowl on sight.
pub const SOLIDS_REFUSED: DeltaTable = &[
    (Stat::Wellbeing, -12),
    (Stat::Hunger, 5),
    (Stat::Stress, 15),
    (Stat::Patience, -10),
    (Stat::PerformanceScore, -10),
];

pub const CATCH_BASE_RATE: f64 = 0.5;
pub const CATCH_OK: DeltaTable = &[
    (Stat::MotorSkill, 6),
    (Stat::Confidence, 8),
    (Stat::Comfort, 5),
    (Stat::PerformanceScore, 15),
];
pub const CATCH_FAIL: DeltaTable = &[
    (Stat::Health, -5),
    (Stat::Wellbeing, -8),
    (Stat::Stress, 12),
    (Stat::PerformanceScore, -10),
];
/// Never pressed the button at all.
pub const CATCH_MISSED: DeltaTable = &[
    (Stat::Health, -10),
    (Stat::Wellbeing, -15),
    (Stat::Stress, 20),
    (Stat::PerformanceScore, -20),
];

pub const FIRST_WORD_BASE_RATE: f64 = 0.8;
pub const FIRST_WORD_OK: DeltaTable = &[
    (Stat::LanguageSkill, 12),
    (Stat::Intimacy, 10),
    (Stat::Wellbeing, 15),
    (Stat::Confidence, 10),
    (Stat::PerformanceScore, 30),
];
pub const FIRST_WORD_FAIL: DeltaTable = &[
    (Stat::Intimacy, -2),
    (Stat::Confidence, -3),
    (Stat::PerformanceScore, -2),
];
/// Camera never rolled; the moment has no replay.
pub const FIRST_WORD_MISSED: DeltaTable = &[
    (Stat::Intimacy, -3),
    (Stat::Confidence, -5),
    (Stat::PerformanceScore, -5),
];

// ── Toddler ─────────────────────────────────────────────────────

pub const HAZARD_BASE_RATE: f64 = 0.8;
pub const HAZARD_OK: DeltaTable = &[
    (Stat::EmotionalRegulation, 4),
    (Stat::Confidence, 5),
    (Stat::Comfort, 3),
    (Stat::PerformanceScore, 15),
];
pub const HAZARD_FAIL: DeltaTable = &[
    (Stat::Health, -6),
    (Stat::Stress, 15),
    (Stat::PerformanceScore, -10),
];
/// Swiped the little hand toward the outlet.
pub const HAZARD_TOWARD: DeltaTable = &[
    (Stat::Health, -12),
    (Stat::Wellbeing, -10),
    (Stat::Stress, 25),
    (Stat::PerformanceScore, -25),
];

pub const MEDIATE_BASE_RATE: f64 = 0.7;
pub const MEDIATE_OK: DeltaTable = &[
    (Stat::SocialConfidence, 10),
    (Stat::EmotionalRegulation, 8),
    (Stat::Wellbeing, 8),
    (Stat::Skill, 5),
    (Stat::PerformanceScore, 20),
];
pub const MEDIATE_FAIL: DeltaTable = &[
    (Stat::Wellbeing, -6),
    (Stat::Stress, 12),
    (Stat::Patience, -10),
    (Stat::PerformanceScore, -8),
];
pub const MEDIATE_CONFISCATED: DeltaTable = &[
    (Stat::Wellbeing, -5),
    (Stat::SocialConfidence, -4),
    (Stat::Stress, 5),
    (Stat::PerformanceScore, -5),
];
pub const MEDIATE_IGNORED: DeltaTable = &[
    (Stat::Wellbeing, -8),
    (Stat::SocialConfidence, -6),
    (Stat::Stress, 8),
    (Stat::PerformanceScore, -10),
];

pub const BAD_WORD_BASE_RATE: f64 = 0.75;
pub const BAD_WORD_OK: DeltaTable = &[
    (Stat::LanguageSkill, 8),
    (Stat::EmotionalRegulation, 6),
    (Stat::Skill, 4),
    (Stat::PerformanceScore, 15),
];
pub const BAD_WORD_FAIL: DeltaTable = &[
    (Stat::Stress, 8),
    (Stat::Patience, -8),
    (Stat::PerformanceScore, -5),
];
pub const BAD_WORD_SCOLDED: DeltaTable = &[
    (Stat::Wellbeing, -10),
    (Stat::EmotionalRegulation, -5),
    (Stat::Stress, 8),
    (Stat::PerformanceScore, -10),
];
/// Laughing locks the word in forever.
pub const BAD_WORD_REINFORCED: DeltaTable = &[
    (Stat::SocialConfidence, 2),
    (Stat::EmotionalRegulation, -8),
    (Stat::PerformanceScore, -15),
];

// ── Preschool ───────────────────────────────────────────────────

pub const DRESSING_BASE_RATE: f64 = 0.65;
pub const DRESSING_OK: DeltaTable = &[
    (Stat::Wellbeing, 8),
    (Stat::MotorSkill, 5),
    (Stat::Confidence, 6),
    (Stat::PerformanceScore, 15),
];
pub const DRESSING_FAIL: DeltaTable = &[
    (Stat::Stress, 12),
    (Stat::Wellbeing, -4),
    (Stat::PerformanceScore, -5),
];
pub const DRESSING_OVERTIME: DeltaTable = &[
    (Stat::Stress, 20),
    (Stat::Patience, -15),
    (Stat::Wellbeing, -5),
    (Stat::PerformanceScore, -10),
];

pub const DEBRIEF_EMPATHIZE_BASE_RATE: f64 = 0.8;
pub const DEBRIEF_DISTRACT_BASE_RATE: f64 = 0.45;
pub const DEBRIEF_OK: DeltaTable = &[
    (Stat::EmotionalRegulation, 10),
    (Stat::Intimacy, 8),
    (Stat::Wellbeing, 10),
    (Stat::Skill, 5),
    (Stat::PerformanceScore, 20),
];
pub const DEBRIEF_FAIL: DeltaTable = &[
    (Stat::Wellbeing, -5),
    (Stat::Stress, 8),
    (Stat::PerformanceScore, -5),
];
pub const DEBRIEF_DISMISSED: DeltaTable = &[
    (Stat::EmotionalRegulation, -6),
    (Stat::Intimacy, -5),
    (Stat::Wellbeing, -8),
    (Stat::PerformanceScore, -10),
];

/// Soft words that register as engaged chatting during babble play.
pub const GENTLE_WORDS: &[&str] = &["sweetie", "good", "baby", "cutie", "love", "there"];

/// Peak hunger relief for a fully effective feed; scaled by the roll's
/// magnitude.
pub const FEED_HUNGER_RELIEF: f64 = 80.0;
pub const SOLIDS_HUNGER_RELIEF: f64 = 60.0;
/// Peak hygiene restored by a clean diaper change, scaled by magnitude.
pub const DIAPER_HYGIENE_RESTORE: f64 = 80.0;
