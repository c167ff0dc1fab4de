use crate::achievements::AchievementId;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Developmental phase; gates which tasks are registered for a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AgeStage {
    /// 0–3 months: eat, sleep, repeat.
    Newborn,
    /// 4–12 months: rolling over, first interactions.
    Infant,
    /// 13–24 months: demolition crew with a growing vocabulary.
    Toddler,
    /// 25+ months: a person with opinions.
    Preschool,
}

impl AgeStage {
    pub fn from_age_months(age_months: u32) -> Self {
        match age_months {
            0..=3 => AgeStage::Newborn,
            4..=12 => AgeStage::Infant,
            13..=24 => AgeStage::Toddler,
            _ => AgeStage::Preschool,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            AgeStage::Newborn => "0-3months",
            AgeStage::Infant => "4-12months",
            AgeStage::Toddler => "1-2years",
            AgeStage::Preschool => "2-3years",
        }
    }
}

/// The kind of caregiving motion a task performs.
///
/// Events name the kinds that resolve them, so tasks and events meet only
/// through this enum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActionKind {
    Feed,
    RockToSleep,
    ChangeDiaper,
    GiveMedicine,
    Comfort,
    ApplyCream,
    Play,
    Supervise,
    Guide,
}

/// Every care task variant, grouped by age stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskId {
    // Newborn
    PrepareBottle,
    SootheToSleep,
    ChangeDiaper,
    GiveMedicine,
    Hug,
    // Infant
    BabbleChat,
    PrepareSolids,
    CatchFall,
    FirstWord,
    // Toddler
    BlockHazard,
    MediateToyDispute,
    CorrectBadWord,
    // Preschool
    MorningDressing,
    EmotionDebrief,
}

impl TaskId {
    pub const ALL: [TaskId; 14] = [
        TaskId::PrepareBottle,
        TaskId::SootheToSleep,
        TaskId::ChangeDiaper,
        TaskId::GiveMedicine,
        TaskId::Hug,
        TaskId::BabbleChat,
        TaskId::PrepareSolids,
        TaskId::CatchFall,
        TaskId::FirstWord,
        TaskId::BlockHazard,
        TaskId::MediateToyDispute,
        TaskId::CorrectBadWord,
        TaskId::MorningDressing,
        TaskId::EmotionDebrief,
    ];

    pub fn stage(&self) -> AgeStage {
        match self {
            TaskId::PrepareBottle
            | TaskId::SootheToSleep
            | TaskId::ChangeDiaper
            | TaskId::GiveMedicine
            | TaskId::Hug => AgeStage::Newborn,
            TaskId::BabbleChat | TaskId::PrepareSolids | TaskId::CatchFall | TaskId::FirstWord => {
                AgeStage::Infant
            }
            TaskId::BlockHazard | TaskId::MediateToyDispute | TaskId::CorrectBadWord => {
                AgeStage::Toddler
            }
            TaskId::MorningDressing | TaskId::EmotionDebrief => AgeStage::Preschool,
        }
    }

    pub fn kind(&self) -> ActionKind {
        match self {
            TaskId::PrepareBottle | TaskId::PrepareSolids => ActionKind::Feed,
            TaskId::SootheToSleep => ActionKind::RockToSleep,
            TaskId::ChangeDiaper => ActionKind::ChangeDiaper,
            TaskId::GiveMedicine => ActionKind::GiveMedicine,
            TaskId::Hug => ActionKind::Comfort,
            TaskId::BabbleChat | TaskId::FirstWord => ActionKind::Play,
            TaskId::CatchFall | TaskId::BlockHazard => ActionKind::Supervise,
            TaskId::MediateToyDispute | TaskId::CorrectBadWord | TaskId::EmotionDebrief => {
                ActionKind::Guide
            }
            TaskId::MorningDressing => ActionKind::Supervise,
        }
    }

    pub fn key(&self) -> &'static str {
        match self {
            TaskId::PrepareBottle => "prepare_bottle",
            TaskId::SootheToSleep => "soothe_to_sleep",
            TaskId::ChangeDiaper => "change_diaper",
            TaskId::GiveMedicine => "give_medicine",
            TaskId::Hug => "hug",
            TaskId::BabbleChat => "babble_chat",
            TaskId::PrepareSolids => "prepare_solids",
            TaskId::CatchFall => "catch_fall",
            TaskId::FirstWord => "first_word",
            TaskId::BlockHazard => "block_hazard",
            TaskId::MediateToyDispute => "mediate_toy_dispute",
            TaskId::CorrectBadWord => "correct_bad_word",
            TaskId::MorningDressing => "morning_dressing",
            TaskId::EmotionDebrief => "emotion_debrief",
        }
    }

    /// Tasks registered for the given age.
    pub fn available(age_months: u32) -> Vec<TaskId> {
        let stage = AgeStage::from_age_months(age_months);
        TaskId::ALL.iter().copied().filter(|t| t.stage() == stage).collect()
    }
}

/// Immutable record returned to the caller for every resolved action.
///
/// Never carries post-state; callers re-read the session via `status()`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaskResult {
    pub success: bool,
    pub message: String,
    /// Requested attribute movements, keyed by stat name. Application to
    /// state is clamped, so the live value may move less than listed here.
    pub state_changes: BTreeMap<String, i32>,
    pub special_effects: Vec<String>,
    pub achievements_unlocked: Vec<AchievementId>,
}
