use serde::{Deserialize, Serialize};

/// Every bounded attribute a care task can move, across both the child and
/// the caregiver. Delta tables are slices of `(Stat, i32)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Stat {
    // Child
    Wellbeing,
    Energy,
    Hunger,
    SleepDebt,
    Hygiene,
    Comfort,
    Health,
    Intimacy,
    MotorSkill,
    LanguageSkill,
    EmotionalRegulation,
    SocialConfidence,
    LearningMotivation,
    // Caregiver
    Confidence,
    Stress,
    Patience,
    Skill,
    PerformanceScore,
}

impl Stat {
    /// Snake-case key used in `TaskResult::state_changes` and reports.
    pub fn key(&self) -> &'static str {
        match self {
            Stat::Wellbeing => "wellbeing",
            Stat::Energy => "energy",
            Stat::Hunger => "hunger",
            Stat::SleepDebt => "sleep_debt",
            Stat::Hygiene => "hygiene",
            Stat::Comfort => "comfort",
            Stat::Health => "health",
            Stat::Intimacy => "intimacy",
            Stat::MotorSkill => "motor_skill",
            Stat::LanguageSkill => "language_skill",
            Stat::EmotionalRegulation => "emotional_regulation",
            Stat::SocialConfidence => "social_confidence",
            Stat::LearningMotivation => "learning_motivation",
            Stat::Confidence => "confidence",
            Stat::Stress => "stress",
            Stat::Patience => "patience",
            Stat::Skill => "skill",
            Stat::PerformanceScore => "performance_score",
        }
    }

    /// True for attributes that live on the child side of the session.
    pub fn is_child(&self) -> bool {
        !matches!(
            self,
            Stat::Confidence
                | Stat::Stress
                | Stat::Patience
                | Stat::Skill
                | Stat::PerformanceScore
        )
    }
}
