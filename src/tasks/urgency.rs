//! Need-priority assessment per task, in `[0, 100]`.
//!
//! Each score combines the relevant need attribute, an elapsed-time term
//! since the last service, and a small cross-attribute adjustment. Pure
//! functions of the passed-in states and timestamp.

use crate::core::constants::*;
use crate::state::{CaregiverState, ChildState, Emotion};
use crate::tasks::types::TaskId;
use chrono::{DateTime, Utc};

/// Computed need-priority for ranking competing demands.
pub fn urgency(
    task: TaskId,
    child: &ChildState,
    caregiver: &CaregiverState,
    now: DateTime<Utc>,
) -> i32 {
    let stressed = caregiver.stress > STRESS_URGENCY_THRESHOLD;
    let score = match task {
        TaskId::PrepareBottle => {
            let mut s = child.hunger;
            let since = child.hours_since_fed(now);
            if since > FEED_OVERDUE_HOURS {
                s += (since * FEED_URGENCY_PER_HOUR) as i32;
            }
            if child.comfort < 50 {
                s += 10;
            }
            s
        }
        TaskId::SootheToSleep => {
            let mut s = child.sleep_debt;
            let awake = child.hours_since_slept(now);
            if awake > SLEEP_OVERDUE_HOURS {
                s += (awake * SLEEP_URGENCY_PER_HOUR) as i32;
            }
            // Hard to settle a hungry or soggy baby; those needs come first.
            if child.hunger > 70 {
                s -= 20;
            }
            if child.hygiene < 40 {
                s -= 15;
            }
            s
        }
        TaskId::ChangeDiaper => {
            let mut s = 100 - child.hygiene;
            if child.comfort < 30 {
                s += 30;
            }
            s
        }
        TaskId::GiveMedicine => {
            let temp = child.body_temperature;
            if temp >= FEVER_THRESHOLD {
                70 + ((temp - FEVER_THRESHOLD) * 50.0) as i32
            } else if temp < 35.5 {
                70 + ((35.5 - temp) * 50.0) as i32
            } else if !(36.0..=37.5).contains(&temp) {
                30
            } else {
                0
            }
        }
        TaskId::Hug => {
            let mut s = (100 - child.intimacy) / 2;
            if child.emotion != Emotion::Happy {
                s += 30;
            }
            if stressed {
                s += STRESS_URGENCY_BUMP;
            }
            s
        }
        TaskId::BabbleChat => {
            let mut s = (100 - child.language_skill) / 2;
            if child.energy > 70 {
                s += 15;
            }
            s
        }
        TaskId::PrepareSolids => {
            let mut s = child.hunger;
            let since = child.hours_since_fed(now);
            if since > SOLIDS_OVERDUE_HOURS {
                s += (since * SOLIDS_URGENCY_PER_HOUR) as i32;
            }
            s
        }
        TaskId::CatchFall => {
            let mut s = 30;
            if child.motor_skill > 30 {
                s += 20;
            }
            if child.energy > 60 {
                s += 20;
            }
            s
        }
        TaskId::FirstWord => {
            // Milestones surface when everyone is doing well.
            let mut s = 5;
            if child.wellbeing > 80 {
                s += 10;
            }
            if child.intimacy > 70 {
                s += 10;
            }
            s
        }
        TaskId::BlockHazard => {
            let mut s = 40;
            if child.motor_skill > 40 {
                s += 20;
            }
            if child.energy > 60 {
                s += 15;
            }
            s
        }
        TaskId::MediateToyDispute => {
            let mut s = (100 - child.social_confidence) / 2 + (100 - child.emotional_regulation) / 4;
            if stressed {
                s += STRESS_URGENCY_BUMP;
            }
            s
        }
        TaskId::CorrectBadWord => 30 + child.language_skill / 2,
        TaskId::MorningDressing => {
            let mut s = 50;
            if child.energy < 40 {
                s += 10;
            }
            if caregiver.patience < 50 {
                s += 10;
            }
            s
        }
        TaskId::EmotionDebrief => {
            let mut s = 100 - child.emotional_regulation;
            if child.emotion != Emotion::Happy {
                s += 30;
            }
            if stressed {
                s += STRESS_URGENCY_BUMP;
            }
            s
        }
    };
    score.clamp(0, 100)
}

/// All stage-available tasks ranked most-urgent first.
pub fn ranked_needs(
    child: &ChildState,
    caregiver: &CaregiverState,
    now: DateTime<Utc>,
) -> Vec<(TaskId, i32)> {
    let mut needs: Vec<(TaskId, i32)> = TaskId::available(child.age_months)
        .into_iter()
        .map(|t| (t, urgency(t, child, caregiver, now)))
        .collect();
    needs.sort_by(|a, b| b.1.cmp(&a.1));
    needs
}
