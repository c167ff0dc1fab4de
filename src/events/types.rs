use crate::tasks::ActionKind;
use chrono::{DateTime, Duration, Utc};
use serde::Serialize;
use uuid::Uuid;

/// Every demand the event manager can raise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EventCategory {
    Crying,
    FeedingCall,
    DiaperFull,
    SleepDisruption,
    ColicAttack,
    ExplosiveDiaper,
    /// Small-hours special; only harder modes unlock it, and only at night.
    MidnightTerror,
    GiggleFit,
    BabbleShow,
}

impl EventCategory {
    pub fn key(&self) -> &'static str {
        match self {
            EventCategory::Crying => "crying",
            EventCategory::FeedingCall => "feeding_call",
            EventCategory::DiaperFull => "diaper_full",
            EventCategory::SleepDisruption => "sleep_disruption",
            EventCategory::ColicAttack => "colic_attack",
            EventCategory::ExplosiveDiaper => "explosive_diaper",
            EventCategory::MidnightTerror => "midnight_terror",
            EventCategory::GiggleFit => "giggle_fit",
            EventCategory::BabbleShow => "babble_show",
        }
    }
}

/// A time-boxed demand. Lifecycle is strictly `Pending → Resolved` or
/// `Pending → Expired`; in either case the event leaves the book at once, so
/// presence in the book means pending.
#[derive(Debug, Clone, Serialize)]
pub struct Event {
    pub id: Uuid,
    pub category: EventCategory,
    /// 1 (mild) to 10 (all hands).
    pub severity: u8,
    pub created_at: DateTime<Utc>,
    pub expires_after_secs: i64,
    pub required_actions: &'static [ActionKind],
    pub description: &'static str,
}

impl Event {
    pub fn expires_at(&self) -> DateTime<Utc> {
        self.created_at + Duration::seconds(self.expires_after_secs)
    }

    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        now >= self.expires_at()
    }

    pub fn accepts(&self, kind: ActionKind) -> bool {
        self.required_actions.contains(&kind)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn event(at: DateTime<Utc>) -> Event {
        Event {
            id: Uuid::new_v4(),
            category: EventCategory::Crying,
            severity: 5,
            created_at: at,
            expires_after_secs: 120,
            required_actions: &[ActionKind::Comfort, ActionKind::RockToSleep],
            description: "test",
        }
    }

    #[test]
    fn test_expiry_boundary() {
        let start = Utc.with_ymd_and_hms(2024, 3, 1, 9, 0, 0).unwrap();
        let ev = event(start);
        assert!(!ev.is_expired(start + Duration::seconds(119)));
        assert!(ev.is_expired(start + Duration::seconds(120)));
    }

    #[test]
    fn test_accepts_membership() {
        let start = Utc.with_ymd_and_hms(2024, 3, 1, 9, 0, 0).unwrap();
        let ev = event(start);
        assert!(ev.accepts(ActionKind::Comfort));
        assert!(ev.accepts(ActionKind::RockToSleep));
        assert!(!ev.accepts(ActionKind::Feed));
    }
}
