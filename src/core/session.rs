//! Per-session controller: composes state, tasks, decay, events, scoring,
//! and achievements behind `apply_action` / `tick` / `status`.
//!
//! A session is single-writer: the hosting layer serializes all mutating
//! calls against one session instance. Nothing here blocks, suspends, or
//! reads the system clock.

use crate::achievements::{self, AchievementId, AchievementLedger, CareStats};
use crate::core::constants::*;
use crate::core::error::{EngineError, ExecutionFault};
use crate::decay::{run_away_decay, run_decay};
use crate::events::{data as event_data, Event, EventBook, EventCategory, ResolvedEvent};
use crate::modes::{Mode, ModeProfile, Personality};
use crate::scoring::{compute_kpi, ActionRecord};
use crate::state::{CaregiverState, ChildState, Stat};
use crate::tasks::{self, TaskId, TaskResult};
use chrono::{DateTime, Timelike, Utc};
use log::{info, warn};
use rand::Rng;
use serde::Serialize;
use serde_json::Value;
use std::collections::BTreeMap;
use uuid::Uuid;

/// Read-only snapshot of a session, safe to hand to any presentation layer.
#[derive(Debug, Clone, Serialize)]
pub struct StatusReport {
    pub child: ChildState,
    pub caregiver: CaregiverState,
    pub active_events: Vec<Event>,
    pub achievements: Vec<AchievementId>,
    pub kpi: i32,
}

/// What one `tick` call did.
#[derive(Debug, Clone, Serialize)]
pub struct TickReport {
    pub new_events: Vec<Event>,
    pub expired_events: Vec<Event>,
    pub achievements_unlocked: Vec<AchievementId>,
    pub snapshot: StatusReport,
}

/// Outcome of charging reported away time.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct AwayReport {
    pub hours_away: f64,
    pub hours_charged: f64,
    pub paused: bool,
}

/// One simulated caregiving session: a child, a caregiver, and the book of
/// open demands between them.
#[derive(Debug, Clone)]
pub struct Session {
    pub id: Uuid,
    pub mode: Mode,
    pub personality: Personality,
    pub child: ChildState,
    pub caregiver: CaregiverState,
    pub events: EventBook,
    pub ledger: AchievementLedger,
    pub stats: CareStats,
    recent: Vec<ActionRecord>,
    kpi: i32,
    pub started_at: DateTime<Utc>,
}

impl Session {
    /// Starts a session with mode- and age-dependent defaults.
    pub fn new(mode: Mode, personality: Personality, age_months: u32, now: DateTime<Utc>) -> Self {
        let mut child = ChildState::new(age_months, now);
        let mut caregiver = CaregiverState::new();
        match mode {
            Mode::Cloud => caregiver.confidence = 60,
            Mode::Intern => {}
            Mode::HellWeek => {
                // Hell week starts mid-crisis.
                child.hunger = 20;
                child.sleep_debt = 10;
                caregiver.stress = 10;
            }
        }

        let id = Uuid::new_v4();
        info!(
            "session {} started: mode={} personality={} age={}mo",
            id,
            mode.name(),
            personality.name(),
            age_months
        );
        Self {
            id,
            mode,
            personality,
            child,
            caregiver,
            events: EventBook::new(),
            ledger: AchievementLedger::new(),
            stats: CareStats::default(),
            recent: Vec::new(),
            kpi: 100,
            started_at: now,
        }
    }

    pub fn profile(&self) -> ModeProfile {
        self.mode.profile()
    }

    pub fn kpi(&self) -> i32 {
        self.kpi
    }

    /// Validates and resolves one care action against this session.
    ///
    /// Validation failures reject before any mutation. Internal resolve
    /// faults are contained into a failed result with a fixed penalty; they
    /// never crash the session or leave attributes out of range.
    pub fn apply_action<R: Rng>(
        &mut self,
        task: TaskId,
        payload: &Value,
        now: DateTime<Utc>,
        rng: &mut R,
    ) -> Result<TaskResult, EngineError> {
        if !TaskId::available(self.child.age_months).contains(&task) {
            return Err(EngineError::UnknownTask(task));
        }
        let parsed = tasks::validate(task, payload)?;

        let resolution =
            match tasks::resolve(&parsed, &self.child, &self.caregiver, self.personality, rng) {
                Ok(resolution) => resolution,
                Err(fault) => return Ok(self.contain_fault(task, fault)),
            };

        // Apply bounded deltas, then the non-tabular effects.
        let state_changes = self.apply_deltas(&resolution.deltas);
        if resolution.temperature_shift != 0.0 {
            self.child.shift_temperature(resolution.temperature_shift);
        }
        if resolution.marks_fed {
            self.child.last_fed_at = now;
            self.stats.feeds_completed += 1;
        }
        if resolution.marks_slept {
            self.child.last_slept_at = now;
        }
        if task == TaskId::FirstWord && resolution.success {
            self.stats.first_words_recorded += 1;
        }

        if resolution.success {
            self.caregiver.successful_interventions += 1;
        } else {
            self.caregiver.failed_interventions += 1;
        }
        self.stats.record_outcome(resolution.success);

        // An action of the right kind answers the oldest matching demand,
        // whatever its outcome; the failure penalty is already in the deltas.
        let resolved = self.events.resolve_kind(task.kind(), now);
        let latency = self.note_resolution(&resolved, &resolution, now);

        self.push_record(ActionRecord {
            latency_secs: latency,
            success: resolution.success,
        });
        self.stats.observe_stress(self.caregiver.stress);
        self.kpi = compute_kpi(self.kpi, &self.recent, self.caregiver.stress);
        self.child.refresh_emotion();

        let achievements_unlocked = achievements::check(&self.stats, &mut self.ledger);

        Ok(TaskResult {
            success: resolution.success,
            message: resolution.message,
            state_changes,
            special_effects: resolution.special_effects,
            achievements_unlocked,
        })
    }

    /// Advances the simulation by the reported active hours: decay, expiry
    /// sweep (with configured penalties), then at most one trigger roll.
    pub fn tick<R: Rng>(
        &mut self,
        elapsed_hours: f64,
        now: DateTime<Utc>,
        rng: &mut R,
    ) -> TickReport {
        let profile = self.profile();
        run_decay(&mut self.child, elapsed_hours, &profile, now);

        let expired_events = self.events.sweep_expired(now);
        for event in &expired_events {
            let penalty = event_data::config(event.category).expiry_penalty;
            self.apply_deltas(penalty);
            self.stats.events_expired += 1;
        }

        let new_events: Vec<Event> = self
            .events
            .maybe_trigger(now, &profile, self.personality, rng)
            .into_iter()
            .collect();

        if self.mode == Mode::HellWeek {
            self.stats.hard_mode_days = (now - self.started_at).num_days().max(0) as u32;
        }

        self.stats.observe_stress(self.caregiver.stress);
        self.kpi = compute_kpi(self.kpi, &self.recent, self.caregiver.stress);
        self.child.refresh_emotion();
        let achievements_unlocked = achievements::check(&self.stats, &mut self.ledger);

        TickReport {
            new_events,
            expired_events,
            achievements_unlocked,
            snapshot: self.status(),
        }
    }

    /// Charges reported away time at the reduced rate (or not at all for
    /// pausing modes). Never triggers events.
    pub fn process_away_time(&mut self, away_hours: f64, _now: DateTime<Utc>) -> AwayReport {
        let profile = self.profile();
        let outcome = run_away_decay(&mut self.child, away_hours, &profile);
        AwayReport {
            hours_away: away_hours.max(0.0),
            hours_charged: outcome.hours_charged,
            paused: profile.offline_pause && away_hours > 0.0,
        }
    }

    pub fn status(&self) -> StatusReport {
        StatusReport {
            child: self.child.clone(),
            caregiver: self.caregiver.clone(),
            active_events: self.events.pending().to_vec(),
            achievements: self.ledger.unlocked().collect(),
            kpi: self.kpi,
        }
    }

    /// Applies a delta table across both states, clamped per attribute, and
    /// returns the requested changes keyed by stat name.
    fn apply_deltas(&mut self, deltas: &[(Stat, i32)]) -> BTreeMap<String, i32> {
        let mut changes = BTreeMap::new();
        for (stat, delta) in deltas {
            if !self.child.apply(*stat, *delta) {
                self.caregiver.apply(*stat, *delta);
            }
            *changes.entry(stat.key().to_string()).or_insert(0) += delta;
        }
        changes
    }

    fn push_record(&mut self, record: ActionRecord) {
        if self.recent.len() >= RECENT_ACTION_CAPACITY {
            self.recent.remove(0);
        }
        self.recent.push(record);
    }

    /// Updates resolution-driven statistics; returns the response latency
    /// for the recent-action window.
    fn note_resolution(
        &mut self,
        resolved: &Option<ResolvedEvent>,
        resolution: &tasks::Resolution,
        now: DateTime<Utc>,
    ) -> f64 {
        let Some(resolved) = resolved else {
            return 0.0;
        };
        self.stats.events_resolved += 1;
        if resolved.latency_secs <= FAST_RESPONSE_SECS {
            self.stats.fast_responses += 1;
        }
        if (0..NIGHT_PROTECTION_END_HOUR).contains(&now.hour()) {
            self.stats.nocturnal_resolutions += 1;
        }
        if resolved.event.category == EventCategory::ExplosiveDiaper
            && resolution.success
            && !resolution
                .special_effects
                .iter()
                .any(|e| e == "spray_ambush")
        {
            self.stats.perfect_explosive_cleanups += 1;
        }
        resolved.latency_secs
    }

    /// Converts an internal fault into a failed result with a fixed, small
    /// penalty. The session stays consistent and in range.
    fn contain_fault(&mut self, task: TaskId, fault: ExecutionFault) -> TaskResult {
        warn!(
            "contained execution fault in {}: {}",
            task.key(),
            fault.0
        );
        let state_changes = self.apply_deltas(&[
            (Stat::Stress, FAULT_STRESS_PENALTY),
            (Stat::PerformanceScore, FAULT_SCORE_PENALTY),
        ]);
        self.caregiver.failed_interventions += 1;
        self.stats.record_outcome(false);
        self.push_record(ActionRecord {
            latency_secs: 0.0,
            success: false,
        });
        self.stats.observe_stress(self.caregiver.stress);
        self.kpi = compute_kpi(self.kpi, &self.recent, self.caregiver.stress);

        TaskResult {
            success: false,
            message: "Something went sideways mid-care; take a breath and try again.".to_string(),
            state_changes,
            special_effects: vec!["contained_fault".to_string()],
            achievements_unlocked: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;
    use serde_json::json;

    fn daytime() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 1, 9, 0, 0).unwrap()
    }

    fn rng() -> ChaCha8Rng {
        ChaCha8Rng::seed_from_u64(42)
    }

    fn newborn_session() -> Session {
        Session::new(Mode::Intern, Personality::Angel, 1, daytime())
    }

    #[test]
    fn test_unknown_task_for_stage_rejected_without_mutation() {
        let mut session = newborn_session();
        let before = session.child.clone();
        let err = session
            .apply_action(
                TaskId::MorningDressing,
                &json!({"completion_secs": 30, "limit_secs": 60}),
                daytime(),
                &mut rng(),
            )
            .unwrap_err();
        assert_eq!(err, EngineError::UnknownTask(TaskId::MorningDressing));
        assert_eq!(session.child.wellbeing, before.wellbeing);
        assert_eq!(session.stats.actions, 0);
    }

    #[test]
    fn test_invalid_payload_rejected_without_mutation() {
        let mut session = newborn_session();
        let err = session
            .apply_action(
                TaskId::PrepareBottle,
                &json!({"water_temp": 38.0}),
                daytime(),
                &mut rng(),
            )
            .unwrap_err();
        assert!(matches!(err, EngineError::InvalidPayload(_)));
        assert_eq!(session.stats.actions, 0);
        assert_eq!(session.caregiver.failed_interventions, 0);
    }

    #[test]
    fn test_action_updates_counters_and_result_shape() {
        let mut session = newborn_session();
        session.child.hunger = 80;
        let result = session
            .apply_action(
                TaskId::PrepareBottle,
                &json!({"water_temp": 38.0, "shake_intensity": 10, "tilt_angle": 45}),
                daytime(),
                &mut rng(),
            )
            .unwrap();
        assert_eq!(session.stats.actions, 1);
        assert!(!result.state_changes.is_empty());
        assert_eq!(
            session.caregiver.successful_interventions + session.caregiver.failed_interventions,
            1
        );
        if result.success {
            assert!(session.child.hunger < 80);
            assert_eq!(session.stats.feeds_completed, 1);
            assert_eq!(session.child.last_fed_at, daytime());
        }
    }

    #[test]
    fn test_matching_action_resolves_pending_event() {
        let mut session = newborn_session();
        let mut rng = rng();
        let ev = session
            .events
            .trigger(EventCategory::FeedingCall, 5, daytime(), &mut rng);
        let later = daytime() + chrono::Duration::seconds(25);
        session
            .apply_action(
                TaskId::PrepareBottle,
                &json!({"water_temp": 38.0, "shake_intensity": 10, "tilt_angle": 45}),
                later,
                &mut rng,
            )
            .unwrap();
        assert!(session.events.get(ev.id).is_none());
        assert_eq!(session.stats.events_resolved, 1);
        assert_eq!(session.stats.fast_responses, 1);
    }

    #[test]
    fn test_wrong_kind_leaves_event_pending() {
        let mut session = newborn_session();
        let mut rng = rng();
        let ev = session
            .events
            .trigger(EventCategory::Crying, 5, daytime(), &mut rng);
        // Feed does not answer a Comfort/RockToSleep demand.
        session
            .apply_action(
                TaskId::PrepareBottle,
                &json!({"water_temp": 38.0, "shake_intensity": 10, "tilt_angle": 45}),
                daytime(),
                &mut rng,
            )
            .unwrap();
        assert!(session.events.get(ev.id).is_some());
        assert_eq!(session.stats.events_resolved, 0);
    }

    #[test]
    fn test_tick_expires_events_and_applies_penalty() {
        let mut session = newborn_session();
        let mut rng = rng();
        let ev = session
            .events
            .trigger(EventCategory::ColicAttack, 8, daytime(), &mut rng);
        let comfort_before = session.child.comfort;
        let later = daytime() + chrono::Duration::seconds(ev.expires_after_secs + 1);
        let report = session.tick(0.0, later, &mut rng);
        assert_eq!(report.expired_events.len(), 1);
        assert_eq!(session.stats.events_expired, 1);
        assert!(session.child.comfort < comfort_before);
    }

    #[test]
    fn test_tick_snapshot_reflects_decay() {
        let mut session = newborn_session();
        let report = session.tick(2.0, daytime() + chrono::Duration::hours(2), &mut rng());
        assert_eq!(report.snapshot.child.hunger, 30);
    }

    #[test]
    fn test_away_time_quarter_charged() {
        let mut session = newborn_session();
        let report = session.process_away_time(4.0, daytime());
        assert!(!report.paused);
        assert_eq!(session.child.hunger, 15);

        let mut cloud = Session::new(Mode::Cloud, Personality::Angel, 1, daytime());
        let report = cloud.process_away_time(4.0, daytime());
        assert!(report.paused);
        assert_eq!(cloud.child.hunger, 0);
    }

    #[test]
    fn test_contained_fault_penalizes_without_crash() {
        let mut session = newborn_session();
        let result = session.contain_fault(TaskId::Hug, ExecutionFault("test".into()));
        assert!(!result.success);
        assert_eq!(session.caregiver.stress, FAULT_STRESS_PENALTY);
        assert_eq!(session.caregiver.performance_score, 100 + FAULT_SCORE_PENALTY);
        assert_eq!(session.stats.failures, 1);
        assert!(result
            .special_effects
            .iter()
            .any(|e| e == "contained_fault"));
    }

    #[test]
    fn test_hell_week_day_counter() {
        let mut session = Session::new(Mode::HellWeek, Personality::Fussy, 1, daytime());
        let mut rng = rng();
        session.tick(0.0, daytime() + chrono::Duration::days(7), &mut rng);
        assert_eq!(session.stats.hard_mode_days, 7);
        assert!(session
            .ledger
            .is_unlocked(AchievementId::SurvivalWeek));
    }

    #[test]
    fn test_recent_window_is_bounded() {
        let mut session = newborn_session();
        let mut rng = rng();
        for _ in 0..(RECENT_ACTION_CAPACITY + 10) {
            session
                .apply_action(
                    TaskId::Hug,
                    &json!({"press_duration": 4.0}),
                    daytime(),
                    &mut rng,
                )
                .unwrap();
        }
        assert_eq!(session.recent.len(), RECENT_ACTION_CAPACITY);
    }

    #[test]
    fn test_kpi_stays_in_range_under_load() {
        let mut session = Session::new(Mode::HellWeek, Personality::Fussy, 1, daytime());
        let mut rng = rng();
        let mut now = daytime();
        for _ in 0..100 {
            now += chrono::Duration::minutes(30);
            session.tick(0.5, now, &mut rng);
            let _ = session.apply_action(
                TaskId::ChangeDiaper,
                &json!({"lift_speed": 6.5, "wipe_thoroughness": 2, "placement": "correct"}),
                now,
                &mut rng,
            );
            assert!((0..=100).contains(&session.kpi()), "kpi {}", session.kpi());
        }
    }
}
