//! Session registry: explicit handles, no process-wide singletons.
//!
//! Each session is an independently-owned unit; the registry only routes
//! calls by id. Serializing concurrent writers per session is the hosting
//! layer's contract.

use crate::core::error::EngineError;
use crate::core::session::{AwayReport, Session, StatusReport, TickReport};
use crate::modes::{Mode, Personality};
use crate::tasks::{TaskId, TaskResult};
use chrono::{DateTime, Utc};
use log::info;
use rand::Rng;
use serde_json::Value;
use std::collections::HashMap;
use uuid::Uuid;

pub type SessionId = Uuid;

/// Owns every live session and routes calls by handle.
#[derive(Debug, Default)]
pub struct Nursery {
    sessions: HashMap<SessionId, Session>,
}

impl Nursery {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a session and returns its handle with the initial snapshot.
    pub fn start_session(
        &mut self,
        mode: Mode,
        personality: Personality,
        age_months: u32,
        now: DateTime<Utc>,
    ) -> (SessionId, StatusReport) {
        let session = Session::new(mode, personality, age_months, now);
        let id = session.id;
        let snapshot = session.status();
        self.sessions.insert(id, session);
        (id, snapshot)
    }

    pub fn session(&self, id: SessionId) -> Result<&Session, EngineError> {
        self.sessions.get(&id).ok_or(EngineError::UnknownSession(id))
    }

    fn session_mut(&mut self, id: SessionId) -> Result<&mut Session, EngineError> {
        self.sessions
            .get_mut(&id)
            .ok_or(EngineError::UnknownSession(id))
    }

    pub fn apply_action<R: Rng>(
        &mut self,
        id: SessionId,
        task: TaskId,
        payload: &Value,
        now: DateTime<Utc>,
        rng: &mut R,
    ) -> Result<TaskResult, EngineError> {
        self.session_mut(id)?.apply_action(task, payload, now, rng)
    }

    pub fn tick<R: Rng>(
        &mut self,
        id: SessionId,
        elapsed_hours: f64,
        now: DateTime<Utc>,
        rng: &mut R,
    ) -> Result<TickReport, EngineError> {
        Ok(self.session_mut(id)?.tick(elapsed_hours, now, rng))
    }

    pub fn process_away_time(
        &mut self,
        id: SessionId,
        away_hours: f64,
        now: DateTime<Utc>,
    ) -> Result<AwayReport, EngineError> {
        Ok(self.session_mut(id)?.process_away_time(away_hours, now))
    }

    pub fn status(&self, id: SessionId) -> Result<StatusReport, EngineError> {
        Ok(self.session(id)?.status())
    }

    /// Drops a session; its state is discarded, not persisted.
    pub fn end_session(&mut self, id: SessionId) -> Result<(), EngineError> {
        self.sessions
            .remove(&id)
            .map(|_| info!("session {} ended", id))
            .ok_or(EngineError::UnknownSession(id))
    }

    pub fn session_count(&self) -> usize {
        self.sessions.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;
    use serde_json::json;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 1, 9, 0, 0).unwrap()
    }

    #[test]
    fn test_start_and_status() {
        let mut nursery = Nursery::new();
        let (id, snapshot) = nursery.start_session(Mode::Intern, Personality::Angel, 1, now());
        assert_eq!(snapshot.kpi, 100);
        assert_eq!(nursery.session_count(), 1);
        assert!(nursery.status(id).is_ok());
    }

    #[test]
    fn test_unknown_session() {
        let mut nursery = Nursery::new();
        let bogus = Uuid::new_v4();
        assert!(matches!(
            nursery.status(bogus),
            Err(EngineError::UnknownSession(_))
        ));
        assert!(matches!(
            nursery.tick(bogus, 1.0, now(), &mut ChaCha8Rng::seed_from_u64(1)),
            Err(EngineError::UnknownSession(_))
        ));
    }

    #[test]
    fn test_sessions_are_isolated() {
        let mut nursery = Nursery::new();
        let mut rng = ChaCha8Rng::seed_from_u64(9);
        let (a, _) = nursery.start_session(Mode::Intern, Personality::Angel, 1, now());
        let (b, _) = nursery.start_session(Mode::Intern, Personality::Angel, 1, now());

        nursery.tick(a, 3.0, now() + chrono::Duration::hours(3), &mut rng).unwrap();
        let status_a = nursery.status(a).unwrap();
        let status_b = nursery.status(b).unwrap();
        assert!(status_a.child.hunger > status_b.child.hunger);
    }

    #[test]
    fn test_end_session_discards_state() {
        let mut nursery = Nursery::new();
        let (id, _) = nursery.start_session(Mode::Cloud, Personality::Fussy, 1, now());
        nursery.end_session(id).unwrap();
        assert!(nursery.end_session(id).is_err());
        assert_eq!(nursery.session_count(), 0);
    }

    #[test]
    fn test_routing_applies_to_the_right_session() {
        let mut nursery = Nursery::new();
        let mut rng = ChaCha8Rng::seed_from_u64(4);
        let (a, _) = nursery.start_session(Mode::Intern, Personality::Angel, 1, now());
        let (b, _) = nursery.start_session(Mode::Intern, Personality::Angel, 1, now());

        nursery
            .apply_action(
                a,
                TaskId::Hug,
                &json!({"press_duration": 4.0}),
                now(),
                &mut rng,
            )
            .unwrap();
        assert_eq!(nursery.session(a).unwrap().stats.actions, 1);
        assert_eq!(nursery.session(b).unwrap().stats.actions, 0);
    }
}
