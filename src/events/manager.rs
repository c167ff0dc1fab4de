//! The event book: triggering, resolution, and expiry sweeps.
//!
//! Category selection is personality-weighted (negative vs positive pool)
//! and mode-gated (frequency multiplier, night protection, nocturnal
//! specials). All randomness comes from the injected source.

use crate::core::constants::{BASE_EVENT_CHANCE_PER_TICK, MAX_ACTIVE_EVENTS};
use crate::events::data::{config, NEGATIVE_POOL, NOCTURNAL_POOL, POSITIVE_POOL};
use crate::events::types::{Event, EventCategory};
use crate::modes::{in_nocturnal_window, ModeProfile, Personality};
use crate::tasks::ActionKind;
use chrono::{DateTime, Timelike, Utc};
use log::debug;
use rand::Rng;
use serde::Serialize;
use uuid::Uuid;

/// A resolved event plus how long the demand waited for its answer.
#[derive(Debug, Clone, Serialize)]
pub struct ResolvedEvent {
    pub event: Event,
    pub latency_secs: f64,
}

/// Why a resolution attempt left the event pending.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResolveRejection {
    /// The offered action kind is not in the event's required set.
    NotApplicable,
    /// No pending event with that id.
    Unknown,
}

/// Pending demands for one session. Presence means pending; resolved and
/// expired events are removed immediately.
#[derive(Debug, Clone, Default, Serialize)]
pub struct EventBook {
    events: Vec<Event>,
}

impl EventBook {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pending(&self) -> &[Event] {
        &self.events
    }

    pub fn get(&self, id: Uuid) -> Option<&Event> {
        self.events.iter().find(|e| e.id == id)
    }

    /// Creates a pending event with a deadline drawn from the category's
    /// configured range.
    pub fn trigger<R: Rng>(
        &mut self,
        category: EventCategory,
        severity: u8,
        now: DateTime<Utc>,
        rng: &mut R,
    ) -> Event {
        let cfg = config(category);
        let (lo, hi) = cfg.duration_secs;
        let event = Event {
            id: Uuid::new_v4(),
            category,
            severity: severity.clamp(1, 10),
            created_at: now,
            expires_after_secs: rng.gen_range(lo..=hi),
            required_actions: cfg.required,
            description: cfg.description,
        };
        debug!(
            "event triggered: {} severity {} ({}s window)",
            category.key(),
            event.severity,
            event.expires_after_secs
        );
        self.events.push(event.clone());
        event
    }

    /// Rolls the per-tick trigger chance and, on a hit, picks a category
    /// from the personality-weighted pools. Night-protected modes stay
    /// silent overnight; nocturnal modes unlock their specials in the small
    /// hours.
    pub fn maybe_trigger<R: Rng>(
        &mut self,
        now: DateTime<Utc>,
        profile: &ModeProfile,
        personality: Personality,
        rng: &mut R,
    ) -> Option<Event> {
        if profile.night_protected(now) {
            return None;
        }
        if self.events.len() >= MAX_ACTIVE_EVENTS {
            return None;
        }

        let chance = (BASE_EVENT_CHANCE_PER_TICK * profile.event_frequency).clamp(0.0, 1.0);
        if !rng.gen_bool(chance) {
            return None;
        }

        let negative = rng.gen_bool(personality.negative_weight());
        let category = if negative {
            let nocturnal = profile.nocturnal_events && in_nocturnal_window(now.hour());
            if nocturnal {
                let pool: Vec<EventCategory> = NEGATIVE_POOL
                    .iter()
                    .chain(NOCTURNAL_POOL.iter())
                    .copied()
                    .collect();
                pool[rng.gen_range(0..pool.len())]
            } else {
                NEGATIVE_POOL[rng.gen_range(0..NEGATIVE_POOL.len())]
            }
        } else {
            POSITIVE_POOL[rng.gen_range(0..POSITIVE_POOL.len())]
        };

        let (lo, hi) = profile.severity_range;
        let severity = rng.gen_range(lo..=hi);
        Some(self.trigger(category, severity, now, rng))
    }

    /// Resolves an event by id if the action kind matches. A mismatch is a
    /// no-op: the event remains pending.
    pub fn resolve(
        &mut self,
        id: Uuid,
        kind: ActionKind,
        now: DateTime<Utc>,
    ) -> Result<ResolvedEvent, ResolveRejection> {
        let idx = self
            .events
            .iter()
            .position(|e| e.id == id)
            .ok_or(ResolveRejection::Unknown)?;
        if !self.events[idx].accepts(kind) {
            return Err(ResolveRejection::NotApplicable);
        }
        let event = self.events.remove(idx);
        let latency_secs = (now - event.created_at).num_seconds().max(0) as f64;
        Ok(ResolvedEvent { event, latency_secs })
    }

    /// Resolves the oldest pending event that accepts the given kind, if
    /// any. This is the path `apply_action` takes.
    pub fn resolve_kind(&mut self, kind: ActionKind, now: DateTime<Utc>) -> Option<ResolvedEvent> {
        let idx = self.events.iter().position(|e| e.accepts(kind))?;
        let event = self.events.remove(idx);
        let latency_secs = (now - event.created_at).num_seconds().max(0) as f64;
        Some(ResolvedEvent { event, latency_secs })
    }

    /// Removes and returns every overdue event. Each event expires exactly
    /// once; the caller applies the configured penalties.
    pub fn sweep_expired(&mut self, now: DateTime<Utc>) -> Vec<Event> {
        let mut expired = Vec::new();
        self.events.retain(|e| {
            if e.is_expired(now) {
                expired.push(e.clone());
                false
            } else {
                true
            }
        });
        for event in &expired {
            debug!("event expired unresolved: {}", event.category.key());
        }
        expired
    }
}
