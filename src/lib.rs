//! Cradle — a turn-based caregiving simulation engine.
//!
//! A caregiver manages a simulated dependent whose needs decay with elapsed
//! time and whose state is moved by discrete care tasks. The engine decides
//! whether each attempt succeeds (weighted factors folded into one Bernoulli
//! draw), how far attributes move (bounded delta tables), and when new
//! demands appear (personality- and mode-weighted, time-of-day gated).
//!
//! The crate is transport-agnostic and pull-based: no timers, no system
//! clock, no storage. Hosting layers drive a [`Nursery`] with their own
//! timestamps and random source, and render the returned snapshots however
//! they like.

pub mod achievements;
pub mod core;
pub mod decay;
pub mod events;
pub mod modes;
pub mod scoring;
pub mod simulator;
pub mod state;
pub mod tasks;

pub use crate::core::error::EngineError;
pub use crate::core::nursery::{Nursery, SessionId};
pub use crate::core::session::{AwayReport, Session, StatusReport, TickReport};
pub use crate::modes::{Mode, Personality};
pub use crate::tasks::{TaskId, TaskResult};
