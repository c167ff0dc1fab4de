//! Time-boxed demand events.
//!
//! Events are raised by the per-tick trigger roll, answered by care actions
//! whose kind matches their required set, and swept to expiry — with a
//! configured penalty — when the deadline passes unanswered.

pub mod data;
mod manager;
mod types;

pub use manager::{EventBook, ResolveRejection, ResolvedEvent};
pub use types::{Event, EventCategory};
