//! Bounded state for the dependent and the caregiver.
//!
//! Plain data plus clamping — no behavior beyond attribute application.
//! Tasks, decay, and events mutate these structs exclusively through the
//! clamped `apply` methods, which is what keeps the bounds invariant airtight.

mod caregiver;
mod child;
mod stat;

pub use caregiver::CaregiverState;
pub use child::{ChildState, Emotion};
pub use stat::Stat;
