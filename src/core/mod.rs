//! Session controller layer: constants, errors, the per-session composer,
//! and the registry that hands out session handles.

pub mod constants;
pub mod error;
pub mod nursery;
pub mod session;
