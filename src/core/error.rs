use crate::tasks::TaskId;
use thiserror::Error;
use uuid::Uuid;

/// Errors surfaced across the engine's public call surface.
///
/// Validation errors are rejected before any state mutation; a session that
/// returns an error is guaranteed untouched by that call.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    /// A required payload field is missing or outside its declared domain.
    #[error("invalid payload: {0}")]
    InvalidPayload(String),

    /// The task is not registered for the session's current age stage.
    #[error("task {0:?} is not available at the current age stage")]
    UnknownTask(TaskId),

    /// The referenced event does not exist in this session.
    #[error("unknown event {0}")]
    UnknownEvent(Uuid),

    /// The referenced session does not exist in this registry.
    #[error("unknown session {0}")]
    UnknownSession(Uuid),
}

/// Internal fault raised if a resolve computation goes bad.
///
/// Never escapes the session boundary: the controller converts it into a
/// failed `TaskResult` with a fixed penalty.
#[derive(Debug, Clone)]
pub(crate) struct ExecutionFault(pub String);
