use thiserror::Error;

/// Conditions reported by queue, reserve, history and configuration.
///
/// None of these are fatal: the session stays usable and the caller simply
/// re-prompts.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionError {
    #[error("the next queue is full")]
    QueueFull,
    #[error("the next queue is empty")]
    QueueEmpty,
    #[error("the reserve is full")]
    StackFull,
    #[error("the reserve is empty")]
    StackEmpty,
    #[error("cannot swap: the queue or the reserve is empty")]
    EmptyStructure,
    #[error("nothing to undo")]
    NothingToUndo,
    #[error("invalid {what} capacity: {value} (must be at least 1)")]
    InvalidCapacity { what: &'static str, value: usize },
}
