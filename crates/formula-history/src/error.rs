use thiserror::Error;

use crate::StepId;

/// Invariant violations reported by history lookups.
///
/// Every operation resolves its step before touching the layer tree, so an error leaves the
/// history as it was.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HistoryError {
    #[error("step {0} is not part of the history")]
    UnknownStep(StepId),
    #[error("step {0} was never undone")]
    NotUndone(StepId),
    #[error("step {0} is already undone")]
    AlreadyUndone(StepId),
    #[error("step {0} was already added")]
    DuplicateStep(StepId),
}
