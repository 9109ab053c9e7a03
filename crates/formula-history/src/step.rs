use core::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Identifier of a history step. Unique for the lifetime of a session.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StepId(Uuid);

impl StepId {
    /// A fresh random id.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for StepId {
    fn default() -> Self {
        Self::new()
    }
}

impl From<Uuid> for StepId {
    fn from(uuid: Uuid) -> Self {
        Self(uuid)
    }
}

impl fmt::Display for StepId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

/// One committed revision. The same id appears in every layer that carries a rebased copy.
#[derive(Debug, Clone, PartialEq)]
pub struct Step<T> {
    pub id: StepId,
    pub data: T,
}

impl<T> Step<T> {
    pub fn new(id: StepId, data: T) -> Self {
        Self { id, data }
    }
}
