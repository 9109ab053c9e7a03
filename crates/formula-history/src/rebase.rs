use formula_model::Command;
use formula_ot::{inverse_all, transform_all};

/// Rewriting of a step payload when an earlier step is undone or redone.
pub trait Rebase {
    /// The payload as if `undone` had never been applied.
    #[must_use]
    fn without(&self, undone: &Self) -> Self;

    /// The payload as if `redone` had been applied right before it.
    #[must_use]
    fn with(&self, redone: &Self) -> Self;
}

/// A step holds the commands of one revision.
impl Rebase for Vec<Command> {
    fn without(&self, undone: &Self) -> Self {
        transform_all(self, &inverse_all(undone))
    }

    fn with(&self, redone: &Self) -> Self {
        transform_all(self, redone)
    }
}
