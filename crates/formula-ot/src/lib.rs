//! Operational transformation of spreadsheet commands.
//!
//! When a command authored against an older document state has to be applied after commands
//! that landed first, it is rewritten with [`transform`] (or, for a batch, [`transform_all`]).
//! Rewriting is pure: commands are never mutated, and a command that no longer makes sense is
//! dropped rather than reported as an error.
//!
//! [`inverse`] provides the commands reverting the structural effect of an edit, which is what
//! undo needs to rebase later edits as if the undone one never happened.

pub mod coverage;
mod error;
mod generic;
pub mod grid;
mod inverse;
mod merge;
mod outcome;
mod specific;
mod transform;

pub use coverage::{rule_for, TransformRule};
pub use error::TransformError;
pub use inverse::{inverse, inverse_all};
pub use outcome::TransformOutcome;
pub use transform::{transform, transform_all, transform_outcome};
