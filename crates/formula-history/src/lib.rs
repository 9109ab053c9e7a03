//! Branching undo/redo history.
//!
//! Steps are stored in a tree of [`Layer`]s kept in a [`Layers`] arena. Exactly one path from
//! the root layer to a tip is the active timeline; undo and redo graft new branches onto it and
//! leave the superseded ones in place. Step payloads are rebased through the [`Rebase`] trait;
//! `Vec<formula_model::Command>` implements it with `formula-ot`.

mod dispatcher;
mod error;
mod history;
mod instruction;
mod layer;
mod rebase;
mod step;

pub use dispatcher::Dispatcher;
pub use error::HistoryError;
pub use history::History;
pub use instruction::{Execution, Instruction, RevertedExecution};
pub use layer::{Cursor, Layer, LayerId, Layers};
pub use rebase::Rebase;
pub use step::{Step, StepId};
