use formula_model::{
    next_sheet_name_candidate, sheet_name_eq_case_insensitive, Command, CreateSheet,
};
use log::trace;

use crate::TransformOutcome;

/// Moves and duplications touching a deleted sheet on either end are dropped.
pub(super) fn cross_sheet_vs_delete_sheet(cmd: &Command, executed: &Command) -> TransformOutcome {
    let Command::DeleteSheet(deleted) = executed else {
        return TransformOutcome::Transformed(cmd.clone());
    };
    let deleted = deleted.sheet_id.as_str();
    if cmd.sheet_id() == Some(deleted) || cmd.secondary_sheet_id() == Some(deleted) {
        trace!("{} dropped: sheet {deleted} deleted", cmd.kind());
        return TransformOutcome::Ignored;
    }
    TransformOutcome::Transformed(cmd.clone())
}

/// Two sheets created concurrently under the same name: the pending one is renamed and placed
/// after the executed one.
pub(super) fn create_sheet_vs_create_sheet(cmd: &Command, executed: &Command) -> TransformOutcome {
    let (Command::CreateSheet(pending), Command::CreateSheet(created)) = (cmd, executed) else {
        return TransformOutcome::Transformed(cmd.clone());
    };
    if !sheet_name_eq_case_insensitive(&pending.name, &created.name) {
        return TransformOutcome::Transformed(cmd.clone());
    }

    let name = next_sheet_name_candidate(&pending.name);
    trace!("CREATE_SHEET {:?} renamed to {name:?}", pending.name);
    TransformOutcome::Transformed(Command::CreateSheet(CreateSheet {
        sheet_id: pending.sheet_id.clone(),
        name,
        position: pending.position.saturating_add(1),
    }))
}
