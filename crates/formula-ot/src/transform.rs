use formula_model::Command;
use log::trace;

use crate::{generic, specific, TransformOutcome};

/// Transform `to_transform` so that it applies after `executed`.
///
/// The generic pipeline runs first; a specific rule registered for the kind pair then refines
/// its result. A command that comes out identical to the input is reported as
/// [`TransformOutcome::Unchanged`].
pub fn transform_outcome(to_transform: &Command, executed: &Command) -> TransformOutcome {
    let cmd = match generic::transform(to_transform, executed) {
        TransformOutcome::Transformed(cmd) => cmd,
        outcome => return outcome,
    };

    let outcome = match specific::lookup(to_transform.kind(), executed.kind()) {
        Some(rule) => rule(&cmd, executed),
        None => TransformOutcome::Transformed(cmd),
    };

    match outcome {
        TransformOutcome::Transformed(cmd) if cmd == *to_transform => TransformOutcome::Unchanged,
        TransformOutcome::Ignored => {
            trace!("{} ignored after {}", to_transform.kind(), executed.kind());
            TransformOutcome::Ignored
        }
        outcome => outcome,
    }
}

/// Transform `to_transform` against `executed`. `None` means the command must be dropped.
pub fn transform(to_transform: &Command, executed: &Command) -> Option<Command> {
    transform_outcome(to_transform, executed).resolve(to_transform)
}

/// Rebase pending commands onto commands executed before them, in commit order.
///
/// After each executed command every surviving pending command is transformed against it;
/// dropped commands do not reach later executed commands.
pub fn transform_all(pending: &[Command], executed: &[Command]) -> Vec<Command> {
    let mut rebased = pending.to_vec();
    for executed in executed {
        rebased = rebased
            .iter()
            .filter_map(|cmd| transform(cmd, executed))
            .collect();
    }
    rebased
}

#[cfg(test)]
mod tests {
    use super::*;
    use formula_model::{CellCommand, Dimension, HeaderSelection};
    use pretty_assertions::assert_eq;

    fn clear_cell(col: u32) -> Command {
        Command::ClearCell(CellCommand {
            sheet_id: "s1".to_string(),
            col,
            row: 0,
        })
    }

    fn remove_col(col: u32) -> Command {
        Command::RemoveColumnsRows(HeaderSelection {
            sheet_id: "s1".to_string(),
            dimension: Dimension::Col,
            elements: vec![col],
        })
    }

    #[test]
    fn untouched_commands_are_reported_unchanged() {
        assert_eq!(
            transform_outcome(&clear_cell(1), &remove_col(4)),
            TransformOutcome::Unchanged
        );
        assert_eq!(
            transform_outcome(&clear_cell(5), &remove_col(4)),
            TransformOutcome::Transformed(clear_cell(4))
        );
    }

    #[test]
    fn transform_all_drops_ignored_commands() {
        let pending = vec![clear_cell(1), clear_cell(2), clear_cell(3)];
        let rebased = transform_all(&pending, &[remove_col(2), remove_col(0)]);
        assert_eq!(rebased, vec![clear_cell(0), clear_cell(1)]);
    }
}
