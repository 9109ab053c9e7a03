use formula_model::{AddColumnsRows, CellRef, Command, InsertPosition, MoveRanges};
use log::trace;

use crate::grid::GridEdit;
use crate::TransformOutcome;

/// Pending header insertion against an executed insertion or removal on the same axis.
///
/// An insertion anchored on a removed header is re-anchored onto the surviving neighbour on the
/// same side instead of being dropped.
pub(super) fn insertion_vs_grid_edit(cmd: &Command, executed: &Command) -> TransformOutcome {
    let Command::AddColumnsRows(add) = cmd else {
        return TransformOutcome::Transformed(cmd.clone());
    };
    let Some((sheet_id, edit)) = GridEdit::from_command(executed) else {
        return TransformOutcome::Transformed(cmd.clone());
    };
    if sheet_id != add.sheet_id || edit.dimension() != add.dimension {
        return TransformOutcome::Transformed(cmd.clone());
    }

    let (base, position) = match &edit {
        GridEdit::Insert { .. } => match edit.adjust_index(add.base) {
            Some(base) => (base, add.position),
            None => return TransformOutcome::Ignored,
        },
        GridEdit::Remove { elements, .. } => {
            if elements.binary_search(&add.base).is_err() {
                (edit.adjust_index_clamped(add.base), add.position)
            } else {
                reanchor(add, elements)
            }
        }
    };
    trace!("ADD_COLUMNS_ROWS re-based from {} to {base}", add.base);
    TransformOutcome::Transformed(Command::AddColumnsRows(AddColumnsRows {
        base,
        position,
        ..add.clone()
    }))
}

fn reanchor(add: &AddColumnsRows, removed: &[u32]) -> (u32, InsertPosition) {
    match add.position {
        // The first surviving header on the right takes the removed header's index.
        InsertPosition::Before => {
            let below = removed.partition_point(|&e| e < add.base) as u32;
            (add.base - below, InsertPosition::Before)
        }
        InsertPosition::After => {
            let through = removed.partition_point(|&e| e <= add.base) as u32;
            match add.base.checked_sub(through) {
                Some(base) => (base, InsertPosition::After),
                // Nothing survives on the left.
                None => (0, InsertPosition::Before),
            }
        }
    }
}

/// The paste destination of a move follows grid edits on the destination sheet.
pub(super) fn move_destination_vs_grid_edit(cmd: &Command, executed: &Command) -> TransformOutcome {
    let Command::MoveRanges(mv) = cmd else {
        return TransformOutcome::Transformed(cmd.clone());
    };
    let Some((sheet_id, edit)) = GridEdit::from_command(executed) else {
        return TransformOutcome::Transformed(cmd.clone());
    };
    if sheet_id != mv.target_sheet_id {
        return TransformOutcome::Transformed(cmd.clone());
    }

    let anchor = CellRef::new(mv.row, mv.col);
    let dimension = edit.dimension();
    let index = edit.adjust_index_clamped(anchor.index(dimension));
    let anchor = anchor.with_index(dimension, index);
    TransformOutcome::Transformed(Command::MoveRanges(MoveRanges {
        col: anchor.col,
        row: anchor.row,
        ..mv.clone()
    }))
}
