//! Capability-driven transformation shared by every command kind.
//!
//! Stages run in a fixed order (sheet, target, zone, position, grid). Each one either
//! short-circuits with [`TransformOutcome::Ignored`]/[`TransformOutcome::Unchanged`] or narrows
//! the command and hands it on. A command that survives every stage is returned as
//! [`TransformOutcome::Transformed`] even when nothing changed, so that specific rules can
//! still look at it.

use formula_model::{Command, Zone};
use log::trace;

use crate::grid::GridEdit;
use crate::merge;
use crate::TransformOutcome;

pub(crate) fn transform(to_transform: &Command, executed: &Command) -> TransformOutcome {
    if let Command::DeleteSheet(deleted) = executed {
        if to_transform.sheet_id() == Some(deleted.sheet_id.as_str()) {
            trace!("{} dropped: sheet {} deleted", to_transform.kind(), deleted.sheet_id);
            return TransformOutcome::Ignored;
        }
    }

    let same_sheet = match (to_transform.sheet_id(), executed.sheet_id()) {
        (Some(a), Some(b)) if a != b => {
            if !to_transform.spans_sheets() {
                return TransformOutcome::Unchanged;
            }
            false
        }
        (Some(_), Some(_)) => true,
        _ => false,
    };
    if !same_sheet {
        return TransformOutcome::Transformed(to_transform.clone());
    }

    if let Some((_, edit)) = GridEdit::from_command(executed) {
        return transform_grid(to_transform, &edit);
    }
    if let Some(merges) = merge::merge_zones(executed) {
        return transform_merge(to_transform, executed, merges);
    }
    TransformOutcome::Transformed(to_transform.clone())
}

fn transform_grid(to_transform: &Command, edit: &GridEdit) -> TransformOutcome {
    let mut cmd = to_transform.clone();

    if let Some(target) = cmd.target() {
        let zones: Vec<_> = target.iter().filter_map(|z| edit.adjust_zone(*z)).collect();
        if zones.is_empty() {
            trace!("{} dropped: every target zone removed", cmd.kind());
            return TransformOutcome::Ignored;
        }
        cmd = cmd.with_target(zones);
    }

    if let Some(zone) = cmd.zone() {
        let Some(zone) = edit.adjust_zone(zone) else {
            trace!("{} dropped: zone {zone} removed", cmd.kind());
            return TransformOutcome::Ignored;
        };
        cmd = cmd.with_zone(zone);
    }

    if let Some(cell) = cmd.position() {
        let Some(cell) = edit.adjust_cell(cell) else {
            trace!("{} dropped: cell {cell} removed", cmd.kind());
            return TransformOutcome::Ignored;
        };
        cmd = cmd.with_position(cell);
    }

    if let Some((dimension, elements)) = cmd.grid() {
        if dimension == edit.dimension() {
            let elements = edit.adjust_elements(elements);
            if elements.is_empty() {
                trace!("{} dropped: every header removed", cmd.kind());
                return TransformOutcome::Ignored;
            }
            cmd = cmd.with_grid_elements(elements);
        }
    }

    TransformOutcome::Transformed(cmd)
}

fn transform_merge(
    to_transform: &Command,
    executed: &Command,
    merges: &[Zone],
) -> TransformOutcome {
    if let Some(cell) = to_transform.position() {
        return merge::transform_position(cell, merges);
    }
    if let (Command::AddMerge(pending), Command::AddMerge(_)) = (to_transform, executed) {
        return match merge::transform_merge_target(&pending.target, merges) {
            Some(target) => TransformOutcome::Transformed(to_transform.with_target(target)),
            None => {
                trace!("ADD_MERGE dropped: overlaps an executed merge");
                TransformOutcome::Ignored
            }
        };
    }
    TransformOutcome::Transformed(to_transform.clone())
}
