//! Rules for commands executed against freshly merged (or unmerged) zones.

use formula_model::{CellRef, Command, Zone};

use crate::TransformOutcome;

/// Zones merged or unmerged by `executed`.
pub(crate) fn merge_zones(executed: &Command) -> Option<&[Zone]> {
    match executed {
        Command::AddMerge(merge) => Some(&merge.target),
        Command::RemoveMerge(unmerge) => Some(&unmerge.target),
        _ => None,
    }
}

/// A cell covered by a merge but not its anchor (top-left) no longer holds its own content.
pub(crate) fn is_hidden_by_merge(cell: CellRef, merges: &[Zone]) -> bool {
    merges
        .iter()
        .any(|zone| zone.contains(cell) && zone.top_left() != cell)
}

pub(crate) fn transform_position(cell: CellRef, merges: &[Zone]) -> TransformOutcome {
    if is_hidden_by_merge(cell, merges) {
        TransformOutcome::Ignored
    } else {
        TransformOutcome::Unchanged
    }
}

/// Pending merge zones that do not overlap any executed merge.
pub(crate) fn transform_merge_target(target: &[Zone], merges: &[Zone]) -> Option<Vec<Zone>> {
    let surviving: Vec<Zone> = target
        .iter()
        .copied()
        .filter(|zone| !merges.iter().any(|merged| merged.overlaps(zone)))
        .collect();
    (!surviving.is_empty()).then_some(surviving)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn zone(a1: &str) -> Zone {
        Zone::from_a1(a1).unwrap()
    }

    fn cell(a1: &str) -> CellRef {
        CellRef::from_a1(a1).unwrap()
    }

    #[test]
    fn anchor_survives_and_covered_cells_are_ignored() {
        let merges = [zone("B2:C3")];
        assert_eq!(transform_position(cell("B2"), &merges), TransformOutcome::Unchanged);
        assert_eq!(transform_position(cell("C3"), &merges), TransformOutcome::Ignored);
        assert_eq!(transform_position(cell("D4"), &merges), TransformOutcome::Unchanged);
    }

    #[test]
    fn overlapping_pending_merges_are_dropped() {
        let merges = [zone("B2:C3")];
        assert_eq!(
            transform_merge_target(&[zone("C3:D4"), zone("F1:G2")], &merges),
            Some(vec![zone("F1:G2")])
        );
        assert_eq!(transform_merge_target(&[zone("A1:B2")], &merges), None);
    }
}
