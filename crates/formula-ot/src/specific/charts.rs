//! Chart definitions store their ranges outside of the command capabilities, so structural
//! edits are applied to them here.

use formula_model::charts::{ChartDefinition, RangeRef};
use formula_model::{ChartCommand, Command};

use crate::grid::GridEdit;
use crate::TransformOutcome;

fn rebuild(cmd: &Command, f: impl FnOnce(&ChartCommand) -> ChartDefinition) -> TransformOutcome {
    let rebuilt = match cmd {
        Command::CreateChart(chart) => Command::CreateChart(ChartCommand {
            definition: f(chart),
            ..chart.clone()
        }),
        Command::UpdateChart(chart) => Command::UpdateChart(ChartCommand {
            definition: f(chart),
            ..chart.clone()
        }),
        _ => cmd.clone(),
    };
    TransformOutcome::Transformed(rebuilt)
}

/// Ranges on the edited sheet follow inserted/removed rows and columns.
pub(super) fn chart_vs_grid_edit(cmd: &Command, executed: &Command) -> TransformOutcome {
    let Some((edited_sheet, edit)) = GridEdit::from_command(executed) else {
        return TransformOutcome::Transformed(cmd.clone());
    };
    rebuild(cmd, |chart| {
        chart.definition.map_ranges(&mut |range: &RangeRef| {
            if range.resolved_sheet(&chart.sheet_id) != edited_sheet {
                return Some(range.clone());
            }
            let zone = edit.adjust_zone(range.zone)?;
            Some(RangeRef {
                sheet_id: range.sheet_id.clone(),
                zone,
            })
        })
    })
}

/// Ranges pointing into a deleted sheet are removed from the definition.
pub(super) fn chart_vs_delete_sheet(cmd: &Command, executed: &Command) -> TransformOutcome {
    let Command::DeleteSheet(deleted) = executed else {
        return TransformOutcome::Transformed(cmd.clone());
    };
    rebuild(cmd, |chart| {
        chart.definition.map_ranges(&mut |range: &RangeRef| {
            (range.resolved_sheet(&chart.sheet_id) != deleted.sheet_id).then(|| range.clone())
        })
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use formula_model::charts::{ChartKind, DataSet};
    use formula_model::{Dimension, HeaderSelection, SheetCommand, Zone};
    use pretty_assertions::assert_eq;

    fn zone(a1: &str) -> Zone {
        Zone::from_a1(a1).unwrap()
    }

    fn chart(definition: ChartDefinition) -> Command {
        Command::UpdateChart(ChartCommand {
            sheet_id: "s1".to_string(),
            figure_id: "f1".to_string(),
            chart_id: "c1".to_string(),
            definition,
        })
    }

    fn definition_of(outcome: TransformOutcome) -> ChartDefinition {
        match outcome {
            TransformOutcome::Transformed(Command::UpdateChart(chart)) => chart.definition,
            other => panic!("expected a chart update, got {other:?}"),
        }
    }

    fn bar_chart() -> ChartDefinition {
        let mut def = ChartDefinition::new(ChartKind::Bar);
        def.data_sets = vec![
            DataSet {
                data_range: RangeRef::local(zone("B2:B9")),
                label_cell: Some(RangeRef::local(zone("B1"))),
            },
            DataSet {
                data_range: RangeRef::on_sheet("s2", zone("C2:C9")),
                label_cell: None,
            },
        ];
        def.labels_range = Some(RangeRef::local(zone("A2:A9")));
        def
    }

    #[test]
    fn removed_rows_shrink_local_ranges_only() {
        let remove_rows = Command::RemoveColumnsRows(HeaderSelection {
            sheet_id: "s1".to_string(),
            dimension: Dimension::Row,
            elements: vec![0, 4],
        });
        let def = definition_of(chart_vs_grid_edit(&chart(bar_chart()), &remove_rows));

        assert_eq!(def.data_sets[0].data_range.zone, zone("B1:B7"));
        assert_eq!(def.data_sets[0].label_cell, None);
        assert_eq!(def.data_sets[1].data_range.zone, zone("C2:C9"));
        assert_eq!(def.labels_range.map(|r| r.zone), Some(zone("A1:A7")));
    }

    #[test]
    fn removed_columns_drop_data_sets() {
        let remove_cols = Command::RemoveColumnsRows(HeaderSelection {
            sheet_id: "s2".to_string(),
            dimension: Dimension::Col,
            elements: vec![2],
        });
        let def = definition_of(chart_vs_grid_edit(&chart(bar_chart()), &remove_cols));
        assert_eq!(def.data_sets.len(), 1);
        assert_eq!(def.data_sets[0].data_range.sheet_id, None);
    }

    #[test]
    fn deleted_sheet_ranges_are_removed() {
        let delete = Command::DeleteSheet(SheetCommand {
            sheet_id: "s2".to_string(),
        });
        let def = definition_of(chart_vs_delete_sheet(&chart(bar_chart()), &delete));
        assert_eq!(def.data_sets.len(), 1);
        assert!(def.labels_range.is_some());
    }
}
