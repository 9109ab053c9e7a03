use formula_model::charts::{ChartDefinition, ChartKind, DataSet, RangeRef};
use formula_model::{
    AddColumnsRows, AddMerge, CellRef, ChartCommand, Command, CreateSheet, Dimension,
    HeaderSelection, InsertPosition, SetFormatting, UpdateCell, Zone,
};
use formula_ot::{transform, transform_all, transform_outcome, TransformOutcome};
use pretty_assertions::assert_eq;

fn cell(a1: &str) -> CellRef {
    CellRef::from_a1(a1).expect("valid A1 cell")
}

fn zone(a1: &str) -> Zone {
    Zone::from_a1(a1).expect("valid A1 range")
}

fn update_cell(sheet_id: &str, col: u32, row: u32) -> Command {
    Command::UpdateCell(UpdateCell {
        sheet_id: sheet_id.to_string(),
        col,
        row,
        content: Some("=A1*2".to_string()),
        format: None,
    })
}

fn update_cell_at(sheet_id: &str, a1: &str) -> Command {
    let c = cell(a1);
    update_cell(sheet_id, c.col, c.row)
}

fn add_columns(sheet_id: &str, base: u32, quantity: u32, position: InsertPosition) -> Command {
    Command::AddColumnsRows(AddColumnsRows {
        sheet_id: sheet_id.to_string(),
        dimension: Dimension::Col,
        base,
        quantity,
        position,
    })
}

fn remove_columns(sheet_id: &str, elements: Vec<u32>) -> Command {
    Command::RemoveColumnsRows(HeaderSelection {
        sheet_id: sheet_id.to_string(),
        dimension: Dimension::Col,
        elements,
    })
}

fn add_merge(sheet_id: &str, a1: &str) -> Command {
    Command::AddMerge(AddMerge {
        sheet_id: sheet_id.to_string(),
        target: vec![zone(a1)],
        force: false,
    })
}

#[test]
fn commands_on_other_sheets_are_unchanged() {
    let cmd = update_cell("s1", 4, 4);
    for executed in [
        remove_columns("s2", vec![0, 1, 2, 3, 4]),
        add_columns("s2", 0, 10, InsertPosition::Before),
        add_merge("s2", "A1:Z99"),
    ] {
        assert_eq!(transform_outcome(&cmd, &executed), TransformOutcome::Unchanged);
        assert_eq!(transform(&cmd, &executed), Some(cmd.clone()));
    }
}

#[test]
fn removed_columns_below_decrement_cell_column() {
    let executed = remove_columns("s1", vec![2, 3, 5]);
    assert_eq!(
        transform(&update_cell("s1", 10, 0), &executed),
        Some(update_cell("s1", 7, 0))
    );
}

#[test]
fn cell_in_removed_column_is_ignored() {
    let executed = remove_columns("s1", vec![2, 3, 5]);
    assert_eq!(
        transform_outcome(&update_cell("s1", 3, 0), &executed),
        TransformOutcome::Ignored
    );
    assert_eq!(transform(&update_cell("s1", 5, 9), &executed), None);
}

#[test]
fn insertion_before_base_shifts_cells_from_base() {
    let executed = add_columns("s1", 2, 3, InsertPosition::Before);
    assert_eq!(
        transform(&update_cell("s1", 1, 0), &executed),
        Some(update_cell("s1", 1, 0))
    );
    assert_eq!(
        transform(&update_cell("s1", 5, 0), &executed),
        Some(update_cell("s1", 8, 0))
    );
}

#[test]
fn merge_hides_covered_cells_but_not_anchor() {
    let executed = add_merge("s1", "B2:C3");
    assert_eq!(
        transform_outcome(&update_cell_at("s1", "C3"), &executed),
        TransformOutcome::Ignored
    );
    assert_eq!(
        transform_outcome(&update_cell_at("s1", "B2"), &executed),
        TransformOutcome::Unchanged
    );
    assert_eq!(
        transform_outcome(&update_cell_at("s1", "D2"), &executed),
        TransformOutcome::Unchanged
    );
}

#[test]
fn formatting_targets_follow_inserted_columns() {
    let cmd = Command::SetFormatting(SetFormatting {
        sheet_id: "s1".to_string(),
        target: vec![zone("A1:C3"), zone("E5")],
        format: "0.00%".to_string(),
    });
    let executed = add_columns("s1", 1, 2, InsertPosition::After);
    let Some(Command::SetFormatting(moved)) = transform(&cmd, &executed) else {
        panic!("formatting should survive an insertion");
    };
    assert_eq!(moved.target, vec![zone("A1:E3"), zone("G5")]);
}

#[test]
fn transform_all_folds_in_commit_order() {
    let pending = vec![
        update_cell("s1", 1, 0),
        update_cell("s1", 4, 0),
        update_cell("s2", 4, 0),
    ];
    let executed = vec![
        add_columns("s1", 2, 3, InsertPosition::Before),
        remove_columns("s1", vec![7]),
    ];

    let all_at_once = transform_all(&pending, &executed);
    let one_by_one = transform_all(&transform_all(&pending, &executed[..1]), &executed[1..]);
    assert_eq!(all_at_once, one_by_one);
    // col 4 moved to 7 by the insertion, then removed.
    assert_eq!(
        all_at_once,
        vec![update_cell("s1", 1, 0), update_cell("s2", 4, 0)]
    );
}

fn chart_plotting_other_sheet() -> Command {
    let mut line = ChartDefinition::new(ChartKind::Line);
    line.data_sets.push(DataSet {
        data_range: RangeRef::on_sheet("s2", zone("C2:C9")),
        label_cell: Some(RangeRef::on_sheet("s2", zone("C1"))),
    });
    let mut combo = ChartDefinition::new(ChartKind::Combo);
    combo.data_sets.push(DataSet {
        data_range: RangeRef::local(zone("C1:C5")),
        label_cell: None,
    });
    combo.sub_charts.push(line);
    Command::UpdateChart(ChartCommand {
        sheet_id: "s1".to_string(),
        figure_id: "f1".to_string(),
        chart_id: "c1".to_string(),
        definition: combo,
    })
}

#[test]
fn chart_follows_column_removal_on_the_sheet_it_plots() {
    let chart = chart_plotting_other_sheet();
    let remove = Command::RemoveColumnsRows(HeaderSelection {
        sheet_id: "s2".to_string(),
        dimension: Dimension::Col,
        elements: vec![1],
    });

    let Some(Command::UpdateChart(moved)) = transform(&chart, &remove) else {
        panic!("chart update should survive a column removal");
    };
    let ranges: Vec<String> = moved
        .definition
        .ranges()
        .iter()
        .map(|r| format!("{}!{}", r.resolved_sheet("s1"), r.zone))
        .collect();
    assert_eq!(ranges, vec!["s1!C1:C5", "s2!B2:B9", "s2!B1"]);
}

#[test]
fn concurrent_sheets_with_the_same_name_are_renamed() {
    let create = |sheet_id: &str, name: &str| {
        Command::CreateSheet(CreateSheet {
            sheet_id: sheet_id.to_string(),
            name: name.to_string(),
            position: 1,
        })
    };
    let pending = create("mine", "Sheet2");

    assert_eq!(
        transform_outcome(&pending, &create("theirs", "sheet2")),
        TransformOutcome::Transformed(Command::CreateSheet(CreateSheet {
            sheet_id: "mine".to_string(),
            name: "Sheet3".to_string(),
            position: 2,
        }))
    );
    assert_eq!(
        transform_outcome(&pending, &create("theirs", "Budget")),
        TransformOutcome::Unchanged
    );
}
