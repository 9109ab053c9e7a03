//! Commands reverting the structural effect of an executed command.
//!
//! Only edits that move or remove things other commands point at have an inverse here. Content
//! edits have no structural effect and invert to nothing.

use formula_model::{
    AddColumnsRows, AddMerge, Command, DeleteChart, DeleteFigure, HeaderSelection,
    InsertPosition, SheetCommand, TargetCommand,
};

pub fn inverse(command: &Command) -> Vec<Command> {
    match command {
        Command::AddColumnsRows(add) => {
            let first = add.first_inserted();
            let elements = (0..add.quantity)
                .filter_map(|offset| first.checked_add(offset))
                .collect();
            vec![Command::RemoveColumnsRows(HeaderSelection {
                sheet_id: add.sheet_id.clone(),
                dimension: add.dimension,
                elements,
            })]
        }
        Command::RemoveColumnsRows(remove) => contiguous_groups(&remove.elements)
            .into_iter()
            .map(|(start, quantity)| {
                let (base, position) = match start.checked_sub(1) {
                    Some(base) => (base, InsertPosition::After),
                    None => (0, InsertPosition::Before),
                };
                Command::AddColumnsRows(AddColumnsRows {
                    sheet_id: remove.sheet_id.clone(),
                    dimension: remove.dimension,
                    base,
                    quantity,
                    position,
                })
            })
            .collect(),
        Command::AddMerge(merge) => vec![Command::RemoveMerge(TargetCommand {
            sheet_id: merge.sheet_id.clone(),
            target: merge.target.clone(),
        })],
        Command::RemoveMerge(unmerge) => vec![Command::AddMerge(AddMerge {
            sheet_id: unmerge.sheet_id.clone(),
            target: unmerge.target.clone(),
            force: true,
        })],
        Command::CreateSheet(create) => vec![Command::DeleteSheet(SheetCommand {
            sheet_id: create.sheet_id.clone(),
        })],
        Command::DuplicateSheet(duplicate) => vec![Command::DeleteSheet(SheetCommand {
            sheet_id: duplicate.new_sheet_id.clone(),
        })],
        Command::CreateFigure(figure) => vec![Command::DeleteFigure(DeleteFigure {
            sheet_id: figure.sheet_id.clone(),
            figure_id: figure.figure_id.clone(),
        })],
        Command::CreateChart(chart) => vec![Command::DeleteChart(DeleteChart {
            sheet_id: chart.sheet_id.clone(),
            chart_id: chart.chart_id.clone(),
        })],
        _ => Vec::new(),
    }
}

/// Inverse of a batch: the last command is reverted first.
pub fn inverse_all(commands: &[Command]) -> Vec<Command> {
    commands.iter().rev().flat_map(inverse).collect()
}

/// `(start, len)` runs of consecutive indices, ascending.
fn contiguous_groups(elements: &[u32]) -> Vec<(u32, u32)> {
    let mut sorted = elements.to_vec();
    sorted.sort_unstable();
    sorted.dedup();

    let mut groups: Vec<(u32, u32)> = Vec::new();
    for index in sorted {
        match groups.last_mut() {
            Some((start, len)) if *start + *len == index => *len += 1,
            _ => groups.push((index, 1)),
        }
    }
    groups
}
