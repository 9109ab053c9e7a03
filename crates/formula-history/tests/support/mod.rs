#![allow(dead_code)]

use std::collections::BTreeMap;

use formula_history::Dispatcher;
use formula_model::{
    AddColumnsRows, CellRef, Command, Dimension, HeaderSelection, InsertPosition, UpdateCell,
};

pub const SHEET: &str = "sheet1";

/// Cell contents keyed by `(sheet, row, col)`.
type Cells = BTreeMap<(String, u32, u32), String>;

/// Minimal grid document: cell contents plus column/row insertion and removal.
///
/// Reverting restores the snapshot taken before the matching apply, so it only supports the
/// last-applied-first-reverted order a history uses.
#[derive(Debug, Default)]
pub struct GridDocument {
    cells: Cells,
    snapshots: Vec<Cells>,
    pub applied: usize,
    pub reverted: usize,
}

impl GridDocument {
    pub fn replay(commands: &[Command]) -> Self {
        let mut doc = Self::default();
        for cmd in commands {
            doc.execute(cmd);
        }
        doc
    }

    pub fn cell(&self, a1: &str) -> Option<&str> {
        let cell = CellRef::from_a1(a1).expect("valid A1 cell");
        self.cells
            .get(&(SHEET.to_string(), cell.row, cell.col))
            .map(String::as_str)
    }

    /// `A1 = value` listing of the sheet, in row-major order.
    pub fn contents(&self) -> Vec<String> {
        self.cells
            .iter()
            .map(|((_, row, col), value)| format!("{}={value}", CellRef::new(*row, *col)))
            .collect()
    }

    fn execute(&mut self, cmd: &Command) {
        match cmd {
            Command::UpdateCell(update) => {
                let key = (update.sheet_id.clone(), update.row, update.col);
                match &update.content {
                    Some(content) => {
                        self.cells.insert(key, content.clone());
                    }
                    None => {
                        self.cells.remove(&key);
                    }
                }
            }
            Command::ClearCell(clear) => {
                self.cells
                    .remove(&(clear.sheet_id.clone(), clear.row, clear.col));
            }
            Command::AddColumnsRows(add) => {
                let first = add.first_inserted();
                self.remap(&add.sheet_id, add.dimension, |index| {
                    Some(if index >= first {
                        index + add.quantity
                    } else {
                        index
                    })
                });
            }
            Command::RemoveColumnsRows(remove) => {
                self.remap(&remove.sheet_id, remove.dimension, |index| {
                    if remove.elements.contains(&index) {
                        return None;
                    }
                    let below = remove.elements.iter().filter(|&&e| e < index).count() as u32;
                    Some(index - below)
                });
            }
            _ => {}
        }
    }

    fn remap(&mut self, sheet_id: &str, dimension: Dimension, f: impl Fn(u32) -> Option<u32>) {
        let cells = std::mem::take(&mut self.cells);
        for ((sheet, row, col), value) in cells {
            if sheet != sheet_id {
                self.cells.insert((sheet, row, col), value);
                continue;
            }
            let moved = match dimension {
                Dimension::Col => f(col).map(|col| (row, col)),
                Dimension::Row => f(row).map(|row| (row, col)),
            };
            if let Some((row, col)) = moved {
                self.cells.insert((sheet, row, col), value);
            }
        }
    }
}

impl Dispatcher<Vec<Command>> for GridDocument {
    fn apply(&mut self, data: &Vec<Command>) {
        self.snapshots.push(self.cells.clone());
        for cmd in data {
            self.execute(cmd);
        }
        self.applied += 1;
    }

    fn revert(&mut self, _data: &Vec<Command>) {
        let snapshot = self
            .snapshots
            .pop()
            .expect("revert without a matching apply");
        self.cells = snapshot;
        self.reverted += 1;
    }
}

pub fn set(a1: &str, content: &str) -> Command {
    let cell = CellRef::from_a1(a1).expect("valid A1 cell");
    Command::UpdateCell(UpdateCell {
        sheet_id: SHEET.to_string(),
        col: cell.col,
        row: cell.row,
        content: Some(content.to_string()),
        format: None,
    })
}

pub fn insert_columns(base: u32, quantity: u32, position: InsertPosition) -> Command {
    Command::AddColumnsRows(AddColumnsRows {
        sheet_id: SHEET.to_string(),
        dimension: Dimension::Col,
        base,
        quantity,
        position,
    })
}

pub fn remove_columns(elements: Vec<u32>) -> Command {
    Command::RemoveColumnsRows(HeaderSelection {
        sheet_id: SHEET.to_string(),
        dimension: Dimension::Col,
        elements,
    })
}
