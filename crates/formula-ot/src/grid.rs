//! Row/column insertion and removal arithmetic.
//!
//! Every helper returns `None` when the coordinate it was given no longer exists after the
//! edit (a removed header, a span whose headers were all removed, or an index pushed past
//! `u32::MAX`).

use formula_model::{CellRef, Command, Dimension, InsertPosition, Zone};

/// A structural row/column edit, normalized from an executed command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridEdit {
    Insert {
        dimension: Dimension,
        /// Index of the first inserted header (`base` for "before", `base + 1` for "after").
        first: u32,
        quantity: u32,
    },
    Remove {
        dimension: Dimension,
        /// Removed headers, sorted and deduplicated.
        elements: Vec<u32>,
    },
}

impl GridEdit {
    /// The edit performed by `command`, with the sheet it applies to.
    pub fn from_command(command: &Command) -> Option<(&str, GridEdit)> {
        match command {
            Command::AddColumnsRows(add) => Some((
                add.sheet_id.as_str(),
                GridEdit::insertion(add.dimension, add.base, add.quantity, add.position),
            )),
            Command::RemoveColumnsRows(remove) => Some((
                remove.sheet_id.as_str(),
                GridEdit::removal(remove.dimension, &remove.elements),
            )),
            _ => None,
        }
    }

    pub fn insertion(
        dimension: Dimension,
        base: u32,
        quantity: u32,
        position: InsertPosition,
    ) -> Self {
        let first = match position {
            InsertPosition::Before => base,
            InsertPosition::After => base.saturating_add(1),
        };
        GridEdit::Insert {
            dimension,
            first,
            quantity,
        }
    }

    pub fn removal(dimension: Dimension, elements: &[u32]) -> Self {
        let mut elements = elements.to_vec();
        elements.sort_unstable();
        elements.dedup();
        GridEdit::Remove {
            dimension,
            elements,
        }
    }

    pub fn dimension(&self) -> Dimension {
        match self {
            GridEdit::Insert { dimension, .. } | GridEdit::Remove { dimension, .. } => *dimension,
        }
    }

    /// New position of header `index`.
    pub fn adjust_index(&self, index: u32) -> Option<u32> {
        match self {
            GridEdit::Insert {
                first, quantity, ..
            } => {
                if index >= *first {
                    index.checked_add(*quantity)
                } else {
                    Some(index)
                }
            }
            GridEdit::Remove { elements, .. } => {
                if elements.binary_search(&index).is_ok() {
                    None
                } else {
                    Some(index - removed_before(elements, index))
                }
            }
        }
    }

    /// Like [`GridEdit::adjust_index`], but a removed header falls back onto the position its
    /// right-hand neighbour moves to instead of disappearing.
    pub fn adjust_index_clamped(&self, index: u32) -> u32 {
        match self {
            GridEdit::Remove { elements, .. } => index - removed_before(elements, index),
            GridEdit::Insert { .. } => self.adjust_index(index).unwrap_or(index),
        }
    }

    /// New bounds of the inclusive span `[start, end]`.
    pub fn adjust_span(&self, start: u32, end: u32) -> Option<(u32, u32)> {
        match self {
            GridEdit::Insert {
                first, quantity, ..
            } => {
                if start >= *first {
                    Some((start.checked_add(*quantity)?, end.checked_add(*quantity)?))
                } else if end >= *first {
                    // Insertion lands strictly inside the span: it grows.
                    Some((start, end.checked_add(*quantity)?))
                } else {
                    Some((start, end))
                }
            }
            GridEdit::Remove { elements, .. } => {
                let new_start = start - removed_before(elements, start);
                let removed_through_end = elements.partition_point(|&e| e <= end) as u32;
                if removed_through_end > end || new_start > end - removed_through_end {
                    return None;
                }
                Some((new_start, end - removed_through_end))
            }
        }
    }

    pub fn adjust_zone(&self, zone: Zone) -> Option<Zone> {
        let dimension = self.dimension();
        let (start, end) = zone.span(dimension);
        let (start, end) = self.adjust_span(start, end)?;
        Some(zone.with_span(dimension, start, end))
    }

    pub fn adjust_cell(&self, cell: CellRef) -> Option<CellRef> {
        let dimension = self.dimension();
        let index = self.adjust_index(cell.index(dimension))?;
        Some(cell.with_index(dimension, index))
    }

    /// Header list of a grid-scoped command after the edit. Removed headers are dropped.
    pub fn adjust_elements(&self, elements: &[u32]) -> Vec<u32> {
        elements
            .iter()
            .filter_map(|&e| self.adjust_index(e))
            .collect()
    }
}

/// Number of removed headers strictly below `index`.
fn removed_before(elements: &[u32], index: u32) -> u32 {
    elements.partition_point(|&e| e < index) as u32
}
