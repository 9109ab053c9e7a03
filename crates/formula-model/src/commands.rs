//! Edit commands exchanged between collaborators.
//!
//! A [`Command`] is an immutable record. Its structural footprint is exposed through
//! *capabilities* rather than through the concrete payload type:
//!
//! - sheet-scoped: [`Command::sheet_id`]
//! - target-scoped (list of zones): [`Command::target`]
//! - zone-scoped (single zone): [`Command::zone`]
//! - position-scoped (single cell): [`Command::position`]
//! - grid-scoped (row/column indices): [`Command::grid`]
//!
//! The transform engine only ever talks to commands through these accessors and the matching
//! `with_*` rebuilders, which return a new command.

use core::fmt;

use serde::{Deserialize, Serialize};

use crate::charts::{CarouselItem, ChartDefinition, FigureGeometry};
use crate::{CellRef, Dimension, Zone};

pub type SheetId = String;
pub type FigureId = String;
pub type ChartId = String;

/// Where new headers go relative to `base`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InsertPosition {
    Before,
    After,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCell {
    pub sheet_id: SheetId,
    pub col: u32,
    pub row: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CellCommand {
    pub sheet_id: SheetId,
    pub col: u32,
    pub row: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SetBorder {
    pub sheet_id: SheetId,
    pub col: u32,
    pub row: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub border: Option<String>,
}

/// Payload of commands that only carry a sheet and a list of zones.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TargetCommand {
    pub sheet_id: SheetId,
    pub target: Vec<Zone>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SetFormatting {
    pub sheet_id: SheetId,
    pub target: Vec<Zone>,
    pub format: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddConditionalFormat {
    pub sheet_id: SheetId,
    pub cf_id: String,
    pub target: Vec<Zone>,
    pub rule: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddMerge {
    pub sheet_id: SheetId,
    pub target: Vec<Zone>,
    #[serde(default)]
    pub force: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SortCells {
    pub sheet_id: SheetId,
    pub zone: Zone,
    /// Anchor cell of the sort (the column the user sorted on).
    pub col: u32,
    pub row: u32,
    #[serde(default)]
    pub descending: bool,
}

/// Cut/paste of zones, possibly onto another sheet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MoveRanges {
    pub sheet_id: SheetId,
    pub target: Vec<Zone>,
    pub target_sheet_id: SheetId,
    pub col: u32,
    pub row: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddColumnsRows {
    pub sheet_id: SheetId,
    pub dimension: Dimension,
    pub base: u32,
    pub quantity: u32,
    pub position: InsertPosition,
}

impl AddColumnsRows {
    /// Index of the first inserted header.
    pub fn first_inserted(&self) -> u32 {
        match self.position {
            InsertPosition::Before => self.base,
            InsertPosition::After => self.base.saturating_add(1),
        }
    }
}

/// Payload of commands addressing a set of rows or columns.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HeaderSelection {
    pub sheet_id: SheetId,
    pub dimension: Dimension,
    pub elements: Vec<u32>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResizeColumnsRows {
    pub sheet_id: SheetId,
    pub dimension: Dimension,
    pub elements: Vec<u32>,
    pub size: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateSheet {
    pub sheet_id: SheetId,
    pub name: String,
    pub position: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SheetCommand {
    pub sheet_id: SheetId,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DuplicateSheet {
    pub sheet_id: SheetId,
    pub new_sheet_id: SheetId,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RenameSheet {
    pub sheet_id: SheetId,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FigureCommand {
    pub sheet_id: SheetId,
    pub figure_id: FigureId,
    pub geometry: FigureGeometry,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteFigure {
    pub sheet_id: SheetId,
    pub figure_id: FigureId,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartCommand {
    pub sheet_id: SheetId,
    pub figure_id: FigureId,
    pub chart_id: ChartId,
    pub definition: ChartDefinition,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteChart {
    pub sheet_id: SheetId,
    pub chart_id: ChartId,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCarousel {
    pub sheet_id: SheetId,
    pub figure_id: FigureId,
    pub items: Vec<CarouselItem>,
}

/// A collaborative edit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Command {
    UpdateCell(UpdateCell),
    ClearCell(CellCommand),
    SetBorder(SetBorder),
    SetFormatting(SetFormatting),
    ClearFormatting(TargetCommand),
    DeleteContent(TargetCommand),
    AddConditionalFormat(AddConditionalFormat),
    AddMerge(AddMerge),
    RemoveMerge(TargetCommand),
    SortCells(SortCells),
    MoveRanges(MoveRanges),
    AddColumnsRows(AddColumnsRows),
    RemoveColumnsRows(HeaderSelection),
    ResizeColumnsRows(ResizeColumnsRows),
    HideColumnsRows(HeaderSelection),
    UnhideColumnsRows(HeaderSelection),
    CreateSheet(CreateSheet),
    DeleteSheet(SheetCommand),
    DuplicateSheet(DuplicateSheet),
    RenameSheet(RenameSheet),
    CreateFigure(FigureCommand),
    UpdateFigure(FigureCommand),
    DeleteFigure(DeleteFigure),
    CreateChart(ChartCommand),
    UpdateChart(ChartCommand),
    DeleteChart(DeleteChart),
    UpdateCarousel(UpdateCarousel),
}

/// Tag of a [`Command`], used as registry key.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum CommandKind {
    UpdateCell,
    ClearCell,
    SetBorder,
    SetFormatting,
    ClearFormatting,
    DeleteContent,
    AddConditionalFormat,
    AddMerge,
    RemoveMerge,
    SortCells,
    MoveRanges,
    AddColumnsRows,
    RemoveColumnsRows,
    ResizeColumnsRows,
    HideColumnsRows,
    UnhideColumnsRows,
    CreateSheet,
    DeleteSheet,
    DuplicateSheet,
    RenameSheet,
    CreateFigure,
    UpdateFigure,
    DeleteFigure,
    CreateChart,
    UpdateChart,
    DeleteChart,
    UpdateCarousel,
}

/// Static capability set of a command kind.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Capabilities {
    pub sheet: bool,
    pub target: bool,
    pub zone: bool,
    pub position: bool,
    pub grid: bool,
}

impl Capabilities {
    const NONE: Self = Self {
        sheet: false,
        target: false,
        zone: false,
        position: false,
        grid: false,
    };

    const SHEET: Self = Self {
        sheet: true,
        target: false,
        zone: false,
        position: false,
        grid: false,
    };

    /// True if a row/column edit can move any coordinate of the command.
    pub const fn is_geometric(&self) -> bool {
        self.target || self.zone || self.position || self.grid
    }
}

impl CommandKind {
    pub const ALL: [CommandKind; 27] = [
        CommandKind::UpdateCell,
        CommandKind::ClearCell,
        CommandKind::SetBorder,
        CommandKind::SetFormatting,
        CommandKind::ClearFormatting,
        CommandKind::DeleteContent,
        CommandKind::AddConditionalFormat,
        CommandKind::AddMerge,
        CommandKind::RemoveMerge,
        CommandKind::SortCells,
        CommandKind::MoveRanges,
        CommandKind::AddColumnsRows,
        CommandKind::RemoveColumnsRows,
        CommandKind::ResizeColumnsRows,
        CommandKind::HideColumnsRows,
        CommandKind::UnhideColumnsRows,
        CommandKind::CreateSheet,
        CommandKind::DeleteSheet,
        CommandKind::DuplicateSheet,
        CommandKind::RenameSheet,
        CommandKind::CreateFigure,
        CommandKind::UpdateFigure,
        CommandKind::DeleteFigure,
        CommandKind::CreateChart,
        CommandKind::UpdateChart,
        CommandKind::DeleteChart,
        CommandKind::UpdateCarousel,
    ];

    pub const fn capabilities(self) -> Capabilities {
        match self {
            Self::UpdateCell | Self::ClearCell | Self::SetBorder => Capabilities {
                position: true,
                ..Capabilities::SHEET
            },
            Self::SetFormatting
            | Self::ClearFormatting
            | Self::DeleteContent
            | Self::AddConditionalFormat
            | Self::AddMerge
            | Self::RemoveMerge
            | Self::MoveRanges => Capabilities {
                target: true,
                ..Capabilities::SHEET
            },
            Self::SortCells => Capabilities {
                zone: true,
                position: true,
                ..Capabilities::SHEET
            },
            Self::RemoveColumnsRows
            | Self::ResizeColumnsRows
            | Self::HideColumnsRows
            | Self::UnhideColumnsRows => Capabilities {
                grid: true,
                ..Capabilities::SHEET
            },
            Self::CreateSheet => Capabilities::NONE,
            Self::AddColumnsRows
            | Self::DeleteSheet
            | Self::DuplicateSheet
            | Self::RenameSheet
            | Self::CreateFigure
            | Self::UpdateFigure
            | Self::DeleteFigure
            | Self::CreateChart
            | Self::UpdateChart
            | Self::DeleteChart
            | Self::UpdateCarousel => Capabilities::SHEET,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::UpdateCell => "UPDATE_CELL",
            Self::ClearCell => "CLEAR_CELL",
            Self::SetBorder => "SET_BORDER",
            Self::SetFormatting => "SET_FORMATTING",
            Self::ClearFormatting => "CLEAR_FORMATTING",
            Self::DeleteContent => "DELETE_CONTENT",
            Self::AddConditionalFormat => "ADD_CONDITIONAL_FORMAT",
            Self::AddMerge => "ADD_MERGE",
            Self::RemoveMerge => "REMOVE_MERGE",
            Self::SortCells => "SORT_CELLS",
            Self::MoveRanges => "MOVE_RANGES",
            Self::AddColumnsRows => "ADD_COLUMNS_ROWS",
            Self::RemoveColumnsRows => "REMOVE_COLUMNS_ROWS",
            Self::ResizeColumnsRows => "RESIZE_COLUMNS_ROWS",
            Self::HideColumnsRows => "HIDE_COLUMNS_ROWS",
            Self::UnhideColumnsRows => "UNHIDE_COLUMNS_ROWS",
            Self::CreateSheet => "CREATE_SHEET",
            Self::DeleteSheet => "DELETE_SHEET",
            Self::DuplicateSheet => "DUPLICATE_SHEET",
            Self::RenameSheet => "RENAME_SHEET",
            Self::CreateFigure => "CREATE_FIGURE",
            Self::UpdateFigure => "UPDATE_FIGURE",
            Self::DeleteFigure => "DELETE_FIGURE",
            Self::CreateChart => "CREATE_CHART",
            Self::UpdateChart => "UPDATE_CHART",
            Self::DeleteChart => "DELETE_CHART",
            Self::UpdateCarousel => "UPDATE_CAROUSEL",
        }
    }
}

impl fmt::Display for CommandKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Command {
    pub fn kind(&self) -> CommandKind {
        match self {
            Command::UpdateCell(_) => CommandKind::UpdateCell,
            Command::ClearCell(_) => CommandKind::ClearCell,
            Command::SetBorder(_) => CommandKind::SetBorder,
            Command::SetFormatting(_) => CommandKind::SetFormatting,
            Command::ClearFormatting(_) => CommandKind::ClearFormatting,
            Command::DeleteContent(_) => CommandKind::DeleteContent,
            Command::AddConditionalFormat(_) => CommandKind::AddConditionalFormat,
            Command::AddMerge(_) => CommandKind::AddMerge,
            Command::RemoveMerge(_) => CommandKind::RemoveMerge,
            Command::SortCells(_) => CommandKind::SortCells,
            Command::MoveRanges(_) => CommandKind::MoveRanges,
            Command::AddColumnsRows(_) => CommandKind::AddColumnsRows,
            Command::RemoveColumnsRows(_) => CommandKind::RemoveColumnsRows,
            Command::ResizeColumnsRows(_) => CommandKind::ResizeColumnsRows,
            Command::HideColumnsRows(_) => CommandKind::HideColumnsRows,
            Command::UnhideColumnsRows(_) => CommandKind::UnhideColumnsRows,
            Command::CreateSheet(_) => CommandKind::CreateSheet,
            Command::DeleteSheet(_) => CommandKind::DeleteSheet,
            Command::DuplicateSheet(_) => CommandKind::DuplicateSheet,
            Command::RenameSheet(_) => CommandKind::RenameSheet,
            Command::CreateFigure(_) => CommandKind::CreateFigure,
            Command::UpdateFigure(_) => CommandKind::UpdateFigure,
            Command::DeleteFigure(_) => CommandKind::DeleteFigure,
            Command::CreateChart(_) => CommandKind::CreateChart,
            Command::UpdateChart(_) => CommandKind::UpdateChart,
            Command::DeleteChart(_) => CommandKind::DeleteChart,
            Command::UpdateCarousel(_) => CommandKind::UpdateCarousel,
        }
    }

    /// Sheet the command applies to. `None` for commands that create a sheet.
    pub fn sheet_id(&self) -> Option<&str> {
        let id = match self {
            Command::UpdateCell(c) => &c.sheet_id,
            Command::ClearCell(c) => &c.sheet_id,
            Command::SetBorder(c) => &c.sheet_id,
            Command::SetFormatting(c) => &c.sheet_id,
            Command::ClearFormatting(c) | Command::DeleteContent(c) | Command::RemoveMerge(c) => {
                &c.sheet_id
            }
            Command::AddConditionalFormat(c) => &c.sheet_id,
            Command::AddMerge(c) => &c.sheet_id,
            Command::SortCells(c) => &c.sheet_id,
            Command::MoveRanges(c) => &c.sheet_id,
            Command::AddColumnsRows(c) => &c.sheet_id,
            Command::RemoveColumnsRows(c)
            | Command::HideColumnsRows(c)
            | Command::UnhideColumnsRows(c) => &c.sheet_id,
            Command::ResizeColumnsRows(c) => &c.sheet_id,
            Command::CreateSheet(_) => return None,
            Command::DeleteSheet(c) => &c.sheet_id,
            Command::DuplicateSheet(c) => &c.sheet_id,
            Command::RenameSheet(c) => &c.sheet_id,
            Command::CreateFigure(c) | Command::UpdateFigure(c) => &c.sheet_id,
            Command::DeleteFigure(c) => &c.sheet_id,
            Command::CreateChart(c) | Command::UpdateChart(c) => &c.sheet_id,
            Command::DeleteChart(c) => &c.sheet_id,
            Command::UpdateCarousel(c) => &c.sheet_id,
        };
        Some(id)
    }

    /// Second sheet touched by commands that span two sheets.
    pub fn secondary_sheet_id(&self) -> Option<&str> {
        match self {
            Command::MoveRanges(c) => Some(&c.target_sheet_id),
            Command::DuplicateSheet(c) => Some(&c.new_sheet_id),
            _ => None,
        }
    }

    /// True for commands whose effect can reach beyond [`Command::sheet_id`]: moves and
    /// duplications name a second sheet, charts may plot ranges from any sheet.
    pub fn spans_sheets(&self) -> bool {
        self.secondary_sheet_id().is_some()
            || matches!(self, Command::CreateChart(_) | Command::UpdateChart(_))
    }

    pub fn target(&self) -> Option<&[Zone]> {
        match self {
            Command::SetFormatting(c) => Some(&c.target),
            Command::ClearFormatting(c) | Command::DeleteContent(c) | Command::RemoveMerge(c) => {
                Some(&c.target)
            }
            Command::AddConditionalFormat(c) => Some(&c.target),
            Command::AddMerge(c) => Some(&c.target),
            Command::MoveRanges(c) => Some(&c.target),
            _ => None,
        }
    }

    #[must_use]
    pub fn with_target(&self, target: Vec<Zone>) -> Command {
        match self.clone() {
            Command::SetFormatting(c) => Command::SetFormatting(SetFormatting { target, ..c }),
            Command::ClearFormatting(c) => {
                Command::ClearFormatting(TargetCommand { target, ..c })
            }
            Command::DeleteContent(c) => Command::DeleteContent(TargetCommand { target, ..c }),
            Command::RemoveMerge(c) => Command::RemoveMerge(TargetCommand { target, ..c }),
            Command::AddConditionalFormat(c) => {
                Command::AddConditionalFormat(AddConditionalFormat { target, ..c })
            }
            Command::AddMerge(c) => Command::AddMerge(AddMerge { target, ..c }),
            Command::MoveRanges(c) => Command::MoveRanges(MoveRanges { target, ..c }),
            other => other,
        }
    }

    pub fn zone(&self) -> Option<Zone> {
        match self {
            Command::SortCells(c) => Some(c.zone),
            _ => None,
        }
    }

    #[must_use]
    pub fn with_zone(&self, zone: Zone) -> Command {
        match self.clone() {
            Command::SortCells(c) => Command::SortCells(SortCells { zone, ..c }),
            other => other,
        }
    }

    pub fn position(&self) -> Option<CellRef> {
        match self {
            Command::UpdateCell(c) => Some(CellRef::new(c.row, c.col)),
            Command::ClearCell(c) => Some(CellRef::new(c.row, c.col)),
            Command::SetBorder(c) => Some(CellRef::new(c.row, c.col)),
            Command::SortCells(c) => Some(CellRef::new(c.row, c.col)),
            _ => None,
        }
    }

    #[must_use]
    pub fn with_position(&self, cell: CellRef) -> Command {
        let CellRef { row, col } = cell;
        match self.clone() {
            Command::UpdateCell(c) => Command::UpdateCell(UpdateCell { row, col, ..c }),
            Command::ClearCell(c) => Command::ClearCell(CellCommand { row, col, ..c }),
            Command::SetBorder(c) => Command::SetBorder(SetBorder { row, col, ..c }),
            Command::SortCells(c) => Command::SortCells(SortCells { row, col, ..c }),
            other => other,
        }
    }

    /// Row/column indices addressed by the command, with their axis.
    pub fn grid(&self) -> Option<(Dimension, &[u32])> {
        match self {
            Command::RemoveColumnsRows(c)
            | Command::HideColumnsRows(c)
            | Command::UnhideColumnsRows(c) => Some((c.dimension, &c.elements)),
            Command::ResizeColumnsRows(c) => Some((c.dimension, &c.elements)),
            _ => None,
        }
    }

    #[must_use]
    pub fn with_grid_elements(&self, elements: Vec<u32>) -> Command {
        match self.clone() {
            Command::RemoveColumnsRows(c) => {
                Command::RemoveColumnsRows(HeaderSelection { elements, ..c })
            }
            Command::HideColumnsRows(c) => {
                Command::HideColumnsRows(HeaderSelection { elements, ..c })
            }
            Command::UnhideColumnsRows(c) => {
                Command::UnhideColumnsRows(HeaderSelection { elements, ..c })
            }
            Command::ResizeColumnsRows(c) => {
                Command::ResizeColumnsRows(ResizeColumnsRows { elements, ..c })
            }
            other => other,
        }
    }

    /// Figure id for figure-level commands (charts and carousels are figures too).
    pub fn figure_id(&self) -> Option<&str> {
        match self {
            Command::CreateFigure(c) | Command::UpdateFigure(c) => Some(&c.figure_id),
            Command::DeleteFigure(c) => Some(&c.figure_id),
            Command::CreateChart(c) | Command::UpdateChart(c) => Some(&c.figure_id),
            Command::UpdateCarousel(c) => Some(&c.figure_id),
            _ => None,
        }
    }
}
