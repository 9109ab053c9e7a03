//! `formula-model` defines the command model shared by collaborating Formula clients.
//!
//! Everything here is plain data: cell coordinates and zones, the [`Command`] enum with its
//! capability accessors, chart payloads, and sheet-name helpers. Transformation of commands
//! against each other lives in `formula-ot`.

mod address;
pub mod charts;
mod commands;
mod serde_defaults;
mod sheet_name;

pub use address::{
    A1ParseError, CellRef, Dimension, Zone, ZoneParseError, EXCEL_MAX_COLS, EXCEL_MAX_ROWS,
};
pub use commands::{
    AddColumnsRows, AddConditionalFormat, AddMerge, Capabilities, CellCommand, ChartCommand,
    ChartId, Command, CommandKind, CreateSheet, DeleteChart, DeleteFigure, DuplicateSheet,
    FigureCommand, FigureId, HeaderSelection, InsertPosition, MoveRanges, RenameSheet,
    ResizeColumnsRows, SetBorder, SetFormatting, SheetCommand, SheetId, SortCells, TargetCommand,
    UpdateCarousel, UpdateCell,
};
pub use sheet_name::{
    next_sheet_name_candidate, sheet_name_casefold, sheet_name_eq_case_insensitive,
};
