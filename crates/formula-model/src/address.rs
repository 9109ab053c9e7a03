use core::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Excel-compatible maximum rows per worksheet (1,048,576).
pub const EXCEL_MAX_ROWS: u32 = 1_048_576;

/// Excel-compatible maximum columns per worksheet (16,384).
pub const EXCEL_MAX_COLS: u32 = 16_384;

/// Axis of a row/column (header) edit.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Dimension {
    Col,
    Row,
}

/// A reference to a single cell within a worksheet.
///
/// Rows and columns are **0-indexed**:
/// - `row = 0` is Excel row `1`
/// - `col = 0` is Excel column `A`
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CellRef {
    /// 0-indexed row.
    pub row: u32,
    /// 0-indexed column.
    pub col: u32,
}

impl CellRef {
    /// Construct a new [`CellRef`].
    #[inline]
    pub const fn new(row: u32, col: u32) -> Self {
        Self { row, col }
    }

    /// Index of this cell along `dimension`.
    #[inline]
    pub const fn index(self, dimension: Dimension) -> u32 {
        match dimension {
            Dimension::Col => self.col,
            Dimension::Row => self.row,
        }
    }

    /// Copy of this cell with its `dimension` index replaced.
    #[inline]
    #[must_use]
    pub const fn with_index(self, dimension: Dimension, index: u32) -> Self {
        match dimension {
            Dimension::Col => Self::new(self.row, index),
            Dimension::Row => Self::new(index, self.col),
        }
    }

    /// Convert to Excel A1 notation (e.g. `A1`, `BC32`).
    pub fn to_a1(self) -> String {
        format!("{}{}", col_to_name(self.col), self.row + 1)
    }

    /// Parse an Excel A1-style reference (e.g. `A1`, `$B$2`).
    pub fn from_a1(a1: &str) -> Result<Self, A1ParseError> {
        let s = a1.trim();
        if s.is_empty() {
            return Err(A1ParseError::Empty);
        }

        // Accept optional `$` markers.
        let mut idx = 0usize;
        let bytes = s.as_bytes();
        if bytes.get(idx) == Some(&b'$') {
            idx += 1;
        }

        let col_start = idx;
        while idx < bytes.len() && bytes[idx].is_ascii_alphabetic() {
            idx += 1;
        }
        if idx == col_start {
            return Err(A1ParseError::MissingColumn);
        }

        let col_str = &s[col_start..idx];
        if bytes.get(idx) == Some(&b'$') {
            idx += 1;
        }

        let row_start = idx;
        while idx < bytes.len() && bytes[idx].is_ascii_digit() {
            idx += 1;
        }
        if idx == row_start {
            return Err(A1ParseError::MissingRow);
        }
        if idx != bytes.len() {
            return Err(A1ParseError::TrailingCharacters);
        }

        let col = name_to_col(col_str)?;
        if col >= EXCEL_MAX_COLS {
            return Err(A1ParseError::InvalidColumn);
        }
        let row_1_based: u32 = s[row_start..idx]
            .parse()
            .map_err(|_| A1ParseError::InvalidRow)?;
        if row_1_based == 0 || row_1_based > EXCEL_MAX_ROWS {
            return Err(A1ParseError::InvalidRow);
        }

        Ok(Self {
            row: row_1_based - 1,
            col,
        })
    }
}

impl fmt::Display for CellRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_a1())
    }
}

/// A rectangular, inclusive region within a worksheet.
///
/// Zones are plain values: every structural rewrite builds a new zone instead of
/// editing one in place. A zone built through [`Zone::new`] is normalized so that
/// `top <= bottom` and `left <= right`; so is a deserialized zone.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct Zone {
    pub top: u32,
    pub left: u32,
    pub bottom: u32,
    pub right: u32,
}

impl<'de> Deserialize<'de> for Zone {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct Helper {
            top: u32,
            left: u32,
            bottom: u32,
            right: u32,
        }

        let helper = Helper::deserialize(deserializer)?;
        Ok(Zone::new(
            CellRef::new(helper.top, helper.left),
            CellRef::new(helper.bottom, helper.right),
        ))
    }
}

impl Zone {
    /// Construct the zone spanned by two corner cells, normalizing coordinates if needed.
    pub const fn new(a: CellRef, b: CellRef) -> Self {
        let top = if a.row <= b.row { a.row } else { b.row };
        let bottom = if a.row <= b.row { b.row } else { a.row };
        let left = if a.col <= b.col { a.col } else { b.col };
        let right = if a.col <= b.col { b.col } else { a.col };
        Self {
            top,
            left,
            bottom,
            right,
        }
    }

    /// Single-cell zone.
    pub const fn cell(cell: CellRef) -> Self {
        Self::new(cell, cell)
    }

    /// Top-left corner (the anchor of a merge).
    #[inline]
    pub const fn top_left(&self) -> CellRef {
        CellRef::new(self.top, self.left)
    }

    #[inline]
    pub const fn bottom_right(&self) -> CellRef {
        CellRef::new(self.bottom, self.right)
    }

    /// Returns true if `cell` lies within this zone.
    #[inline]
    pub const fn contains(&self, cell: CellRef) -> bool {
        cell.row >= self.top
            && cell.row <= self.bottom
            && cell.col >= self.left
            && cell.col <= self.right
    }

    /// Returns true if both zones share at least one cell.
    #[inline]
    pub const fn overlaps(&self, other: &Zone) -> bool {
        self.left <= other.right
            && other.left <= self.right
            && self.top <= other.bottom
            && other.top <= self.bottom
    }

    /// Inclusive `(start, end)` span of the zone along `dimension`.
    #[inline]
    pub const fn span(&self, dimension: Dimension) -> (u32, u32) {
        match dimension {
            Dimension::Col => (self.left, self.right),
            Dimension::Row => (self.top, self.bottom),
        }
    }

    /// Copy of this zone with its `dimension` span replaced.
    ///
    /// The caller is responsible for passing a non-empty span (`start <= end`).
    #[must_use]
    pub const fn with_span(self, dimension: Dimension, start: u32, end: u32) -> Self {
        match dimension {
            Dimension::Col => Self {
                left: start,
                right: end,
                ..self
            },
            Dimension::Row => Self {
                top: start,
                bottom: end,
                ..self
            },
        }
    }

    /// Returns true if the zone is exactly one cell.
    #[inline]
    pub const fn is_single_cell(&self) -> bool {
        self.top == self.bottom && self.left == self.right
    }

    /// Parse an Excel A1-style range like `A1:B2` or a single-cell reference like `C3`.
    pub fn from_a1(a1: &str) -> Result<Self, ZoneParseError> {
        let s = a1.trim();
        if s.is_empty() {
            return Err(ZoneParseError::Empty);
        }

        match s.split_once(':') {
            None => Ok(Zone::cell(CellRef::from_a1(s)?)),
            Some((a, b)) => {
                let start = CellRef::from_a1(a)?;
                let end = CellRef::from_a1(b)?;
                Ok(Zone::new(start, end))
            }
        }
    }
}

impl fmt::Display for Zone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_single_cell() {
            write!(f, "{}", self.top_left())
        } else {
            write!(f, "{}:{}", self.top_left(), self.bottom_right())
        }
    }
}

/// Errors that can occur when parsing an A1 cell reference.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Error)]
pub enum A1ParseError {
    #[error("empty A1 reference")]
    Empty,
    #[error("missing column in A1 reference")]
    MissingColumn,
    #[error("missing row in A1 reference")]
    MissingRow,
    #[error("invalid column in A1 reference")]
    InvalidColumn,
    #[error("invalid row in A1 reference")]
    InvalidRow,
    #[error("trailing characters in A1 reference")]
    TrailingCharacters,
}

/// Errors that can occur when parsing an A1 zone.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Error)]
pub enum ZoneParseError {
    #[error("empty A1 range")]
    Empty,
    #[error("invalid cell reference in range: {0}")]
    Cell(#[from] A1ParseError),
}

fn col_to_name(col: u32) -> String {
    // Excel columns are 1-based in A1 notation. We store 0-based internally.
    let mut n = col + 1;
    let mut out = Vec::<u8>::new();
    while n > 0 {
        let rem = (n - 1) % 26;
        out.push(b'A' + rem as u8);
        n = (n - 1) / 26;
    }
    out.reverse();
    out.into_iter().map(char::from).collect()
}

fn name_to_col(s: &str) -> Result<u32, A1ParseError> {
    let mut col: u32 = 0;
    for b in s.bytes() {
        if !b.is_ascii_alphabetic() {
            return Err(A1ParseError::InvalidColumn);
        }
        let v = (b.to_ascii_uppercase() - b'A') as u32 + 1;
        col = col
            .checked_mul(26)
            .and_then(|c| c.checked_add(v))
            .ok_or(A1ParseError::InvalidColumn)?;
    }
    if col == 0 {
        return Err(A1ParseError::InvalidColumn);
    }
    Ok(col - 1)
}
