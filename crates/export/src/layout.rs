use std::fmt;
use std::io::Write;

use rust_decimal::{Decimal, RoundingStrategy};
use serde::Serialize;

use crate::error::ExportError;

/// One cell of a prepared sheet.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum Cell {
    Empty,
    Text(String),
    Int(i64),
    Number(Decimal),
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cell::Empty => Ok(()),
            Cell::Text(text) => write!(f, "{text}"),
            Cell::Int(value) => write!(f, "{value}"),
            Cell::Number(value) => write!(f, "{value}"),
        }
    }
}

impl From<&str> for Cell {
    fn from(text: &str) -> Self {
        Cell::Text(text.to_string())
    }
}

impl From<String> for Cell {
    fn from(text: String) -> Self {
        Cell::Text(text)
    }
}

impl From<i64> for Cell {
    fn from(value: i64) -> Self {
        Cell::Int(value)
    }
}

impl From<Decimal> for Cell {
    fn from(value: Decimal) -> Self {
        Cell::Number(value)
    }
}

/// A rectangular merged-header region, in zero-based row/column coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MergeRange {
    pub first_row: usize,
    pub first_col: usize,
    pub last_row: usize,
    pub last_col: usize,
}

impl MergeRange {
    pub fn new(first_row: usize, first_col: usize, last_row: usize, last_col: usize) -> Self {
        Self {
            first_row,
            first_col,
            last_row,
            last_col,
        }
    }
}

/// The complete layout contract handed to a report sink: the cell grid,
/// the merged header regions, and the column widths (in character units).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SheetLayout {
    pub name: String,
    pub rows: Vec<Vec<Cell>>,
    pub merges: Vec<MergeRange>,
    pub column_widths: Vec<u16>,
}

impl SheetLayout {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            rows: Vec::new(),
            merges: Vec::new(),
            column_widths: Vec::new(),
        }
    }

    pub fn push_row(&mut self, row: Vec<Cell>) {
        self.rows.push(row);
    }
}

/// Writes a layout's cell grid as delimited text.
///
/// Merges and widths cannot be expressed in delimited text; sinks that
/// honor them consume the `SheetLayout` directly.
pub fn write_grid_csv<W: Write>(layout: &SheetLayout, writer: W) -> Result<(), ExportError> {
    let mut writer = csv::WriterBuilder::new().flexible(true).from_writer(writer);
    for row in &layout.rows {
        writer.write_record(row.iter().map(|cell| cell.to_string()))?;
    }
    writer.flush()?;
    tracing::debug!("wrote {} rows of sheet '{}'", layout.rows.len(), layout.name);
    Ok(())
}

/// Rounds to two decimal places, half away from zero.
pub(crate) fn two_decimals(value: Decimal) -> Decimal {
    let mut rounded = value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(2);
    rounded
}

/// Rounds to a whole number, half away from zero.
pub(crate) fn round_whole(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
}
