use calamine::{Data, Range, Reader, open_workbook_auto_from_rs};
use std::io::Cursor;

use crate::cell::CellValue;
use crate::error::DecodeError;

/// Decoded cells of the first worksheet.
///
/// Sheet row 1 is the header row; every following row is a data row.
/// `first_row_number` is the 1-based sheet row the grid starts at, so error
/// messages can point at the row the user sees in their spreadsheet.
#[derive(Debug, Clone, PartialEq)]
pub struct Grid {
    rows: Vec<Vec<CellValue>>,
    first_row_number: usize,
}

impl Grid {
    /// Build a grid whose first row sits on sheet row 1
    pub fn new(rows: Vec<Vec<CellValue>>) -> Self {
        Grid {
            rows,
            first_row_number: 1,
        }
    }

    /// Decode spreadsheet bytes (xlsx, xlsm, xlsb, xls or ods) and keep the first worksheet
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, DecodeError> {
        let mut workbook = open_workbook_auto_from_rs(Cursor::new(bytes))
            .map_err(|e| DecodeError::Unreadable(e.to_string()))?;

        let range = match workbook.worksheet_range_at(0) {
            Some(Ok(range)) => range,
            Some(Err(e)) => return Err(DecodeError::Unreadable(e.to_string())),
            None => return Err(DecodeError::NoWorksheets),
        };

        let grid = Self::from_range(&range);
        tracing::debug!(
            rows = grid.rows.len(),
            first_row = grid.first_row_number,
            "Decoded first worksheet"
        );
        Ok(grid)
    }

    /// Convert a calamine range. The range starts at its first used cell, which
    /// is not necessarily A1, hence the row offset.
    pub fn from_range(range: &Range<Data>) -> Self {
        let first_row_number = range
            .start()
            .map(|(row, _col)| row as usize + 1)
            .unwrap_or(1);

        let rows = range
            .rows()
            .map(|row| row.iter().map(CellValue::from).collect())
            .collect();

        Grid {
            rows,
            first_row_number,
        }
    }

    /// Header row, i.e. sheet row 1. Empty when that row holds no cells, even
    /// if headers appear further down the sheet.
    pub fn header(&self) -> &[CellValue] {
        if self.first_row_number != 1 {
            return &[];
        }
        self.rows.first().map(Vec::as_slice).unwrap_or(&[])
    }

    /// Data rows with their 1-based sheet row numbers, blank rows included
    pub fn data_rows(&self) -> impl Iterator<Item = (usize, &[CellValue])> + '_ {
        self.rows
            .iter()
            .enumerate()
            .skip(1)
            .map(|(index, row)| (self.first_row_number + index, row.as_slice()))
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// True when every cell of the row is blank or whitespace-only
pub fn is_blank_row(row: &[CellValue]) -> bool {
    row.iter().all(CellValue::is_blank)
}
