use thiserror::Error;

use crate::cell::CellValue;
use crate::columns::RequiredField;
use crate::utils::SPREADSHEET_EXTENSIONS;

/// A required column could not be found in the header row
#[derive(Error, Debug, Clone, PartialEq)]
#[error("{}", format_missing_columns(.missing))]
pub struct SchemaError {
    pub missing: Vec<RequiredField>,
}

fn format_missing_columns(missing: &[RequiredField]) -> String {
    let names = missing
        .iter()
        .map(|field| field.name())
        .collect::<Vec<_>>()
        .join(", ");
    if missing.len() == 1 {
        format!("Missing required column: {}", names)
    } else {
        format!("Missing required columns: {}", names)
    }
}

/// One field of one data row failed its check. `row` is the 1-based sheet row.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RowValidationError {
    #[error("Row {row}: road_name cannot be empty")]
    EmptyRoadName { row: usize },

    #[error("Row {row}: {field} must be type-coercible to integer, got {value}")]
    NotAnInteger {
        row: usize,
        field: RequiredField,
        value: CellValue,
    },

    #[error("Row {row}: {field} must be 1-5, got {value}")]
    OutOfRange {
        row: usize,
        field: RequiredField,
        value: i64,
    },
}

impl RowValidationError {
    pub fn row(&self) -> usize {
        match self {
            RowValidationError::EmptyRoadName { row }
            | RowValidationError::NotAnInteger { row, .. }
            | RowValidationError::OutOfRange { row, .. } => *row,
        }
    }
}

/// The uploaded bytes could not be read as a spreadsheet
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DecodeError {
    #[error("Invalid or unreadable Excel file: {0}")]
    Unreadable(String),

    #[error("Invalid or unreadable Excel file: the workbook contains no worksheets")]
    NoWorksheets,
}

/// Every way an upload can be refused by the validator
#[derive(Error, Debug, Clone, PartialEq)]
pub enum UploadError {
    #[error(
        "Invalid file type for '{filename}': expected a spreadsheet ({})",
        SPREADSHEET_EXTENSIONS.map(|ext| format!(".{ext}")).join(", ")
    )]
    UnsupportedFileType { filename: String },

    #[error(transparent)]
    Decode(#[from] DecodeError),

    #[error(transparent)]
    Schema(#[from] SchemaError),

    #[error("{}", format_validation_errors(.0))]
    Validation(Vec<RowValidationError>),
}

fn format_validation_errors(errors: &[RowValidationError]) -> String {
    let lines = errors
        .iter()
        .map(|error| error.to_string())
        .collect::<Vec<_>>()
        .join("\n");
    format!("Validation errors:\n{}", lines)
}
