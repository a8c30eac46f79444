#![allow(clippy::needless_return)]

mod cell;
mod columns;
mod error;
mod excel_validator;
mod grid;
mod record;
pub mod utils;

// Test utilities - only compiled when testing or with test feature
// #[cfg(test)] alone doesn't work for integration tests (they're external crates)
// The feature flag makes it available to integration tests via dev-dependencies
#[cfg(any(test, feature = "test"))]
pub mod test_utils;

pub use cell::CellValue;
pub use columns::{ColumnMap, RequiredField};
pub use error::{DecodeError, RowValidationError, SchemaError, UploadError};
pub use excel_validator::{
    ExcelValidator, ExcelValidatorBuilder, ValidationPolicy, ValidationReport, validate_row,
    validate_upload,
};
pub use grid::Grid;
pub use record::{PCI_MAX, PCI_MIN, RoadRecord};
