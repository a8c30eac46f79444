use serde_json::Value;
use std::fmt;
use std::str::FromStr;

use crate::cell::CellValue;
use crate::columns::{ColumnMap, RequiredField};
use crate::error::{RowValidationError, UploadError};
use crate::grid::{Grid, is_blank_row};
use crate::record::{PCI_MAX, PCI_MIN, RoadRecord};
use crate::utils::has_spreadsheet_extension;

/// What to do with the upload once some rows failed validation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ValidationPolicy {
    /// Any invalid row rejects the whole upload
    #[default]
    Strict,
    /// Invalid rows are dropped, the remaining rows are returned
    Lenient,
}

impl FromStr for ValidationPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "strict" => Ok(ValidationPolicy::Strict),
            "lenient" => Ok(ValidationPolicy::Lenient),
            other => Err(format!(
                "unknown validation policy '{}', expected 'strict' or 'lenient'",
                other
            )),
        }
    }
}

impl fmt::Display for ValidationPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationPolicy::Strict => f.write_str("strict"),
            ValidationPolicy::Lenient => f.write_str("lenient"),
        }
    }
}

#[derive(Debug)]
pub struct ValidationReport {
    pub row_number: usize,
    pub errors: Vec<RowValidationError>,
    pub row_data: Value,
}

pub struct ExcelValidator {
    grid: Grid,
    columns: ColumnMap,
    policy: ValidationPolicy,
    pub validation_reports: Vec<ValidationReport>,
}

enum GridSource<'a> {
    Bytes(&'a [u8]),
    Decoded(Grid),
}

pub struct ExcelValidatorBuilder<'a> {
    source: GridSource<'a>,
    policy: ValidationPolicy,
}

impl<'a> ExcelValidatorBuilder<'a> {
    /// Start from the raw bytes of an uploaded spreadsheet
    pub fn from_bytes(bytes: &'a [u8]) -> Self {
        ExcelValidatorBuilder {
            source: GridSource::Bytes(bytes),
            policy: ValidationPolicy::default(),
        }
    }

    /// Start from an already decoded grid
    pub fn from_grid(grid: Grid) -> Self {
        ExcelValidatorBuilder {
            source: GridSource::Decoded(grid),
            policy: ValidationPolicy::default(),
        }
    }

    pub fn policy(mut self, policy: ValidationPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Build the ExcelValidator, decoding the sheet and resolving the required
    /// columns during construction.
    ///
    /// A missing column fails here, before any row is looked at.
    pub fn build(self) -> Result<ExcelValidator, UploadError> {
        let grid = match self.source {
            GridSource::Bytes(bytes) => Grid::from_bytes(bytes)?,
            GridSource::Decoded(grid) => grid,
        };

        let columns = ColumnMap::resolve(grid.header())?;
        tracing::debug!(?columns, "Resolved required columns");

        Ok(ExcelValidator {
            grid,
            columns,
            policy: self.policy,
            validation_reports: Vec::new(),
        })
    }
}

impl ExcelValidator {
    //////////////////////////////////////////////////////////////
    ///  Public API
    //////////////////////////////////////////////////////////////

    pub fn columns(&self) -> &ColumnMap {
        &self.columns
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn policy(&self) -> ValidationPolicy {
        self.policy
    }

    /// Validate every data row and apply the policy.
    ///
    /// Under the strict policy any row error fails the call with every error of
    /// every row, blank rows included; under the lenient policy invalid rows are
    /// left out and blank rows are skipped without a report. Either way
    /// the failing rows end up in `validation_reports`.
    pub fn validate_excel(&mut self) -> Result<Vec<RoadRecord>, UploadError> {
        self.validation_reports.clear();
        let mut records = Vec::new();

        for (row_number, row) in self.grid.data_rows() {
            if self.policy == ValidationPolicy::Lenient && is_blank_row(row) {
                continue;
            }
            match validate_row(row_number, row, &self.columns) {
                Ok(record) => records.push(record),
                Err(errors) => self.validation_reports.push(ValidationReport {
                    row_number,
                    errors,
                    row_data: serde_json::to_value(row).unwrap_or(Value::Null),
                }),
            }
        }

        if self.validation_reports.is_empty() {
            tracing::info!(rows = records.len(), "All rows passed validation");
            return Ok(records);
        }

        tracing::warn!(
            policy = %self.policy,
            "Road data validation report\n{}",
            self.format_validation_report()
        );

        match self.policy {
            ValidationPolicy::Strict => {
                let errors = self
                    .validation_reports
                    .iter()
                    .flat_map(|report| report.errors.iter().cloned())
                    .collect();
                Err(UploadError::Validation(errors))
            }
            ValidationPolicy::Lenient => {
                tracing::info!(
                    kept = records.len(),
                    dropped = self.validation_reports.len(),
                    "Dropped invalid rows"
                );
                Ok(records)
            }
        }
    }

    //////////////////////////////////////////////////////////////
    ///  Private methods
    //////////////////////////////////////////////////////////////

    /// Format validation reports into a structured string for logging
    fn format_validation_report(&self) -> String {
        let mut report = String::new();

        report.push_str("=============================\n");
        report.push_str(&format!(
            "Total rows with errors: {}\n\n",
            self.validation_reports.len()
        ));

        for validation_report in &self.validation_reports {
            report.push_str(&format!(
                "Row {}: {} error(s)\n",
                validation_report.row_number,
                validation_report.errors.len()
            ));

            // Add row data (handle JSON serialization errors gracefully)
            match serde_json::to_string_pretty(&validation_report.row_data) {
                Ok(json_data) => {
                    report.push_str(&format!("Row data: {}\n", json_data));
                }
                Err(_) => {
                    report.push_str("Row data: [Error serializing data]\n");
                }
            }

            report.push_str("Errors:\n");
            for error in &validation_report.errors {
                report.push_str(&format!("  - {}\n", error));
            }
            report.push('\n');
        }

        report
    }
}

/// Validate one data row. `row_number` is the 1-based sheet row used in messages.
///
/// Every check runs, so a row with several problems reports all of them
/// (road_name first, then pcivalue_2019, then pcivalue_2021).
pub fn validate_row(
    row_number: usize,
    row: &[CellValue],
    columns: &ColumnMap,
) -> Result<RoadRecord, Vec<RowValidationError>> {
    let mut errors = Vec::new();

    let road_name = columns
        .cell(row, RequiredField::RoadName)
        .to_trimmed_string();
    if road_name.is_empty() {
        errors.push(RowValidationError::EmptyRoadName { row: row_number });
    }

    let mut pci_value = |field| match check_pci_value(row_number, row, columns, field) {
        Ok(value) => Some(value),
        Err(error) => {
            errors.push(error);
            None
        }
    };
    let pcivalue_2019 = pci_value(RequiredField::PciValue2019);
    let pcivalue_2021 = pci_value(RequiredField::PciValue2021);

    match (pcivalue_2019, pcivalue_2021) {
        (Some(pcivalue_2019), Some(pcivalue_2021)) if errors.is_empty() => Ok(RoadRecord {
            road_name,
            pcivalue_2019,
            pcivalue_2021,
        }),
        _ => Err(errors),
    }
}

fn check_pci_value(
    row_number: usize,
    row: &[CellValue],
    columns: &ColumnMap,
    field: RequiredField,
) -> Result<i64, RowValidationError> {
    let cell = columns.cell(row, field);
    let value = cell
        .to_integer()
        .ok_or_else(|| RowValidationError::NotAnInteger {
            row: row_number,
            field,
            value: cell.clone(),
        })?;

    if !(PCI_MIN..=PCI_MAX).contains(&value) {
        return Err(RowValidationError::OutOfRange {
            row: row_number,
            field,
            value,
        });
    }

    Ok(value)
}

/// Run the whole pipeline for one upload: file-type guard, decoding, column
/// resolution and row validation under `policy`.
pub fn validate_upload(
    filename: &str,
    bytes: &[u8],
    policy: ValidationPolicy,
) -> Result<Vec<RoadRecord>, UploadError> {
    if !has_spreadsheet_extension(filename) {
        return Err(UploadError::UnsupportedFileType {
            filename: filename.to_string(),
        });
    }

    let mut validator = ExcelValidatorBuilder::from_bytes(bytes)
        .policy(policy)
        .build()?;
    validator.validate_excel()
}
