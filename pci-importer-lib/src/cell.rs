use calamine::Data;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::utils::excel_serial_to_datetime;

/// Raw value of one spreadsheet cell, as discovered at read time
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CellValue {
    Text(String),
    Number(f64),
    Blank,
}

impl CellValue {
    /// Convert the cell to a string with surrounding whitespace removed.
    /// Integral numbers render without a fractional part ("12", not "12.0"),
    /// blank cells render as an empty string.
    pub fn to_trimmed_string(&self) -> String {
        match self {
            CellValue::Text(s) => s.trim().to_string(),
            CellValue::Number(n) => match integral_value(*n) {
                Some(int_val) => int_val.to_string(),
                None => n.to_string(),
            },
            CellValue::Blank => String::new(),
        }
    }

    /// Coerce the cell to an integer.
    ///
    /// Accepts integral numbers and text holding an integer or integral decimal
    /// literal ("3", " 4 ", "2.0"). Blank cells, non-numeric text, fractional
    /// values and anything outside the i64 range yield `None`.
    pub fn to_integer(&self) -> Option<i64> {
        match self {
            CellValue::Number(n) => integral_value(*n),
            CellValue::Text(s) => {
                let trimmed = s.trim();
                if trimmed.is_empty() {
                    return None;
                }
                if let Ok(int_val) = trimmed.parse::<i64>() {
                    return Some(int_val);
                }
                // Try parsing as float and converting to int
                trimmed.parse::<f64>().ok().and_then(integral_value)
            }
            CellValue::Blank => None,
        }
    }

    /// True for blank cells and text made only of whitespace
    pub fn is_blank(&self) -> bool {
        match self {
            CellValue::Blank => true,
            CellValue::Text(s) => s.trim().is_empty(),
            CellValue::Number(_) => false,
        }
    }
}

/// The integer a float holds exactly, if any
fn integral_value(f: f64) -> Option<i64> {
    // i64::MAX as f64 rounds up to 2^63, which is already out of range
    if f.is_finite() && f.fract() == 0.0 && f >= i64::MIN as f64 && f < i64::MAX as f64 {
        Some(f as i64)
    } else {
        None
    }
}

impl From<&Data> for CellValue {
    fn from(cell: &Data) -> Self {
        match cell {
            Data::Empty => CellValue::Blank,
            Data::String(s) => CellValue::Text(s.clone()),
            Data::Float(f) => CellValue::Number(*f),
            Data::Int(i) => CellValue::Number(*i as f64),
            Data::Bool(b) => CellValue::Text(b.to_string()),
            Data::Error(_) => CellValue::Blank,
            Data::DateTime(dt) => match excel_serial_to_datetime(dt.as_f64()) {
                Some(datetime) => CellValue::Text(datetime.to_string()),
                None => CellValue::Text(dt.as_f64().to_string()),
            },
            Data::DateTimeIso(dt_str) => CellValue::Text(dt_str.clone()),
            Data::DurationIso(dur_str) => CellValue::Text(dur_str.clone()),
        }
    }
}

impl From<&str> for CellValue {
    fn from(value: &str) -> Self {
        CellValue::Text(value.to_string())
    }
}

impl From<f64> for CellValue {
    fn from(value: f64) -> Self {
        CellValue::Number(value)
    }
}

impl From<i64> for CellValue {
    fn from(value: i64) -> Self {
        CellValue::Number(value as f64)
    }
}

/// Renders the raw value for error messages: quoted text, the number, or `blank`
impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::Text(s) => write!(f, "\"{}\"", s),
            CellValue::Number(_) => write!(f, "{}", self.to_trimmed_string()),
            CellValue::Blank => write!(f, "blank"),
        }
    }
}
