use std::fmt;

use crate::cell::CellValue;
use crate::error::SchemaError;
use crate::utils::normalize_header;

/// The fixed columns every upload must carry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RequiredField {
    RoadName,
    PciValue2019,
    PciValue2021,
}

impl RequiredField {
    /// All required fields, in the order rows are checked and errors are reported
    pub const ALL: [RequiredField; 3] = [
        RequiredField::RoadName,
        RequiredField::PciValue2019,
        RequiredField::PciValue2021,
    ];

    /// Canonical (lower-case) column name
    pub fn name(&self) -> &'static str {
        match self {
            RequiredField::RoadName => "road_name",
            RequiredField::PciValue2019 => "pcivalue_2019",
            RequiredField::PciValue2021 => "pcivalue_2021",
        }
    }
}

impl fmt::Display for RequiredField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Zero-based column position of each required field within a row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnMap {
    road_name: usize,
    pcivalue_2019: usize,
    pcivalue_2021: usize,
}

impl ColumnMap {
    /// Resolve every required field against the header row.
    ///
    /// Header cells are compared after trimming and lower-casing; the first
    /// matching header wins. Fails with every unresolved field at once.
    pub fn resolve(header: &[CellValue]) -> Result<ColumnMap, SchemaError> {
        let normalized: Vec<String> = header
            .iter()
            .map(|cell| normalize_header(&cell.to_trimmed_string()))
            .collect();

        let position = |field: RequiredField| normalized.iter().position(|h| h == field.name());

        let mut missing = Vec::new();
        let mut indices = [0usize; 3];
        for (slot, field) in RequiredField::ALL.iter().enumerate() {
            match position(*field) {
                Some(index) => indices[slot] = index,
                None => missing.push(*field),
            }
        }

        if !missing.is_empty() {
            return Err(SchemaError { missing });
        }

        Ok(ColumnMap {
            road_name: indices[0],
            pcivalue_2019: indices[1],
            pcivalue_2021: indices[2],
        })
    }

    pub fn index_of(&self, field: RequiredField) -> usize {
        match field {
            RequiredField::RoadName => self.road_name,
            RequiredField::PciValue2019 => self.pcivalue_2019,
            RequiredField::PciValue2021 => self.pcivalue_2021,
        }
    }

    /// Cell of `field` in `row`; cells past the end of a short row read as blank
    pub fn cell<'a>(&self, row: &'a [CellValue], field: RequiredField) -> &'a CellValue {
        static BLANK: CellValue = CellValue::Blank;
        row.get(self.index_of(field)).unwrap_or(&BLANK)
    }
}
