// Test utilities available to both unit and integration tests
// Only compiled when testing

use crate::cell::CellValue;
use crate::columns::{ColumnMap, RequiredField};
use crate::grid::Grid;
use crate::record::RoadRecord;

/// Header row with the three required columns in their usual order
#[allow(dead_code)]
pub fn standard_header() -> Vec<CellValue> {
    RequiredField::ALL
        .iter()
        .map(|field| CellValue::from(field.name()))
        .collect()
}

/// Column map for `standard_header`
#[allow(dead_code)]
pub fn standard_columns() -> ColumnMap {
    ColumnMap::resolve(&standard_header()).unwrap()
}

/// Data row laid out like `standard_header`
#[allow(dead_code)]
pub fn data_row(road_name: &str, pcivalue_2019: f64, pcivalue_2021: f64) -> Vec<CellValue> {
    vec![
        CellValue::from(road_name),
        CellValue::Number(pcivalue_2019),
        CellValue::Number(pcivalue_2021),
    ]
}

/// Grid made of `standard_header` followed by `rows`
#[allow(dead_code)]
pub fn road_grid(rows: Vec<Vec<CellValue>>) -> Grid {
    let mut all_rows = vec![standard_header()];
    all_rows.extend(rows);
    Grid::new(all_rows)
}

#[allow(dead_code)]
pub fn road_record(road_name: &str, pcivalue_2019: i64, pcivalue_2021: i64) -> RoadRecord {
    RoadRecord {
        road_name: road_name.to_string(),
        pcivalue_2019,
        pcivalue_2021,
    }
}
