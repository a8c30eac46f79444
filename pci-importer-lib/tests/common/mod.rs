use pci_importer_lib::CellValue;
use rust_xlsxwriter::Workbook;

// Re-export shared test utilities from src/test_utils.rs
// These are the core functions used by most tests
#[allow(unused_imports)]
pub use pci_importer_lib::test_utils::{
    data_row, road_grid, road_record, standard_columns, standard_header,
};

/// Write `rows` into the first worksheet of a fresh .xlsx and return its bytes.
/// Blank cells are simply not written.
#[allow(dead_code)]
pub fn xlsx_bytes(rows: &[Vec<CellValue>]) -> Vec<u8> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();

    for (row_index, row) in rows.iter().enumerate() {
        for (col_index, cell) in row.iter().enumerate() {
            let (r, c) = (row_index as u32, col_index as u16);
            match cell {
                CellValue::Text(s) => {
                    worksheet.write_string(r, c, s).unwrap();
                }
                CellValue::Number(n) => {
                    worksheet.write_number(r, c, *n).unwrap();
                }
                CellValue::Blank => {}
            }
        }
    }

    workbook.save_to_buffer().unwrap()
}

/// .xlsx bytes for the standard header followed by `rows`
#[allow(dead_code)]
pub fn road_xlsx_bytes(rows: Vec<Vec<CellValue>>) -> Vec<u8> {
    let mut all_rows = vec![standard_header()];
    all_rows.extend(rows);
    xlsx_bytes(&all_rows)
}

/// Header row from plain strings
#[allow(dead_code)]
pub fn header_row(names: &[&str]) -> Vec<CellValue> {
    names.iter().map(|name| CellValue::from(*name)).collect()
}
