//! Shared helpers for the HTTP tests

use axum::{
    Router,
    body::Body,
    http::{Request, header},
};
use pci_importer::{AppState, build_router, config::DEFAULT_MAX_UPLOAD_BYTES};
use pci_importer_lib::ValidationPolicy;
use rust_xlsxwriter::Workbook;
use serde_json::Value;

pub const BOUNDARY: &str = "pci-importer-test-boundary";

/// One spreadsheet cell for building fixtures
#[allow(dead_code)]
pub enum Cell {
    Text(&'static str),
    Number(f64),
    Empty,
}

#[allow(dead_code)]
pub fn setup_app() -> Router {
    setup_app_with(ValidationPolicy::Strict, DEFAULT_MAX_UPLOAD_BYTES)
}

#[allow(dead_code)]
pub fn setup_app_with(policy: ValidationPolicy, max_upload_bytes: usize) -> Router {
    build_router(AppState::new(policy, max_upload_bytes))
}

/// Build .xlsx bytes with `rows` in the first worksheet
#[allow(dead_code)]
pub fn xlsx_bytes(rows: &[Vec<Cell>]) -> Vec<u8> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();

    for (row_index, row) in rows.iter().enumerate() {
        for (col_index, cell) in row.iter().enumerate() {
            let (r, c) = (row_index as u32, col_index as u16);
            match cell {
                Cell::Text(s) => {
                    worksheet.write_string(r, c, *s).unwrap();
                }
                Cell::Number(n) => {
                    worksheet.write_number(r, c, *n).unwrap();
                }
                Cell::Empty => {}
            }
        }
    }

    workbook.save_to_buffer().unwrap()
}

#[allow(dead_code)]
pub fn standard_header() -> Vec<Cell> {
    vec![
        Cell::Text("road_name"),
        Cell::Text("pcivalue_2019"),
        Cell::Text("pcivalue_2021"),
    ]
}

/// Encode one file part as a multipart/form-data body
#[allow(dead_code)]
pub fn multipart_body(field_name: &str, filename: &str, content: &[u8]) -> Vec<u8> {
    let mut body = Vec::new();
    body.extend_from_slice(format!("--{}\r\n", BOUNDARY).as_bytes());
    body.extend_from_slice(
        format!(
            "Content-Disposition: form-data; name=\"{}\"; filename=\"{}\"\r\n",
            field_name, filename
        )
        .as_bytes(),
    );
    body.extend_from_slice(
        b"Content-Type: application/vnd.openxmlformats-officedocument.spreadsheetml.sheet\r\n\r\n",
    );
    body.extend_from_slice(content);
    body.extend_from_slice(format!("\r\n--{}--\r\n", BOUNDARY).as_bytes());
    body
}

/// POST /upload_excel/ with `content` uploaded under the `file` field
#[allow(dead_code)]
pub fn upload_request(filename: &str, content: &[u8]) -> Request<Body> {
    upload_request_with_field("file", filename, content)
}

#[allow(dead_code)]
pub fn upload_request_with_field(field_name: &str, filename: &str, content: &[u8]) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/upload_excel/")
        .header(
            header::CONTENT_TYPE,
            format!("multipart/form-data; boundary={}", BOUNDARY),
        )
        .body(Body::from(multipart_body(field_name, filename, content)))
        .unwrap()
}

/// Extract JSON body from response
#[allow(dead_code)]
pub async fn extract_json(body: Body) -> Value {
    let bytes = axum::body::to_bytes(body, usize::MAX)
        .await
        .expect("Should read body");
    serde_json::from_slice(&bytes).expect("Should parse JSON")
}
