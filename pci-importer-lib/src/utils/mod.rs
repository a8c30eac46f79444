mod datetime;
mod filesystem;
mod string;

pub use datetime::excel_serial_to_datetime;
pub use filesystem::{SPREADSHEET_EXTENSIONS, has_spreadsheet_extension};
pub use string::normalize_header;
