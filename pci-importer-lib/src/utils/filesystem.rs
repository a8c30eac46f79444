use std::path::Path;

/// File extensions the decoder understands, lower-case and without the dot
pub const SPREADSHEET_EXTENSIONS: [&str; 5] = ["xlsx", "xlsm", "xlsb", "xls", "ods"];

/// Check the declared filename of an upload against the known spreadsheet extensions
///
/// Only the name is inspected; the content is never sniffed here.
pub fn has_spreadsheet_extension(filename: &str) -> bool {
    Path::new(filename)
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| {
            let ext = ext.to_ascii_lowercase();
            SPREADSHEET_EXTENSIONS.contains(&ext.as_str())
        })
        .unwrap_or(false)
}
