/// Normalize a header cell for column matching.
/// Surrounding whitespace (including newlines and tabs left over from wrapped
/// header cells) is removed and the text is lower-cased; inner text is kept as-is.
pub fn normalize_header(value: &str) -> String {
    return value.trim().to_lowercase();
}
