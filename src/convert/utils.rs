// src/convert/utils.rs

/// Replace every newline inside a field with a single space.
/// A CRLF pair counts as one newline, so it becomes one space.
pub fn flatten_newlines(raw: &str) -> String {
    if !raw.contains(['\r', '\n']) {
        return raw.to_string();
    }
    raw.replace("\r\n", " ").replace(['\r', '\n'], " ")
}
