//! Filename generation and manipulation.

use crate::error::{Error, Result};

/// Sanitize a part title into a single safe filename component.
///
/// Part titles come from the remote manifest and routinely contain path
/// separators and other characters that are illegal in filenames; those are
/// replaced rather than rejected.
pub fn sanitize_title(title: &str) -> Result<String> {
    // Reject path traversal attempts: a `..` path component. Dots inside a
    // name ("Re..Zero OP") are legal and kept as-is.
    if title.split(['/', '\\']).any(|component| component == "..") {
        return Err(Error::InvalidFilename(format!(
            "Path traversal detected: '{}'",
            title
        )));
    }

    // Reject null bytes
    if title.contains('\0') {
        return Err(Error::InvalidFilename(format!(
            "Null bytes not allowed: '{}'",
            title
        )));
    }

    // Sanitize problematic characters (replace with underscore)
    let sanitized: String = title
        .chars()
        .map(|c| match c {
            '/' | '\\' | ':' | '*' | '?' | '"' | '<' | '>' | '|' => '_',
            c if c.is_control() => '_',
            c => c,
        })
        .collect();

    // Reject empty or whitespace-only names
    if sanitized.trim().is_empty() {
        return Err(Error::InvalidFilename(
            "Title cannot be empty or whitespace-only".to_string(),
        ));
    }

    Ok(sanitized)
}
