//! Reads local files into inline email attachments.

use std::path::Path;
use tutoradmin_core::error::{AdminError, Result};
use tutoradmin_core::models::Attachment;

/// Infers the MIME type from a filename extension using the `mime_guess` library.
fn infer_content_type(path: &Path) -> String {
    mime_guess::from_path(path)
        .first_or_octet_stream()
        .to_string()
}

/// Loads `path` as an [`Attachment`], named after its final path component.
pub fn load_attachment(path: &Path) -> Result<Attachment> {
    let filename = path
        .file_name()
        .and_then(|name| name.to_str())
        .ok_or_else(|| AdminError::storage(format!("Invalid attachment path: {}", path.display())))?;
    let bytes = std::fs::read(path)?;

    tracing::debug!(
        "[Attachments] Loaded {} ({} bytes)",
        path.display(),
        bytes.len()
    );
    Ok(Attachment::from_bytes(
        filename,
        infer_content_type(path),
        &bytes,
    ))
}
