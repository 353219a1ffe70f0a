//! File store for uploaded news images.
//!
//! Accepted bytes land in the configured upload directory under a generated
//! `{uuid}.{ext}` name; the news row stores only the filename, and
//! `tower-http`'s `ServeDir` serves the bytes back under `/uploads/`.
//! Replacing an image leaves the old file on disk.

use std::path::Path;

use newswire_core::upload::validate_image;
use uuid::Uuid;

use crate::error::AppError;

/// Validate and persist an uploaded image, returning the stored filename.
pub async fn store_image(
    upload_dir: &Path,
    content_type: &str,
    bytes: &[u8],
) -> Result<String, AppError> {
    let ext = validate_image(content_type, bytes.len()).map_err(AppError::Core)?;
    let filename = format!("{}.{ext}", Uuid::new_v4());

    tokio::fs::create_dir_all(upload_dir)
        .await
        .map_err(|e| AppError::InternalError(format!("Failed to create upload dir: {e}")))?;
    tokio::fs::write(upload_dir.join(&filename), bytes)
        .await
        .map_err(|e| AppError::InternalError(format!("Failed to store upload: {e}")))?;

    tracing::debug!(%filename, size = bytes.len(), "Stored uploaded image");
    Ok(filename)
}
