//! Image upload validation: MIME allow-list and size cap.
//!
//! The actual byte storage lives in the api crate; this module only decides
//! whether an upload is acceptable and which file extension to store it
//! under, so the rules are testable without a running server.

use crate::error::CoreError;

/// MIME types accepted for news images, paired with the stored extension.
pub const ALLOWED_IMAGE_TYPES: &[(&str, &str)] = &[
    ("image/jpeg", "jpg"),
    ("image/png", "png"),
    ("image/gif", "gif"),
    ("image/webp", "webp"),
];

/// Maximum accepted upload size in bytes (5 MiB).
pub const MAX_UPLOAD_BYTES: usize = 5 * 1024 * 1024;

/// Look up the storage extension for an allow-listed MIME type.
pub fn extension_for(content_type: &str) -> Option<&'static str> {
    ALLOWED_IMAGE_TYPES
        .iter()
        .find(|(mime, _)| *mime == content_type)
        .map(|(_, ext)| *ext)
}

/// Validate an uploaded image's declared MIME type and byte length.
///
/// Returns the storage extension on success.
pub fn validate_image(content_type: &str, len: usize) -> Result<&'static str, CoreError> {
    let ext = extension_for(content_type).ok_or_else(|| {
        CoreError::Validation(format!("Unsupported image type: {content_type}"))
    })?;
    if len > MAX_UPLOAD_BYTES {
        return Err(CoreError::Validation(format!(
            "Image exceeds maximum size of {MAX_UPLOAD_BYTES} bytes"
        )));
    }
    Ok(ext)
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[test]
    fn test_allowed_types_pass() {
        assert_eq!(validate_image("image/jpeg", 1024).unwrap(), "jpg");
        assert_eq!(validate_image("image/png", 1024).unwrap(), "png");
        assert_eq!(validate_image("image/gif", 1024).unwrap(), "gif");
        assert_eq!(validate_image("image/webp", 1024).unwrap(), "webp");
    }

    #[test]
    fn test_disallowed_type_rejected() {
        assert_matches!(
            validate_image("application/pdf", 10),
            Err(CoreError::Validation(_))
        );
        assert_matches!(
            validate_image("image/svg+xml", 10),
            Err(CoreError::Validation(_))
        );
    }

    #[test]
    fn test_size_cap() {
        assert!(validate_image("image/png", MAX_UPLOAD_BYTES).is_ok());
        assert_matches!(
            validate_image("image/png", MAX_UPLOAD_BYTES + 1),
            Err(CoreError::Validation(_))
        );
    }
}
