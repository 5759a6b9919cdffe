//! Validation of justification file attachments.

use crate::domain::AttachmentError;

/// File extensions accepted for a justification upload.
const SUPPORTED_EXTENSIONS: [&str; 3] = ["jpg", "jpeg", "png"];

/// Whether the file name carries a supported image extension.
pub fn is_supported_justification(file_name: &str) -> bool {
    let Some((_, extension)) = file_name.rsplit_once('.') else {
        return false;
    };
    let extension = extension.to_lowercase();
    SUPPORTED_EXTENSIONS.contains(&extension.as_str())
}

/// Validate a justification file name, rejecting non-image attachments.
pub fn validate_justification(file_name: &str) -> Result<(), AttachmentError> {
    if is_supported_justification(file_name) {
        Ok(())
    } else {
        Err(AttachmentError::UnsupportedExtension {
            file_name: file_name.to_string(),
        })
    }
}
