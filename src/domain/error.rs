//! Domain error types for the Billed application.
//!
//! These errors represent domain-level failures that can occur during
//! business operations. They are more specific than infrastructure errors
//! and can be handled appropriately at the application layer.

use thiserror::Error;

/// Domain errors related to bill operations.
#[derive(Debug, Error)]
pub enum BillError {
    #[error("Bill not found: {0}")]
    NotFound(String),

    #[error("Bill operation failed: {0}")]
    OperationFailed(#[from] anyhow::Error),
}

/// Domain errors related to date display formatting.
#[derive(Debug, Error)]
pub enum FormatError {
    #[error("Unparseable date: {0}")]
    Unparseable(String),
}

/// Domain errors related to justification attachments.
#[derive(Debug, Error)]
pub enum AttachmentError {
    #[error("Unsupported justification file type: {file_name} (expected jpg, jpeg or png)")]
    UnsupportedExtension { file_name: String },
}

/// Unified domain error type for application-level error handling.
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Bill error: {0}")]
    Bill(#[from] BillError),

    #[error("Format error: {0}")]
    Format(#[from] FormatError),

    #[error("Attachment error: {0}")]
    Attachment(#[from] AttachmentError),
}
