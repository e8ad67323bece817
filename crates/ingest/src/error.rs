use thiserror::Error;

/// Failures while turning uploaded bytes into plain text.
///
/// `UnsupportedFormat` is a user mistake (wrong extension); `Parse` wraps
/// any failure inside a recognized container.
#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("Unsupported file type: {0}")]
    UnsupportedFormat(String),

    #[error("Error processing file: {0}")]
    Parse(String),
}
