//! Error types for resume-layout.

use std::io;
use thiserror::Error;

/// Result type alias for resume-layout operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur during layout and export.
#[derive(Error, Debug)]
pub enum Error {
    /// The page geometry cannot hold even a single line of content.
    #[error("Invalid page configuration: {0}")]
    Configuration(String),

    /// I/O error when reading or writing files.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The resume JSON could not be read or the pages could not be serialized.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Error while assembling the PDF object tree.
    #[error("PDF writing error: {0}")]
    Pdf(String),

    /// Error during rendering (text, HTML).
    #[error("Rendering error: {0}")]
    Render(String),

    /// No exporter is registered for the requested output.
    #[error("Unsupported output format: {0}")]
    UnsupportedFormat(String),

    /// Generic error with message.
    #[error("{0}")]
    Other(String),
}

impl From<lopdf::Error> for Error {
    fn from(err: lopdf::Error) -> Self {
        match err {
            lopdf::Error::IO(e) => Error::Io(e),
            _ => Error::Pdf(err.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::Configuration("usable height 3 is below line height 7".to_string());
        assert_eq!(
            err.to_string(),
            "Invalid page configuration: usable height 3 is below line height 7"
        );

        let err = Error::UnsupportedFormat("docx".to_string());
        assert_eq!(err.to_string(), "Unsupported output format: docx");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
        let err: Error = io_err.into();
        assert!(matches!(err, Error::Io(_)));
    }

    #[test]
    fn test_json_error_conversion() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: Error = json_err.into();
        assert!(matches!(err, Error::Json(_)));
    }
}
