//! Error types for the guidetab library.

use std::io;
use thiserror::Error;

/// Result type alias for guidetab operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while acquiring text or writing output.
///
/// Segmentation and extraction themselves are total: once document text is
/// in hand they always produce a (possibly empty) result. Only acquisition
/// and the output sinks can fail.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error when reading the source text or writing output files.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The source bytes are not valid UTF-8 text.
    #[error("Encoding error: {0}")]
    Encoding(String),

    /// Error serializing records to CSV.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Error during rendering (JSON, summary).
    #[error("Rendering error: {0}")]
    Render(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::Encoding("invalid utf-8 sequence".to_string());
        assert_eq!(err.to_string(), "Encoding error: invalid utf-8 sequence");

        let err = Error::Render("bad value".to_string());
        assert_eq!(err.to_string(), "Rendering error: bad value");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
        let err: Error = io_err.into();
        assert!(matches!(err, Error::Io(_)));
    }
}
