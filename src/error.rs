//! Error types for trueno-raster operations.

use std::io;
use thiserror::Error;

/// Result type alias using [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in trueno-raster operations.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error (file operations, etc.).
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// PNG encoding error.
    #[error("PNG encoding error: {0}")]
    PngEncoding(#[from] png::EncodingError),

    /// Invalid dimensions for a framebuffer or viewport.
    #[error("Invalid dimensions: {width}x{height}")]
    InvalidDimensions {
        /// Width value.
        width: u32,
        /// Height value.
        height: u32,
    },

    /// Vertex data and color data disagree on the number of vertices.
    #[error("Data length mismatch: expected {expected} values, got {actual}")]
    DataLengthMismatch {
        /// Number of values implied by the vertex data.
        expected: usize,
        /// Number of values supplied.
        actual: usize,
    },

    /// Matrix has no inverse (determinant is zero or numerically negligible).
    #[error("Singular matrix: determinant {determinant}")]
    SingularMatrix {
        /// Determinant that failed the singularity test.
        determinant: f32,
    },

    /// Camera basis could not be built (up parallel to view direction, eye on target).
    #[error("Degenerate camera basis: {0}")]
    DegenerateBasis(String),

    /// Projection parameters do not describe a valid view volume.
    #[error("Invalid projection: {0}")]
    InvalidProjection(String),

    /// Scene name not recognized.
    #[error("Unknown scene: {0}")]
    UnknownScene(String),

    /// Configuration file not found.
    #[error("Config file not found: {0}")]
    ConfigNotFound(String),

    /// Configuration parse error.
    #[error("Config parse error at line {line}: {message}")]
    ConfigParse {
        /// Line number where the error occurred.
        line: usize,
        /// Error message.
        message: String,
    },

    /// Invalid command-line or API argument.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::InvalidDimensions {
            width: 0,
            height: 100,
        };
        assert!(err.to_string().contains("Invalid dimensions"));
    }

    #[test]
    fn test_data_length_mismatch() {
        let err = Error::DataLengthMismatch {
            expected: 9,
            actual: 6,
        };
        assert!(err.to_string().contains('9'));
        assert!(err.to_string().contains('6'));
    }

    #[test]
    fn test_singular_matrix_reports_determinant() {
        let err = Error::SingularMatrix { determinant: 0.0 };
        assert!(err.to_string().contains("Singular matrix"));
    }

    #[test]
    fn test_config_parse_line() {
        let err = Error::ConfigParse {
            line: 42,
            message: "bad".to_string(),
        };
        assert!(err.to_string().contains("42"));
    }
}
