//! Error types for flip_text_art.
//!
//! Flipping itself never fails; errors only come from loading external
//! resources (custom mirror tables, glyph metrics).

use std::fmt;
use std::io;

/// Result type alias for flip_text_art operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for flip_text_art operations.
#[derive(Debug)]
pub enum Error {
    /// I/O error while reading a table or metrics file.
    Io(io::Error),
    /// Malformed JSON in a mirror table or metrics file.
    Json(serde_json::Error),
    /// A glyph metrics entry with a negative or non-finite width.
    InvalidWidth { grapheme: String, width: f64 },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::Json(e) => write!(f, "invalid JSON: {e}"),
            Self::InvalidWidth { grapheme, width } => {
                write!(f, "invalid width {width} for grapheme {grapheme:?}")
            }
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::Json(e) => Some(e),
            Self::InvalidWidth { .. } => None,
        }
    }
}

impl From<io::Error> for Error {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Self::Json(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::InvalidWidth {
            grapheme: "x".to_string(),
            width: -1.0,
        };
        assert!(err.to_string().contains("invalid width -1"));
        assert!(err.to_string().contains("\"x\""));

        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: Error = json_err.into();
        assert!(err.to_string().starts_with("invalid JSON"));
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "test");
        let err: Error = io_err.into();
        assert!(matches!(err, Error::Io(_)));
        assert!(std::error::Error::source(&err).is_some());
    }
}
