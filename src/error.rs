//! Error types for grid access and pattern I/O

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised by the grid and its pattern files
#[derive(Debug, Error)]
pub enum GridError {
    #[error("coordinates ({row}, {col}) out of bounds for {height}x{width} grid")]
    OutOfBounds {
        row: isize,
        col: isize,
        height: usize,
        width: usize,
    },

    #[error("failed to open {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed pattern{}: {message}", .path.as_ref().map(|p| format!(" in {}", p.display())).unwrap_or_default())]
    Parse {
        path: Option<PathBuf>,
        message: String,
    },

    #[error("grid {height}x{width} is too large")]
    TooLarge { height: usize, width: usize },

    #[error("unknown preset '{0}' (expected glider, toad, beacon or r-pentomino)")]
    UnknownPreset(String),
}

impl GridError {
    pub(crate) fn parse(message: impl Into<String>) -> Self {
        GridError::Parse {
            path: None,
            message: message.into(),
        }
    }

    /// Attach the source file to a parse error
    pub(crate) fn with_path(self, file: impl Into<PathBuf>) -> Self {
        match self {
            GridError::Parse { message, .. } => GridError::Parse {
                path: Some(file.into()),
                message,
            },
            other => other,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_out_of_bounds_message() {
        let err = GridError::OutOfBounds { row: -1, col: 0, height: 3, width: 4 };
        assert_eq!(err.to_string(), "coordinates (-1, 0) out of bounds for 3x4 grid");
    }

    #[test]
    fn test_parse_error_path() {
        let err = GridError::parse("missing header");
        assert_eq!(err.to_string(), "malformed pattern: missing header");

        let err = err.with_path("start_pattern.txt");
        assert_eq!(err.to_string(), "malformed pattern in start_pattern.txt: missing header");
    }
}
