//! Error type shared by grid construction, configuration and tile queries.

use std::fmt;

/// Errors reported by the terrain engine.
///
/// Out-of-range queries are reported here instead of panicking so the engine
/// can live inside a long-running service.
#[derive(Debug)]
pub enum TerrainError {
    /// Grid construction with a zero width or height
    InvalidDimensions { width: usize, height: usize },
    /// A coordinate outside the grid
    OutOfBounds { x: usize, y: usize, width: usize, height: usize },
    /// Nested rows whose lengths disagree
    RaggedRows { row: usize, expected: usize, found: usize },
    /// A configuration value outside its valid range
    InvalidConfig(String),
    /// IO error (config or export file)
    Io(std::io::Error),
    /// JSON (de)serialization error
    Json(serde_json::Error),
    /// PNG encoding error
    Image(image::ImageError),
}

impl fmt::Display for TerrainError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TerrainError::InvalidDimensions { width, height } => {
                write!(f, "invalid grid dimensions {}x{}: both must be positive", width, height)
            }
            TerrainError::OutOfBounds { x, y, width, height } => {
                write!(f, "cell ({}, {}) is outside the {}x{} grid", x, y, width, height)
            }
            TerrainError::RaggedRows { row, expected, found } => {
                write!(f, "row {} has {} cells, expected {}", row, found, expected)
            }
            TerrainError::InvalidConfig(msg) => write!(f, "invalid configuration: {}", msg),
            TerrainError::Io(e) => write!(f, "IO error: {}", e),
            TerrainError::Json(e) => write!(f, "JSON error: {}", e),
            TerrainError::Image(e) => write!(f, "image error: {}", e),
        }
    }
}

impl std::error::Error for TerrainError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            TerrainError::Io(e) => Some(e),
            TerrainError::Json(e) => Some(e),
            TerrainError::Image(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for TerrainError {
    fn from(e: std::io::Error) -> Self {
        TerrainError::Io(e)
    }
}

impl From<serde_json::Error> for TerrainError {
    fn from(e: serde_json::Error) -> Self {
        TerrainError::Json(e)
    }
}

impl From<image::ImageError> for TerrainError {
    fn from(e: image::ImageError) -> Self {
        TerrainError::Image(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_mentions_coordinates() {
        let err = TerrainError::OutOfBounds { x: 12, y: 3, width: 10, height: 10 };
        let msg = err.to_string();
        assert!(msg.contains("(12, 3)"));
        assert!(msg.contains("10x10"));
    }

    #[test]
    fn test_io_error_has_source() {
        let err: TerrainError = std::io::Error::new(std::io::ErrorKind::NotFound, "gone").into();
        assert!(std::error::Error::source(&err).is_some());
    }
}
