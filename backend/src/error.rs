//! Error types for the configuration and parsing boundary.
//!
//! The visual-encoding pipeline itself never fails: empty datasets, zero
//! totals and absent cells all resolve to defined fallback values. Errors
//! only arise when loading chart configuration or decoding snapshot payloads.

/// Result type for boundary operations.
pub type ChartResult<T> = Result<T, ChartError>;

/// Error type for configuration loading and snapshot parsing.
#[derive(Debug, thiserror::Error)]
pub enum ChartError {
    /// Configuration file could not be read, parsed, or holds invalid values.
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Snapshot payload could not be decoded.
    #[error("Parse error at '{path}': {message}")]
    Parse { path: String, message: String },
}

impl ChartError {
    /// Create a configuration error.
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration(message.into())
    }

    /// Create a parse error tagged with the JSON path of the failing field.
    pub fn parse(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Parse {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Check if this is a configuration error.
    pub fn is_configuration(&self) -> bool {
        matches!(self, Self::Configuration(_))
    }

    /// Check if this is a parse error.
    pub fn is_parse(&self) -> bool {
        matches!(self, Self::Parse { .. })
    }
}

impl From<serde_path_to_error::Error<serde_json::Error>> for ChartError {
    fn from(err: serde_path_to_error::Error<serde_json::Error>) -> Self {
        let path = err.path().to_string();
        ChartError::parse(path, err.into_inner().to_string())
    }
}
