//! Error types for loading and rendering

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while turning listings into a page
#[derive(Debug, Error)]
pub enum RenderError {
    /// Reading an input or writing the output failed
    #[error("I/O error on '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Input text is not well-formed YAML
    #[error("Parse error in '{}': {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    /// Encoding list items for the copy controls failed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Markup serialization failed
    #[error("Serialization error: {0}")]
    Serialize(String),
}

impl RenderError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        RenderError::Io {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn parse(path: impl Into<PathBuf>, source: serde_yaml::Error) -> Self {
        RenderError::Parse {
            path: path.into(),
            source,
        }
    }
}
