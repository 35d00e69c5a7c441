//! Error types for ffgraph.
//!
//! Rendering a graph never fails: every well-typed description produces a
//! string. Errors only come from the document layer, when descriptions are
//! read from or written to JSON and TOML files.

use std::path::PathBuf;
use thiserror::Error;

/// Top-level error type for ffgraph.
#[derive(Error, Debug)]
pub enum FilterGraphError {
    /// Reading or writing a description file failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A JSON document could not be parsed or produced.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// A TOML document could not be parsed.
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    /// A TOML document could not be produced.
    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    /// The file extension does not name a supported document format.
    #[error("Unsupported document format: {path} (expected .json or .toml)")]
    UnsupportedFormat {
        /// Offending path
        path: PathBuf,
    },

    /// The document declares no chains.
    #[error("Filter graph is empty")]
    EmptyGraph,
}

impl FilterGraphError {
    /// Get suggestion for fixing this error.
    pub fn suggested_fix(&self) -> Option<String> {
        match self {
            FilterGraphError::UnsupportedFormat { path } => Some(format!(
                "Rename '{}' with a .json or .toml extension",
                path.display()
            )),
            FilterGraphError::EmptyGraph => {
                Some("Add at least one entry to the 'chains' list".to_string())
            }
            _ => None,
        }
    }
}

/// Result type alias for ffgraph operations.
pub type FilterGraphResult<T> = Result<T, FilterGraphError>;
