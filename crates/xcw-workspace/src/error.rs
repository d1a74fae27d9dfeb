// error.rs — Error types for the workspace model and its XML codec.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while building, reading or writing a workspace.
#[derive(Debug, Error)]
pub enum WorkspaceError {
    /// A location type outside the fixed enumeration was assigned.
    #[error("invalid location type '{value}' (expected one of: absolute, group, developer, container, self)")]
    InvalidArgument { value: String },

    /// A file I/O operation failed.
    #[error("I/O error at {path}: {source}")]
    IoError {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The document is not well-formed XML.
    #[error("XML error: {0}")]
    Xml(String),

    /// Well-formed XML that is not a workspace document.
    #[error("malformed workspace document: {reason}")]
    MalformedDocument { reason: String },

    /// The TOML configuration could not be parsed.
    #[error("config error: {0}")]
    Config(String),
}

impl WorkspaceError {
    pub(crate) fn xml(err: impl std::fmt::Display) -> Self {
        Self::Xml(err.to_string())
    }
}
