//! Error types shared by the screwdriver helpers

use thiserror::Error;

/// Errors that can occur in the helpers
#[derive(Error, Debug)]
pub enum Error {
    #[error("Input encoding error: {0}")]
    InputEncoding(#[from] std::str::Utf8Error),

    #[error("Invalid dotted path: `{path}`")]
    InvalidPath { path: String },

    #[error("Nothing registered at `{path}`")]
    NotFound { path: String },

    #[error("Missing key: {key}")]
    MissingKey { key: String },

    #[error("Expected a JSON object, found {found}")]
    NotAnObject { found: String },

    #[error("Row {row} has {found} columns, expected at least {expected}")]
    RaggedMatrix {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for screwdriver operations
pub type Result<T> = std::result::Result<T, Error>;
