//! Error types for the geometry codec

use thiserror::Error;

/// Result type for codec operations
pub type Result<T> = std::result::Result<T, GeometryError>;

/// Geometry codec errors
#[derive(Error, Debug)]
pub enum GeometryError {
    #[error("no schema loaded: cannot validate document")]
    SchemaUnavailable,

    #[error("schema validation failed: {0}")]
    Validation(String),

    #[error("malformed {tag} record: {reason}")]
    MalformedRecord { tag: String, reason: String },

    #[error("expected a top-level JSON array of geometry records")]
    NotAnArray,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
