//! Error types for viewgizmo-rs.

use thiserror::Error;

/// The main error type for viewgizmo-rs operations.
///
/// Only the configuration surface can fail; per-frame manipulation never does.
#[derive(Error, Debug)]
pub enum ViewGizmoError {
    /// A style field is outside its valid range.
    #[error("invalid style: {0}")]
    InvalidStyle(String),

    /// JSON serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// A specialized Result type for viewgizmo-rs operations.
pub type Result<T> = std::result::Result<T, ViewGizmoError>;
