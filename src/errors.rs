//! Error types for opsboard
//!
//! Each error type has a corresponding error code for programmatic handling.

use thiserror::Error;

/// Result type alias for opsboard operations
pub type Result<T> = std::result::Result<T, OpsboardError>;

/// Main error type for all opsboard operations
#[derive(Debug, Error)]
pub enum OpsboardError {
    /// Invalid JSON format
    #[error("Invalid JSON: {0}")]
    InvalidJson(String),

    /// Schema validation failed
    #[error("Schema validation failed: {0}")]
    SchemaValidation(String),

    /// File not found
    #[error("File not found: {0}")]
    FileNotFound(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// No adapter is registered under the given context tag
    #[error("Unknown field context: {0}")]
    UnknownContext(String),

    /// A field type the context's builder does not offer
    #[error("Field type {field_type} is not allowed in context {context}")]
    FieldTypeNotAllowed { context: String, field_type: String },

    /// Stage transition refused
    #[error("State transition error: {0}")]
    StateTransition(String),

    /// Required custom fields missing or malformed
    #[error("Validation failed: {}", .0.join("; "))]
    Validation(Vec<String>),

    /// Bulk move not possible for the target stage
    #[error("Bulk transition not allowed: {0}")]
    BulkIneligible(String),

    /// IO error wrapper
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error with context
    #[error("{context}: {message}")]
    Wrapped { context: String, message: String },
}

impl OpsboardError {
    /// Get the error code for this error type
    pub fn code(&self) -> &'static str {
        match self {
            OpsboardError::InvalidJson(_) => "INVALID_JSON",
            OpsboardError::SchemaValidation(_) => "SCHEMA_VALIDATION",
            OpsboardError::FileNotFound(_) => "FILE_NOT_FOUND",
            OpsboardError::ConfigError(_) => "CONFIG_ERROR",
            OpsboardError::UnknownContext(_) => "UNKNOWN_CONTEXT",
            OpsboardError::FieldTypeNotAllowed { .. } => "FIELD_TYPE_NOT_ALLOWED",
            OpsboardError::StateTransition(_) => "STATE_TRANSITION",
            OpsboardError::Validation(_) => "VALIDATION",
            OpsboardError::BulkIneligible(_) => "BULK_INELIGIBLE",
            OpsboardError::Io(_) => "IO_ERROR",
            OpsboardError::Wrapped { .. } => "WRAPPED_ERROR",
        }
    }

    /// Wrap an error with additional context
    pub fn wrap<E: std::fmt::Display>(error: E, context: impl Into<String>) -> Self {
        OpsboardError::Wrapped {
            context: context.into(),
            message: error.to_string(),
        }
    }
}

/// Convert an error to an appropriate exit code
pub fn to_exit_code(error: &OpsboardError) -> i32 {
    match error {
        OpsboardError::Validation(_) | OpsboardError::BulkIneligible(_) => 2,
        _ => 1,
    }
}
