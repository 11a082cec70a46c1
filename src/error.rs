//! Error types for algokit
//!
//! Every precondition failure is returned to the caller as an [`AlgoError`].
//! Nothing here is retried: the algorithms are pure, so the same input always
//! fails the same way.

mod macros;

use thiserror::Error;

/// Errors that can occur during algokit operations
#[derive(Error, Debug)]
pub enum AlgoError {
    // Input precondition errors
    #[error("{operation} requires a non-empty sequence")]
    EmptyInput { operation: String },

    #[error("sequence is not ordered: element at index {index} is larger than its successor")]
    UnorderedInput { index: usize },

    #[error("target {target} is unreachable from {start}")]
    UnreachableTarget { start: String, target: String },

    // Configuration and document errors
    #[error("invalid {context}: {value}")]
    InvalidValue { context: String, value: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("TOML serialization error: {0}")]
    TomlSer(#[from] toml::ser::Error),
}

impl AlgoError {
    /// Create an error for an operation that received no elements
    pub fn empty_input(operation: &str) -> Self {
        AlgoError::EmptyInput {
            operation: operation.to_string(),
        }
    }

    /// Create an error for a shortest-path target that was never reached
    pub fn unreachable(start: impl std::fmt::Display, target: impl std::fmt::Display) -> Self {
        AlgoError::UnreachableTarget {
            start: start.to_string(),
            target: target.to_string(),
        }
    }

    /// Create an error for an invalid value or configuration
    pub fn invalid_value(context: &str, value: impl std::fmt::Display) -> Self {
        AlgoError::InvalidValue {
            context: context.to_string(),
            value: value.to_string(),
        }
    }

    /// Get the error type identifier
    pub fn error_type(&self) -> &'static str {
        match self {
            AlgoError::EmptyInput { .. } => "empty_input",
            AlgoError::UnorderedInput { .. } => "unordered_input",
            AlgoError::UnreachableTarget { .. } => "unreachable_target",
            AlgoError::InvalidValue { .. } => "invalid_value",
            AlgoError::Io(_) => "io_error",
            AlgoError::Json(_) => "json_error",
            AlgoError::Toml(_) | AlgoError::TomlSer(_) => "toml_error",
        }
    }

    /// Whether the error reports a violated input precondition rather than
    /// a configuration or document problem
    pub fn is_precondition(&self) -> bool {
        matches!(
            self,
            AlgoError::EmptyInput { .. }
                | AlgoError::UnorderedInput { .. }
                | AlgoError::UnreachableTarget { .. }
        )
    }

    /// Convert error to JSON representation for structured error output.
    pub fn to_json(&self) -> serde_json::Value {
        let mut error_obj = serde_json::json!({
            "type": self.error_type(),
            "message": self.to_string(),
        });

        match self {
            AlgoError::UnorderedInput { index } => {
                error_obj["index"] = serde_json::json!(index);
            }
            AlgoError::UnreachableTarget { start, target } => {
                error_obj["start"] = serde_json::json!(start);
                error_obj["target"] = serde_json::json!(target);
            }
            _ => {}
        }

        serde_json::json!({ "error": error_obj })
    }
}

/// Result type alias for algokit operations
pub type Result<T> = std::result::Result<T, AlgoError>;
