//! Error types for value operations.
//!
//! Almost every operation in this crate is total and reports failure through
//! fallback values (`None`, `false`, a zero value). The error type below exists
//! for the few operations with a real caller contract, `Value::set_path` and
//! the fallible constructors, where a typed error is the honest answer.

use thiserror::Error;

/// Result type alias for value operations
pub type ValueResult<T> = Result<T, ValueError>;

/// Errors raised by value operations with a caller contract
#[non_exhaustive]
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValueError {
    /// Type mismatch between expected and actual kinds
    #[error("type mismatch: expected {expected}, got {actual}")]
    TypeMismatch { expected: String, actual: String },

    /// Path did not resolve in a nested value
    #[error("path not found: {path}")]
    PathNotFound { path: String },

    /// Parse error for a specific format
    #[error("invalid {what}: {input}")]
    ParseError { what: String, input: String },

    /// Context information wrapped around another error
    #[error("{message}: {source}")]
    WithContext {
        message: String,
        #[source]
        source: Box<ValueError>,
    },
}

impl ValueError {
    /// Create a type mismatch error
    pub fn type_mismatch(expected: impl Into<String>, actual: impl Into<String>) -> Self {
        Self::TypeMismatch {
            expected: expected.into(),
            actual: actual.into(),
        }
    }

    /// Create a path not found error
    pub fn path_not_found(path: impl Into<String>) -> Self {
        Self::PathNotFound { path: path.into() }
    }

    /// Create a parse error
    pub fn parse_error(what: impl Into<String>, input: impl Into<String>) -> Self {
        Self::ParseError {
            what: what.into(),
            input: input.into(),
        }
    }

    /// Add context to an error
    pub fn with_context(self, message: impl Into<String>) -> Self {
        Self::WithContext {
            message: message.into(),
            source: Box::new(self),
        }
    }

    /// Add path context
    pub fn at_path(self, path: impl Into<String>) -> Self {
        self.with_context(format!("at path: {}", path.into()))
    }

    /// Get error code for monitoring
    pub fn code(&self) -> &'static str {
        match self {
            Self::TypeMismatch { .. } => "VALUE_TYPE_MISMATCH",
            Self::PathNotFound { .. } => "VALUE_PATH_NOT_FOUND",
            Self::ParseError { .. } => "VALUE_PARSE_ERROR",
            Self::WithContext { source, .. } => source.code(),
        }
    }
}

impl From<serde_json::Error> for ValueError {
    fn from(error: serde_json::Error) -> Self {
        Self::parse_error("JSON", error.to_string())
    }
}
