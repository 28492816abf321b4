use thiserror::Error;

/// A field path that could not be compiled.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid field path '{expression}' at position {position}: {message}")]
pub struct PathSyntaxError {
    pub expression: String,
    pub position: usize,
    pub message: String,
}

impl PathSyntaxError {
    pub(crate) fn new(expression: &str, position: usize, message: impl Into<String>) -> Self {
        Self {
            expression: expression.to_string(),
            position,
            message: message.into(),
        }
    }
}

/// Failure to pull a typed scalar out of a decoded record.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExtractError {
    #[error("path {path} not found")]
    PathNotFound { path: String },

    #[error("value at {path} is {found}, expected {expected}")]
    TypeMismatch {
        path: String,
        expected: &'static str,
        found: String,
    },
}

impl ExtractError {
    pub(crate) fn not_found(path: &str) -> Self {
        Self::PathNotFound {
            path: path.to_string(),
        }
    }

    pub(crate) fn mismatch(path: &str, expected: &'static str, found: impl Into<String>) -> Self {
        Self::TypeMismatch {
            path: path.to_string(),
            expected,
            found: found.into(),
        }
    }
}
