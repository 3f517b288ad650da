//! Algebra errors.

use thiserror::Error;

/// Errors raised while building with, or assembling, algebras.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AlgebraError {
    /// A constructor received an argument violating its precondition.
    #[error("invalid argument to `{operation}`: {reason}")]
    InvalidArgument {
        operation: &'static str,
        reason: String,
    },

    /// Two algebras with different result interfaces were united.
    #[error(
        "cannot unite `{left}` (results: {left_kind}) with `{right}` (results: {right_kind})"
    )]
    MismatchedCapabilities {
        left: &'static str,
        left_kind: String,
        right: &'static str,
        right_kind: String,
    },
}

/// Coarse classification of an [`AlgebraError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Bad data passed to a constructor.
    InvalidArgument,
    /// Algebras assembled incorrectly; a programming error.
    Configuration,
}

impl AlgebraError {
    pub fn invalid_argument(operation: &'static str, reason: impl Into<String>) -> Self {
        AlgebraError::InvalidArgument {
            operation,
            reason: reason.into(),
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            AlgebraError::InvalidArgument { .. } => ErrorKind::InvalidArgument,
            AlgebraError::MismatchedCapabilities { .. } => ErrorKind::Configuration,
        }
    }
}
