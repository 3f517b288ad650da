//! The `Eval` capability.

use objalg_algebra::{Capability, Witness};
use thiserror::Error;

use crate::Value;

/// Evaluation errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EvalError {
    #[error("undefined variable `{0}`")]
    UndefinedVariable(String),

    #[error("type error: expected {expected}, found {found}")]
    TypeMismatch {
        expected: &'static str,
        found: &'static str,
    },

    #[error("integer overflow in {lhs} + {rhs}")]
    Overflow { lhs: i64, rhs: i64 },
}

/// Marker for the `Eval` capability.
#[derive(Debug, Clone, Copy)]
pub struct Evaluate;

impl Capability for Evaluate {
    const NAME: &'static str = "Eval";
    const METHOD: &'static str = "eval";
    type Output = Result<Value, EvalError>;
}

/// A node that can be evaluated.
pub type EvalNode = Witness<Evaluate>;

/// Produce a runtime value.
pub trait Eval {
    fn eval(&self) -> Result<Value, EvalError>;
}

impl Eval for Witness<Evaluate> {
    fn eval(&self) -> Result<Value, EvalError> {
        self.invoke()
    }
}
