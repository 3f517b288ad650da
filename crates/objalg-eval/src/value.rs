//! Runtime values.

use std::fmt;

use crate::EvalError;

/// A runtime value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Value {
    /// Integer value
    Int(i64),
    /// Boolean value
    Bool(bool),
    /// No value: the result of an assignment or an empty block
    Unit,
}

impl Value {
    /// Try to get as integer.
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Value::Int(n) => Some(*n),
            _ => None,
        }
    }

    /// Try to get as bool.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Int(_) => "int",
            Value::Bool(_) => "bool",
            Value::Unit => "unit",
        }
    }

    /// The integer inside, or a type error.
    pub fn to_int(self) -> Result<i64, EvalError> {
        self.as_int().ok_or(EvalError::TypeMismatch {
            expected: "int",
            found: self.type_name(),
        })
    }

    /// The boolean inside, or a type error.
    pub fn to_bool(self) -> Result<bool, EvalError> {
        self.as_bool().ok_or(EvalError::TypeMismatch {
            expected: "bool",
            found: self.type_name(),
        })
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Int(n) => write!(f, "{}", n),
            Value::Bool(true) => write!(f, "True"),
            Value::Bool(false) => write!(f, "False"),
            Value::Unit => write!(f, "()"),
        }
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Int(n)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}
