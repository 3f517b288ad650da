//! Diagnostic records.

use std::fmt;

use objalg_eval::{EvalError, Value};

/// One operand as seen by a diagnostic: its text and its value.
///
/// `value` is `None` when the operand was not evaluated, e.g. because
/// the other operand failed first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Operand {
    pub text: String,
    pub value: Option<Result<Value, EvalError>>,
}

impl fmt::Display for Operand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.value {
            Some(Ok(value)) => write!(f, "{} => {}", self.text, value),
            Some(Err(e)) => write!(f, "{} => <{}>", self.text, e),
            None => write!(f, "{} => <not evaluated>", self.text),
        }
    }
}

/// A report about the operands of one evaluated operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub operation: &'static str,
    pub lhs: Operand,
    pub rhs: Operand,
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}, {}", self.operation, self.lhs, self.rhs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let diagnostic = Diagnostic {
            operation: "add",
            lhs: Operand {
                text: "x".into(),
                value: Some(Err(EvalError::UndefinedVariable("x".into()))),
            },
            rhs: Operand {
                text: "1".into(),
                value: None,
            },
        };
        assert_eq!(
            diagnostic.to_string(),
            "add: x => <undefined variable `x`>, 1 => <not evaluated>"
        );
    }

    #[test]
    fn test_display_values() {
        let operand = Operand {
            text: "2 + 3".into(),
            value: Some(Ok(Value::Int(5))),
        };
        assert_eq!(operand.to_string(), "2 + 3 => 5");
    }
}
