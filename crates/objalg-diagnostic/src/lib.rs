//! Diagnostic combinators.
//! 诊断组合子。
//!
//! [`Debug`] wraps an evaluator and a printer combined, and reports the
//! operands of every addition it evaluates.
//! [`Debug`] 包装组合后的求值器和打印器，并报告其求值的每个加法的操作数。

mod debug;
mod diagnostic;

pub use debug::Debug;
pub use diagnostic::{Diagnostic, Operand};
