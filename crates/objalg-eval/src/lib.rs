//! Evaluating algebras.
//!
//! Every algebra in this crate returns witnesses of the [`Eval`]
//! capability: nodes that compute their [`Value`] when asked.

mod eval;
mod int;
mod stmt;
mod store;
pub mod value;

pub use eval::{Eval, EvalError, EvalNode, Evaluate};
pub use int::{IntBoolEval, IntEval};
pub use stmt::StmtEval;
pub use store::Store;
pub use value::Value;
