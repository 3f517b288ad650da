//! Printing algebras.
//!
//! Every algebra in this crate returns witnesses of the [`Show`]
//! capability: nodes that render themselves as text. Nothing is
//! evaluated while printing.

mod config;
mod int;
mod show;
mod stmt;

pub use config::ShowConfig;
pub use int::{IntBoolShow, IntShow};
pub use show::{Print, Show, ShowNode};
pub use stmt::StmtShow;
