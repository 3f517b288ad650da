//! Node shapes for object algebras.
//! 对象代数的节点形状。
//!
//! This crate defines the data side of every algebra result: the shape
//! of each node kind, a borrowed view that lets any result be inspected
//! as its node kind, and the plain `Expr` tree built by the factory.
//! 本 crate 定义代数结果的数据部分。

mod expr;
mod node;
mod sort;

pub use expr::Expr;
pub use node::{Add, Assign, Block, Boolean, ExprStmt, If, Literal, NodeKind, NodeRef, Shape, Var};
pub use sort::{Inspect, Sort};
