//! The plain expression tree.
//! 普通表达式树。

use crate::{Add, Assign, Block, Boolean, ExprStmt, If, Inspect, Literal, NodeKind, NodeRef, Sort, Var};

/// A node with no interpretation attached.
/// 不附带任何解释的节点。
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expr {
    Literal(Literal),
    Add(Box<Add<Expr>>),
    Boolean(Boolean),
    If(Box<If<Expr>>),
    Var(Var),
    Assign(Box<Assign<Expr>>),
    ExprStmt(Box<ExprStmt<Expr>>),
    Block(Block<Expr>),
}

impl Expr {
    /// View this expression as its node kind.
    pub fn node(&self) -> NodeRef<'_, Expr> {
        match self {
            Expr::Literal(lit) => NodeRef::Literal(lit),
            Expr::Add(add) => NodeRef::Add(add),
            Expr::Boolean(b) => NodeRef::Boolean(b),
            Expr::If(iff) => NodeRef::If(iff),
            Expr::Var(var) => NodeRef::Var(var),
            Expr::Assign(assign) => NodeRef::Assign(assign),
            Expr::ExprStmt(stmt) => NodeRef::ExprStmt(stmt),
            Expr::Block(block) => NodeRef::Block(block),
        }
    }

    /// Number of nodes in this tree, including itself.
    pub fn size(&self) -> usize {
        1 + self.node().children().into_iter().map(Expr::size).sum::<usize>()
    }

    /// Length of the longest path from this node to a leaf.
    pub fn depth(&self) -> usize {
        1 + self
            .node()
            .children()
            .into_iter()
            .map(Expr::depth)
            .max()
            .unwrap_or(0)
    }
}

impl Inspect for Expr {
    fn kind(&self) -> NodeKind {
        self.node().kind()
    }

    fn sort(&self) -> Sort {
        self.node().sort()
    }
}
