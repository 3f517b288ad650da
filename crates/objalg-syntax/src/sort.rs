//! Static sorts of nodes.

use std::fmt;

use crate::{NodeKind, NodeRef};

/// The kind of value a node produces, as far as its shape tells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Sort {
    Int,
    Bool,
    Unit,
    /// Only known once evaluated, e.g. a variable reference.
    Dynamic,
}

impl Sort {
    /// The sort of a node that may produce either `self` or `other`.
    pub fn join(self, other: Sort) -> Sort {
        if self == other { self } else { Sort::Dynamic }
    }

    /// Whether a node of this sort may produce a boolean.
    pub fn admits_bool(self) -> bool {
        matches!(self, Sort::Bool | Sort::Dynamic)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Sort::Int => "int",
            Sort::Bool => "bool",
            Sort::Unit => "unit",
            Sort::Dynamic => "dynamic",
        }
    }
}

impl fmt::Display for Sort {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Implemented by every algebra result that has a node shape behind it.
pub trait Inspect {
    fn kind(&self) -> NodeKind;

    fn sort(&self) -> Sort;
}

impl<R: Inspect> NodeRef<'_, R> {
    /// Compute the sort of this node from its shape and its children.
    pub fn sort(&self) -> Sort {
        match *self {
            NodeRef::Literal(_) | NodeRef::Add(_) => Sort::Int,
            NodeRef::Boolean(_) => Sort::Bool,
            NodeRef::If(iff) => iff.then_branch.sort().join(iff.else_branch.sort()),
            NodeRef::Var(_) => Sort::Dynamic,
            NodeRef::Assign(_) => Sort::Unit,
            NodeRef::ExprStmt(stmt) => stmt.inner.sort(),
            NodeRef::Block(block) => block.items.last().map_or(Sort::Unit, Inspect::sort),
        }
    }
}

impl<T: Inspect + ?Sized> Inspect for Box<T> {
    fn kind(&self) -> NodeKind {
        (**self).kind()
    }

    fn sort(&self) -> Sort {
        (**self).sort()
    }
}
