//! Product of two algebras.

use objalg_syntax::{Inspect, NodeKind, Sort};

use crate::{Algebra, AlgebraError, IntAlg, IntBoolAlg, ResultKind, StmtAlg};

/// The result of a [`Combine`]d construction: one result from each algebra.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pair<A, B> {
    pub a: A,
    pub b: B,
}

impl<A, B> Pair<A, B> {
    pub fn new(a: A, b: B) -> Self {
        Self { a, b }
    }

    pub fn into_parts(self) -> (A, B) {
        (self.a, self.b)
    }
}

impl<A: Inspect, B> Inspect for Pair<A, B> {
    fn kind(&self) -> NodeKind {
        self.a.kind()
    }

    fn sort(&self) -> Sort {
        self.a.sort()
    }
}

/// Runs every construction through two algebras at once.
///
/// Operands are pairs; each half goes to its own algebra and the two
/// outcomes are paired again. Building one tree with a `Combine` of an
/// evaluator and a printer gives a result that can be both evaluated
/// and shown.
#[derive(Debug, Clone, Default)]
pub struct Combine<A1, A2> {
    alg1: A1,
    alg2: A2,
}

impl<A1, A2> Combine<A1, A2> {
    pub fn new(alg1: A1, alg2: A2) -> Self {
        Self { alg1, alg2 }
    }

    pub fn first(&self) -> &A1 {
        &self.alg1
    }

    pub fn second(&self) -> &A2 {
        &self.alg2
    }
}

impl<A1: Algebra, A2: Algebra> Algebra for Combine<A1, A2> {
    type Repr = Pair<A1::Repr, A2::Repr>;

    const NAME: &'static str = "Combine";

    fn result_kind(&self) -> ResultKind {
        ResultKind::of::<Self::Repr>(format!(
            "({}, {})",
            self.alg1.result_kind(),
            self.alg2.result_kind()
        ))
    }
}

impl<A1: IntAlg, A2: IntAlg> IntAlg for Combine<A1, A2> {
    fn literal(&self, x: i64) -> Self::Repr {
        Pair::new(self.alg1.literal(x), self.alg2.literal(x))
    }

    fn add(&self, lhs: Self::Repr, rhs: Self::Repr) -> Self::Repr {
        Pair::new(self.alg1.add(lhs.a, rhs.a), self.alg2.add(lhs.b, rhs.b))
    }
}

impl<A1: IntBoolAlg, A2: IntBoolAlg> IntBoolAlg for Combine<A1, A2> {
    fn boolean(&self, b: bool) -> Self::Repr {
        Pair::new(self.alg1.boolean(b), self.alg2.boolean(b))
    }

    fn iff(
        &self,
        pred: Self::Repr,
        then_branch: Self::Repr,
        else_branch: Self::Repr,
    ) -> Result<Self::Repr, AlgebraError> {
        let a = self.alg1.iff(pred.a, then_branch.a, else_branch.a)?;
        let b = self.alg2.iff(pred.b, then_branch.b, else_branch.b)?;
        Ok(Pair::new(a, b))
    }
}

impl<A1: StmtAlg, A2: StmtAlg> StmtAlg for Combine<A1, A2> {
    fn var(&self, name: &str) -> Self::Repr {
        Pair::new(self.alg1.var(name), self.alg2.var(name))
    }

    fn assign(&self, name: &str, value: Self::Repr) -> Self::Repr {
        Pair::new(
            self.alg1.assign(name, value.a),
            self.alg2.assign(name, value.b),
        )
    }

    fn expr_stmt(&self, inner: Self::Repr) -> Self::Repr {
        Pair::new(self.alg1.expr_stmt(inner.a), self.alg2.expr_stmt(inner.b))
    }

    fn block(&self, items: Vec<Self::Repr>) -> Self::Repr {
        let (left, right): (Vec<_>, Vec<_>) = items.into_iter().map(Pair::into_parts).unzip();
        Pair::new(self.alg1.block(left), self.alg2.block(right))
    }
}
