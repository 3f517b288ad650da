//! Union of two algebras over one result type.

use crate::{Algebra, AlgebraError, IntAlg, IntBoolAlg, ResultKind, StmtAlg};

/// One algebra offering the operations of two.
///
/// The left algebra supplies the expression operations ([`IntAlg`],
/// [`IntBoolAlg`]), the right one the statement operations
/// ([`StmtAlg`]). Expression operations of the right algebra are
/// shadowed by the left one's. Statement operations always come from
/// the right algebra, even when the left one has them too.
///
/// Both algebras must produce the same result type so that results of
/// one can be operands of the other; [`Union::new`] checks this.
#[derive(Debug, Clone)]
pub struct Union<L, R> {
    left: L,
    right: R,
}

impl<L: Algebra, R: Algebra> Union<L, R> {
    /// Unite two algebras. Fails if their result kinds differ.
    pub fn new(left: L, right: R) -> Result<Self, AlgebraError> {
        let left_kind = left.result_kind();
        let right_kind = right.result_kind();
        if left_kind != right_kind {
            return Err(AlgebraError::MismatchedCapabilities {
                left: L::NAME,
                left_kind: left_kind.name().to_string(),
                right: R::NAME,
                right_kind: right_kind.name().to_string(),
            });
        }
        Ok(Self { left, right })
    }
}

impl<L, R> Union<L, R> {
    pub fn left(&self) -> &L {
        &self.left
    }

    pub fn right(&self) -> &R {
        &self.right
    }
}

impl<L: Algebra, R> Algebra for Union<L, R> {
    type Repr = L::Repr;

    const NAME: &'static str = "Union";

    fn result_kind(&self) -> ResultKind {
        self.left.result_kind()
    }
}

impl<L: IntAlg, R> IntAlg for Union<L, R> {
    fn literal(&self, x: i64) -> Self::Repr {
        self.left.literal(x)
    }

    fn add(&self, lhs: Self::Repr, rhs: Self::Repr) -> Self::Repr {
        self.left.add(lhs, rhs)
    }
}

impl<L: IntBoolAlg, R> IntBoolAlg for Union<L, R> {
    fn boolean(&self, b: bool) -> Self::Repr {
        self.left.boolean(b)
    }

    fn iff(
        &self,
        pred: Self::Repr,
        then_branch: Self::Repr,
        else_branch: Self::Repr,
    ) -> Result<Self::Repr, AlgebraError> {
        self.left.iff(pred, then_branch, else_branch)
    }
}

impl<L, R> StmtAlg for Union<L, R>
where
    L: Algebra,
    R: StmtAlg<Repr = L::Repr>,
{
    fn var(&self, name: &str) -> Self::Repr {
        self.right.var(name)
    }

    fn assign(&self, name: &str, value: Self::Repr) -> Self::Repr {
        self.right.assign(name, value)
    }

    fn expr_stmt(&self, inner: Self::Repr) -> Self::Repr {
        self.right.expr_stmt(inner)
    }

    fn block(&self, items: Vec<Self::Repr>) -> Self::Repr {
        self.right.block(items)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Combine, ErrorKind, Factory};

    #[test]
    fn test_union_of_factories() {
        let u = Union::new(Factory::new(), Factory::new()).unwrap();
        let b = u.block(vec![u.assign("x", u.add(u.literal(1), u.literal(2)))]);
        assert_eq!(b.size(), 5);
    }

    #[test]
    fn test_mismatch_is_configuration_error() {
        let err = Union::new(Factory::new(), Combine::new(Factory::new(), Factory::new()))
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Configuration);
        assert_eq!(
            err.to_string(),
            "cannot unite `Factory` (results: Expr) with `Combine` (results: (Expr, Expr))"
        );
    }
}
