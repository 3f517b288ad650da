//! The construction algebra: builds plain trees.

use objalg_syntax::{Add, Assign, Block, Boolean, Expr, ExprStmt, If, Literal, Var};

use crate::{check_predicate, Algebra, AlgebraError, IntAlg, IntBoolAlg, ResultKind, StmtAlg};

/// Builds [`Expr`] trees with no interpretation attached.
#[derive(Debug, Clone, Copy, Default)]
pub struct Factory;

impl Factory {
    pub fn new() -> Self {
        Self
    }
}

impl Algebra for Factory {
    type Repr = Expr;

    const NAME: &'static str = "Factory";

    fn result_kind(&self) -> ResultKind {
        ResultKind::of::<Expr>("Expr")
    }
}

impl IntAlg for Factory {
    fn literal(&self, x: i64) -> Expr {
        Expr::Literal(Literal { value: x })
    }

    fn add(&self, lhs: Expr, rhs: Expr) -> Expr {
        Expr::Add(Box::new(Add { lhs, rhs }))
    }
}

impl IntBoolAlg for Factory {
    fn boolean(&self, b: bool) -> Expr {
        Expr::Boolean(Boolean { value: b })
    }

    fn iff(&self, pred: Expr, then_branch: Expr, else_branch: Expr) -> Result<Expr, AlgebraError> {
        check_predicate(&pred)?;
        Ok(Expr::If(Box::new(If {
            pred,
            then_branch,
            else_branch,
        })))
    }
}

impl StmtAlg for Factory {
    fn var(&self, name: &str) -> Expr {
        Expr::Var(Var { name: name.to_string() })
    }

    fn assign(&self, name: &str, value: Expr) -> Expr {
        Expr::Assign(Box::new(Assign {
            name: name.to_string(),
            value,
        }))
    }

    fn expr_stmt(&self, inner: Expr) -> Expr {
        Expr::ExprStmt(Box::new(ExprStmt { inner }))
    }

    fn block(&self, items: Vec<Expr>) -> Expr {
        Expr::Block(Block { items })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ErrorKind;
    use objalg_syntax::{Inspect, NodeKind, Sort};
    use pretty_assertions::assert_eq;

    #[test]
    fn test_builds_plain_tree() {
        let f = Factory::new();
        let e = f.add(f.literal(1), f.literal(2));
        assert_eq!(
            e,
            Expr::Add(Box::new(Add {
                lhs: Expr::Literal(Literal { value: 1 }),
                rhs: Expr::Literal(Literal { value: 2 }),
            }))
        );
    }

    #[test]
    fn test_iff_rejects_int_predicate() {
        let f = Factory::new();
        let err = f.iff(f.literal(1), f.literal(2), f.literal(3)).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidArgument);
    }

    #[test]
    fn test_iff_accepts_variable_predicate() {
        let f = Factory::new();
        let e = f.iff(f.var("flag"), f.literal(2), f.literal(3)).unwrap();
        assert_eq!(e.kind(), NodeKind::If);
        assert_eq!(e.sort(), Sort::Int);
    }

    #[test]
    fn test_statements() {
        let f = Factory::new();
        let b = f.block(vec![f.assign("x", f.literal(1)), f.expr_stmt(f.var("x"))]);
        assert_eq!(b.size(), 5);
        assert_eq!(b.sort(), Sort::Dynamic);
    }
}
