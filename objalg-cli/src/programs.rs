//! Demonstration programs, written once against the algebra interfaces.
//! 演示程序，针对代数接口只写一次。

use objalg_algebra::{AlgebraError, IntAlg, IntBoolAlg, StmtAlg};

/// `1 + 2`
pub fn sum<A: IntAlg>(alg: &A) -> A::Repr {
    alg.add(alg.literal(1), alg.literal(2))
}

/// `if True then 10 else 20`
pub fn choice<A: IntBoolAlg>(alg: &A) -> Result<A::Repr, AlgebraError> {
    alg.iff(alg.boolean(true), alg.literal(10), alg.literal(20))
}

/// `1 + 2 + 3 + 4`, nested to the right.
pub fn chain<A: IntAlg>(alg: &A) -> A::Repr {
    let tail = alg.add(alg.literal(3), alg.literal(4));
    alg.add(alg.literal(1), alg.add(alg.literal(2), tail))
}

/// `x = 1 + 2; y = if True then x else 0; x + y`
pub fn program<A: IntBoolAlg + StmtAlg>(alg: &A) -> Result<A::Repr, AlgebraError> {
    let x = alg.assign("x", sum(alg));
    let pick = alg.iff(alg.boolean(true), alg.var("x"), alg.literal(0))?;
    let y = alg.assign("y", pick);
    let total = alg.expr_stmt(alg.add(alg.var("x"), alg.var("y")));
    Ok(alg.block(vec![x, y, total]))
}
