//! Evaluators for integer and boolean expressions.

use objalg_algebra::{check_predicate, Algebra, AlgebraError, IntAlg, IntBoolAlg, ResultKind, Witness};
use objalg_syntax::{Add, Boolean, If, Literal};

use crate::{Eval, EvalError, EvalNode, Evaluate, Value};

/// Evaluates integer expressions.
#[derive(Debug, Clone, Copy, Default)]
pub struct IntEval;

impl IntEval {
    pub fn new() -> Self {
        Self
    }
}

impl Algebra for IntEval {
    type Repr = EvalNode;

    const NAME: &'static str = "IntEval";

    fn result_kind(&self) -> ResultKind {
        Witness::<Evaluate>::result_kind()
    }
}

impl IntAlg for IntEval {
    fn literal(&self, x: i64) -> EvalNode {
        Witness::synthesize(Literal { value: x }, |this: &Literal| Ok(Value::Int(this.value)))
    }

    fn add(&self, lhs: EvalNode, rhs: EvalNode) -> EvalNode {
        Witness::synthesize(Add { lhs, rhs }, |this: &Add<EvalNode>| {
            let lhs = this.lhs.eval()?.to_int()?;
            let rhs = this.rhs.eval()?.to_int()?;
            lhs.checked_add(rhs)
                .map(Value::Int)
                .ok_or(EvalError::Overflow { lhs, rhs })
        })
    }
}

/// Evaluates integer expressions, booleans and conditionals.
#[derive(Debug, Clone, Copy, Default)]
pub struct IntBoolEval {
    base: IntEval,
}

impl IntBoolEval {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Algebra for IntBoolEval {
    type Repr = EvalNode;

    const NAME: &'static str = "IntBoolEval";

    fn result_kind(&self) -> ResultKind {
        self.base.result_kind()
    }
}

impl IntAlg for IntBoolEval {
    fn literal(&self, x: i64) -> EvalNode {
        self.base.literal(x)
    }

    fn add(&self, lhs: EvalNode, rhs: EvalNode) -> EvalNode {
        self.base.add(lhs, rhs)
    }
}

impl IntBoolAlg for IntBoolEval {
    fn boolean(&self, b: bool) -> EvalNode {
        Witness::synthesize(Boolean { value: b }, |this: &Boolean| Ok(Value::Bool(this.value)))
    }

    fn iff(
        &self,
        pred: EvalNode,
        then_branch: EvalNode,
        else_branch: EvalNode,
    ) -> Result<EvalNode, AlgebraError> {
        check_predicate(&pred)?;
        let shape = If {
            pred,
            then_branch,
            else_branch,
        };
        // Only the taken branch is evaluated.
        Ok(Witness::synthesize(shape, |this: &If<EvalNode>| {
            if this.pred.eval()?.to_bool()? {
                this.then_branch.eval()
            } else {
                this.else_branch.eval()
            }
        }))
    }
}
