//! The `Debug` combinator.

use std::cell::RefCell;
use std::rc::Rc;

use objalg_algebra::{
    Algebra, AlgebraError, Combine, IntAlg, IntBoolAlg, Pair, ResultKind, StmtAlg,
};
use objalg_eval::{Eval, EvalError, EvalNode, Value};
use objalg_fmt::Show;

use crate::{Diagnostic, Operand};

type Log = Rc<RefCell<Vec<Diagnostic>>>;

/// The value an operand produced during the latest evaluation.
type Seen = Rc<RefCell<Option<Result<Value, EvalError>>>>;

/// A [`Combine`] of an evaluator and a printer that reports additions.
///
/// Every time an addition built here is evaluated, its operands' text
/// and values are recorded in a [`Diagnostic`], emitted at debug level
/// and kept for inspection. Operands are evaluated only by the
/// addition itself, so results and side effects are those of the plain
/// `Combine`.
pub struct Debug<A, B> {
    inner: Combine<A, B>,
    diagnostics: Log,
}

impl<A, B> Debug<A, B> {
    pub fn new(eval: A, show: B) -> Self {
        Self {
            inner: Combine::new(eval, show),
            diagnostics: Rc::default(),
        }
    }

    pub fn inner(&self) -> &Combine<A, B> {
        &self.inner
    }

    /// Diagnostics emitted so far.
    pub fn diagnostics(&self) -> Vec<Diagnostic> {
        self.diagnostics.borrow().clone()
    }

    /// Drain the diagnostics emitted so far.
    pub fn take_diagnostics(&self) -> Vec<Diagnostic> {
        self.diagnostics.take()
    }
}

fn emit(log: &Log, diagnostic: Diagnostic) {
    tracing::debug!(target: "objalg::debug", "{}", diagnostic);
    log.borrow_mut().push(diagnostic);
}

/// Wrap an operand so its value is recorded when it is evaluated.
fn observe(node: &EvalNode, seen: &Seen) -> EvalNode {
    let seen = Rc::clone(seen);
    node.intercept(move |node| {
        let value = node.eval();
        *seen.borrow_mut() = Some(value.clone());
        value
    })
}

impl<A: Algebra, B: Algebra> Algebra for Debug<A, B> {
    type Repr = Pair<A::Repr, B::Repr>;

    const NAME: &'static str = "Debug";

    fn result_kind(&self) -> ResultKind {
        self.inner.result_kind()
    }
}

impl<A, B> IntAlg for Debug<A, B>
where
    A: IntAlg<Repr = EvalNode>,
    B: IntAlg,
    B::Repr: Show,
{
    fn literal(&self, x: i64) -> Self::Repr {
        self.inner.literal(x)
    }

    fn add(&self, lhs: Self::Repr, rhs: Self::Repr) -> Self::Repr {
        let texts = (lhs.b.show(), rhs.b.show());
        let seen: (Seen, Seen) = Default::default();
        let lhs = Pair::new(observe(&lhs.a, &seen.0), lhs.b);
        let rhs = Pair::new(observe(&rhs.a, &seen.1), rhs.b);

        let Pair { a, b } = self.inner.add(lhs, rhs);
        let log = Rc::clone(&self.diagnostics);
        let a = a.intercept(move |node| {
            seen.0.take();
            seen.1.take();
            let value = node.eval();
            emit(
                &log,
                Diagnostic {
                    operation: "add",
                    lhs: Operand {
                        text: texts.0.clone(),
                        value: seen.0.take(),
                    },
                    rhs: Operand {
                        text: texts.1.clone(),
                        value: seen.1.take(),
                    },
                },
            );
            value
        });
        Pair::new(a, b)
    }
}

impl<A, B> IntBoolAlg for Debug<A, B>
where
    A: IntBoolAlg<Repr = EvalNode>,
    B: IntBoolAlg,
    B::Repr: Show,
{
    fn boolean(&self, b: bool) -> Self::Repr {
        self.inner.boolean(b)
    }

    fn iff(
        &self,
        pred: Self::Repr,
        then_branch: Self::Repr,
        else_branch: Self::Repr,
    ) -> Result<Self::Repr, AlgebraError> {
        self.inner.iff(pred, then_branch, else_branch)
    }
}

impl<A: StmtAlg, B: StmtAlg> StmtAlg for Debug<A, B> {
    fn var(&self, name: &str) -> Self::Repr {
        self.inner.var(name)
    }

    fn assign(&self, name: &str, value: Self::Repr) -> Self::Repr {
        self.inner.assign(name, value)
    }

    fn expr_stmt(&self, inner: Self::Repr) -> Self::Repr {
        self.inner.expr_stmt(inner)
    }

    fn block(&self, items: Vec<Self::Repr>) -> Self::Repr {
        self.inner.block(items)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use objalg_eval::IntBoolEval;
    use objalg_fmt::IntBoolShow;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_add_emits_diagnostic() {
        let alg = Debug::new(IntBoolEval::new(), IntBoolShow::new());
        let e = alg.add(alg.literal(1), alg.add(alg.literal(2), alg.literal(3)));
        assert!(alg.diagnostics().is_empty());

        assert_eq!(e.a.eval(), Ok(Value::Int(6)));
        assert_eq!(e.b.show(), "1 + 2 + 3");

        let messages: Vec<_> = alg.take_diagnostics().iter().map(ToString::to_string).collect();
        assert_eq!(messages, ["add: 2 => 2, 3 => 3", "add: 1 => 1, 2 + 3 => 5"]);
        assert!(alg.diagnostics().is_empty());
    }

    #[test]
    fn test_each_evaluation_reports() {
        let alg = Debug::new(IntBoolEval::new(), IntBoolShow::new());
        let e = alg.add(alg.literal(1), alg.literal(2));
        e.a.eval().unwrap();
        e.a.eval().unwrap();
        assert_eq!(alg.diagnostics().len(), 2);
    }

    #[test]
    fn test_other_operations_are_silent() {
        let alg = Debug::new(IntBoolEval::new(), IntBoolShow::new());
        let e = alg.iff(alg.boolean(false), alg.literal(1), alg.literal(2)).unwrap();
        assert_eq!(e.a.eval(), Ok(Value::Int(2)));
        assert!(alg.diagnostics().is_empty());
    }
}
