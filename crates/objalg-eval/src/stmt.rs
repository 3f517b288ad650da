//! Evaluator for statements.

use objalg_algebra::{Algebra, ResultKind, StmtAlg, Witness};
use objalg_syntax::{Assign, Block, ExprStmt, Var};

use crate::{Eval, EvalError, EvalNode, Evaluate, Store, Value};

/// Evaluates variables, assignments and blocks against its own [`Store`].
#[derive(Debug, Clone, Default)]
pub struct StmtEval {
    store: Store,
}

impl StmtEval {
    pub fn new() -> Self {
        Self::default()
    }

    /// Evaluate against an existing store.
    pub fn with_store(store: Store) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &Store {
        &self.store
    }
}

impl Algebra for StmtEval {
    type Repr = EvalNode;

    const NAME: &'static str = "StmtEval";

    fn result_kind(&self) -> ResultKind {
        Witness::<Evaluate>::result_kind()
    }
}

impl StmtAlg for StmtEval {
    fn var(&self, name: &str) -> EvalNode {
        let store = self.store.clone();
        let shape = Var { name: name.to_string() };
        Witness::synthesize(shape, move |this: &Var| {
            store
                .get(&this.name)
                .ok_or_else(|| EvalError::UndefinedVariable(this.name.clone()))
        })
    }

    fn assign(&self, name: &str, value: EvalNode) -> EvalNode {
        let store = self.store.clone();
        let shape = Assign {
            name: name.to_string(),
            value,
        };
        Witness::synthesize(shape, move |this: &Assign<EvalNode>| {
            let value = this.value.eval()?;
            store.define(&this.name, value);
            Ok(Value::Unit)
        })
    }

    fn expr_stmt(&self, inner: EvalNode) -> EvalNode {
        Witness::synthesize(ExprStmt { inner }, |this: &ExprStmt<EvalNode>| this.inner.eval())
    }

    fn block(&self, items: Vec<EvalNode>) -> EvalNode {
        Witness::synthesize(Block { items }, |this: &Block<EvalNode>| {
            let mut last = Value::Unit;
            for item in &this.items {
                last = item.eval()?;
            }
            Ok(last)
        })
    }
}
