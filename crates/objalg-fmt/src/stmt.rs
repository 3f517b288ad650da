//! Printer for statements.

use std::rc::Rc;

use objalg_algebra::{Algebra, ResultKind, StmtAlg, Witness};
use objalg_syntax::{Assign, Block, ExprStmt, Var};

use crate::{Print, Show, ShowConfig, ShowNode};

/// Prints variables, assignments and blocks.
#[derive(Debug, Clone, Default)]
pub struct StmtShow {
    config: Rc<ShowConfig>,
}

impl StmtShow {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: ShowConfig) -> Self {
        Self {
            config: Rc::new(config),
        }
    }
}

impl Algebra for StmtShow {
    type Repr = ShowNode;

    const NAME: &'static str = "StmtShow";

    fn result_kind(&self) -> ResultKind {
        Witness::<Print>::result_kind()
    }
}

impl StmtAlg for StmtShow {
    fn var(&self, name: &str) -> ShowNode {
        let shape = Var { name: name.to_string() };
        Witness::synthesize(shape, |this: &Var| this.name.clone())
    }

    fn assign(&self, name: &str, value: ShowNode) -> ShowNode {
        let shape = Assign {
            name: name.to_string(),
            value,
        };
        Witness::synthesize(shape, |this: &Assign<ShowNode>| {
            format!("{} = {}", this.name, this.value.show())
        })
    }

    fn expr_stmt(&self, inner: ShowNode) -> ShowNode {
        Witness::synthesize(ExprStmt { inner }, |this: &ExprStmt<ShowNode>| this.inner.show())
    }

    fn block(&self, items: Vec<ShowNode>) -> ShowNode {
        let config = Rc::clone(&self.config);
        Witness::synthesize(Block { items }, move |this: &Block<ShowNode>| {
            this.items
                .iter()
                .map(Show::show)
                .collect::<Vec<_>>()
                .join(&config.block_separator)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::IntShow;
    use objalg_algebra::IntAlg;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_show_block() {
        let ints = IntShow::new();
        let alg = StmtShow::new();
        let b = alg.block(vec![
            alg.assign("x", ints.literal(5)),
            alg.expr_stmt(ints.add(alg.var("x"), ints.literal(1))),
        ]);
        assert_eq!(b.show(), "x = 5; x + 1");
        assert_eq!(alg.block(vec![]).show(), "");
    }

    #[test]
    fn test_custom_separator() {
        let alg = StmtShow::with_config(ShowConfig::new().block_separator("\n"));
        let b = alg.block(vec![alg.var("a"), alg.var("b")]);
        assert_eq!(b.show(), "a\nb");
    }
}
