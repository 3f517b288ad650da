//! Printers for integer and boolean expressions.

use std::rc::Rc;

use objalg_algebra::{check_predicate, Algebra, AlgebraError, IntAlg, IntBoolAlg, ResultKind, Witness};
use objalg_syntax::{Add, Boolean, If, Literal};

use crate::{Print, Show, ShowConfig, ShowNode};

/// Prints integer expressions.
#[derive(Debug, Clone, Default)]
pub struct IntShow {
    config: Rc<ShowConfig>,
}

impl IntShow {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: ShowConfig) -> Self {
        Self {
            config: Rc::new(config),
        }
    }

    pub fn config(&self) -> &ShowConfig {
        &self.config
    }
}

impl Algebra for IntShow {
    type Repr = ShowNode;

    const NAME: &'static str = "IntShow";

    fn result_kind(&self) -> ResultKind {
        Witness::<Print>::result_kind()
    }
}

impl IntAlg for IntShow {
    fn literal(&self, x: i64) -> ShowNode {
        Witness::synthesize(Literal { value: x }, |this: &Literal| this.value.to_string())
    }

    fn add(&self, lhs: ShowNode, rhs: ShowNode) -> ShowNode {
        Witness::synthesize(Add { lhs, rhs }, |this: &Add<ShowNode>| {
            format!("{} + {}", this.lhs.show(), this.rhs.show())
        })
    }
}

/// Prints integer expressions, booleans and conditionals.
#[derive(Debug, Clone, Default)]
pub struct IntBoolShow {
    base: IntShow,
}

impl IntBoolShow {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: ShowConfig) -> Self {
        Self {
            base: IntShow::with_config(config),
        }
    }
}

impl Algebra for IntBoolShow {
    type Repr = ShowNode;

    const NAME: &'static str = "IntBoolShow";

    fn result_kind(&self) -> ResultKind {
        self.base.result_kind()
    }
}

impl IntAlg for IntBoolShow {
    fn literal(&self, x: i64) -> ShowNode {
        self.base.literal(x)
    }

    fn add(&self, lhs: ShowNode, rhs: ShowNode) -> ShowNode {
        self.base.add(lhs, rhs)
    }
}

impl IntBoolAlg for IntBoolShow {
    fn boolean(&self, b: bool) -> ShowNode {
        let config = Rc::clone(&self.base.config);
        Witness::synthesize(Boolean { value: b }, move |this: &Boolean| {
            config.bool_str(this.value).to_string()
        })
    }

    fn iff(
        &self,
        pred: ShowNode,
        then_branch: ShowNode,
        else_branch: ShowNode,
    ) -> Result<ShowNode, AlgebraError> {
        check_predicate(&pred)?;
        let shape = If {
            pred,
            then_branch,
            else_branch,
        };
        Ok(Witness::synthesize(shape, |this: &If<ShowNode>| {
            format!(
                "if {} then {} else {}",
                this.pred.show(),
                this.then_branch.show(),
                this.else_branch.show()
            )
        }))
    }
}
