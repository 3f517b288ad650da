//! Algebra interfaces.

use std::any::TypeId;
use std::borrow::Cow;
use std::fmt;

use objalg_syntax::Inspect;

use crate::AlgebraError;

/// Identifies the result interface of an algebra.
///
/// Two kinds are equal when they describe the same result type; the
/// name is only for messages.
#[derive(Debug, Clone)]
pub struct ResultKind {
    name: Cow<'static, str>,
    type_id: TypeId,
}

impl ResultKind {
    /// The result kind of algebras returning `T`.
    pub fn of<T: 'static>(name: impl Into<Cow<'static, str>>) -> Self {
        Self {
            name: name.into(),
            type_id: TypeId::of::<T>(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn type_id(&self) -> TypeId {
        self.type_id
    }
}

impl PartialEq for ResultKind {
    fn eq(&self, other: &Self) -> bool {
        self.type_id == other.type_id
    }
}

impl Eq for ResultKind {}

impl fmt::Display for ResultKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

/// Common base of every algebra interface.
pub trait Algebra {
    /// What every construction returns.
    type Repr: 'static;

    /// Name used in configuration errors.
    const NAME: &'static str;

    fn result_kind(&self) -> ResultKind;
}

/// Integer expressions.
pub trait IntAlg: Algebra {
    fn literal(&self, x: i64) -> Self::Repr;

    fn add(&self, lhs: Self::Repr, rhs: Self::Repr) -> Self::Repr;
}

/// Integer expressions extended with booleans and conditionals.
pub trait IntBoolAlg: IntAlg {
    fn boolean(&self, b: bool) -> Self::Repr;

    /// Build a conditional. Fails when `pred` cannot produce a boolean.
    fn iff(
        &self,
        pred: Self::Repr,
        then_branch: Self::Repr,
        else_branch: Self::Repr,
    ) -> Result<Self::Repr, AlgebraError>;
}

/// Statements over mutable variables.
pub trait StmtAlg: Algebra {
    fn var(&self, name: &str) -> Self::Repr;

    fn assign(&self, name: &str, value: Self::Repr) -> Self::Repr;

    fn expr_stmt(&self, inner: Self::Repr) -> Self::Repr;

    fn block(&self, items: Vec<Self::Repr>) -> Self::Repr;
}

/// Reject conditional predicates that cannot produce a boolean.
///
/// The check looks at the sort of the predicate node, not at the algebra
/// that built it, so it accepts a boolean built by any algebra. Nodes of
/// dynamic sort (variables) pass here and are checked when interpreted.
pub fn check_predicate<R: Inspect>(pred: &R) -> Result<(), AlgebraError> {
    let sort = pred.sort();
    if sort.admits_bool() {
        return Ok(());
    }
    Err(AlgebraError::invalid_argument(
        "iff",
        format!(
            "predicate must produce a boolean, found `{}` of sort {}",
            pred.kind(),
            sort
        ),
    ))
}
