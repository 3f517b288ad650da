//! Algebra interfaces, witnesses and combinators.
//!
//! An algebra is a set of constructor operations, one per node kind. An
//! algebra implementation decides what those constructors return: a
//! plain tree ([`Factory`]), or a [`Witness`] that is both the node and
//! an interpretation of it. [`Combine`] pairs two algebras, [`Union`]
//! joins two algebras over the same result type.

mod algebra;
mod capability;
pub mod classes;
mod combine;
mod error;
mod factory;
mod union;
mod witness;

pub use algebra::{check_predicate, Algebra, IntAlg, IntBoolAlg, ResultKind, StmtAlg};
pub use capability::Capability;
pub use classes::WitnessClass;
pub use combine::{Combine, Pair};
pub use error::{AlgebraError, ErrorKind};
pub use factory::Factory;
pub use union::Union;
pub use witness::Witness;
