//! Witness synthesis.
//!
//! A witness is a node that is at once its node kind and an
//! interpretation: it can be inspected like the plain node and invoked
//! for the capability's operation. An algebra implementation supplies
//! the operation as a closure over the node's own fields.

use std::fmt;
use std::rc::Rc;
use std::sync::Arc;

use objalg_syntax::{Inspect, NodeKind, NodeRef, Shape, Sort};

use crate::{classes, Capability, ResultKind, WitnessClass};

/// A node of some kind carrying capability `C`.
///
/// Cloning is cheap and shares the node.
pub struct Witness<C: Capability> {
    inner: Rc<Inner<C>>,
}

struct Inner<C: Capability> {
    class: Arc<WitnessClass>,
    sort: Sort,
    body: Box<dyn Body<C>>,
}

/// The shape and method of one witness, with the shape type erased.
trait Body<C: Capability> {
    fn view(&self) -> NodeRef<'_, Witness<C>>;

    fn invoke(&self) -> C::Output;
}

struct Bound<S, F> {
    shape: S,
    method: F,
}

impl<C, S, F> Body<C> for Bound<S, F>
where
    C: Capability,
    S: Shape<Witness<C>>,
    F: Fn(&S) -> C::Output,
{
    fn view(&self) -> NodeRef<'_, Witness<C>> {
        self.shape.view()
    }

    fn invoke(&self) -> C::Output {
        (self.method)(&self.shape)
    }
}

/// Another witness's shape with a replacement method.
struct Around<C: Capability, F> {
    node: Witness<C>,
    around: F,
}

impl<C, F> Body<C> for Around<C, F>
where
    C: Capability,
    F: Fn(&Witness<C>) -> C::Output,
{
    fn view(&self) -> NodeRef<'_, Witness<C>> {
        self.node.node()
    }

    fn invoke(&self) -> C::Output {
        (self.around)(&self.node)
    }
}

impl<C: Capability> Witness<C> {
    /// Build a witness from a node shape and the capability's method.
    ///
    /// The class for `(S::KIND, C)` is looked up in the process-wide
    /// registry and created on first use.
    pub fn synthesize<S, F>(shape: S, method: F) -> Self
    where
        S: Shape<Self> + 'static,
        F: Fn(&S) -> C::Output + 'static,
    {
        let class = classes::lookup::<C>(S::KIND);
        let sort = shape.view().sort();
        Self {
            inner: Rc::new(Inner {
                class,
                sort,
                body: Box::new(Bound { shape, method }),
            }),
        }
    }

    /// Run the capability's operation on this node.
    pub fn invoke(&self) -> C::Output {
        self.inner.body.invoke()
    }

    /// View this witness as its node kind.
    pub fn node(&self) -> NodeRef<'_, Self> {
        self.inner.body.view()
    }

    pub fn class(&self) -> &WitnessClass {
        &self.inner.class
    }

    /// A node with the same kind and fields whose operation is `around`.
    ///
    /// `around` receives the original node and decides whether and when
    /// to run its operation.
    pub fn intercept<F>(&self, around: F) -> Self
    where
        F: Fn(&Self) -> C::Output + 'static,
    {
        Self {
            inner: Rc::new(Inner {
                class: Arc::clone(&self.inner.class),
                sort: self.inner.sort,
                body: Box::new(Around {
                    node: self.clone(),
                    around,
                }),
            }),
        }
    }

    /// Whether both handles share one node.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }

    /// The result kind of algebras returning witnesses of `C`.
    pub fn result_kind() -> ResultKind {
        ResultKind::of::<Self>(C::NAME)
    }
}

impl<C: Capability> Clone for Witness<C> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<C: Capability> Inspect for Witness<C> {
    fn kind(&self) -> NodeKind {
        self.inner.class.kind()
    }

    fn sort(&self) -> Sort {
        self.inner.sort
    }
}

impl<C: Capability> fmt::Debug for Witness<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut tuple = f.debug_tuple(self.class().name());
        match self.node() {
            NodeRef::Literal(lit) => tuple.field(&lit.value),
            NodeRef::Boolean(b) => tuple.field(&b.value),
            NodeRef::Var(var) => tuple.field(&var.name),
            NodeRef::Assign(assign) => tuple.field(&assign.name).field(&assign.value),
            node => {
                for child in node.children() {
                    tuple.field(child);
                }
                &mut tuple
            }
        };
        tuple.finish()
    }
}
