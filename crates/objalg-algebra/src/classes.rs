//! Process-wide registry of witness classes.
//!
//! A witness class describes the pairing of one node kind with one
//! capability, e.g. `EvalAdd`. Classes are created the first time a
//! pairing is needed and shared by every witness of that pairing
//! afterwards. Entries are never evicted: there is at most one per
//! (node kind, capability) pair.

use std::any::TypeId;
use std::fmt;
use std::sync::{Arc, LazyLock};

use dashmap::DashMap;
use objalg_syntax::NodeKind;

use crate::Capability;

type Key = (NodeKind, TypeId);

static CLASSES: LazyLock<DashMap<Key, Arc<WitnessClass>>> = LazyLock::new(DashMap::new);

/// Description of a synthesized witness type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WitnessClass {
    name: String,
    kind: NodeKind,
    capability: &'static str,
    method: &'static str,
}

impl WitnessClass {
    fn new<C: Capability>(kind: NodeKind) -> Self {
        Self {
            name: format!("{}{}", C::NAME, kind),
            kind,
            capability: C::NAME,
            method: C::METHOD,
        }
    }

    /// Class name, capability first: `EvalLiteral`, `ShowBlock`.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> NodeKind {
        self.kind
    }

    pub fn capability(&self) -> &'static str {
        self.capability
    }

    pub fn method(&self) -> &'static str {
        self.method
    }
}

impl fmt::Display for WitnessClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}::{})", self.name, self.capability, self.method)
    }
}

/// Get the class for `kind` under capability `C`, creating it if needed.
pub(crate) fn lookup<C: Capability>(kind: NodeKind) -> Arc<WitnessClass> {
    let key = (kind, TypeId::of::<C>());
    if let Some(class) = CLASSES.get(&key) {
        return Arc::clone(class.value());
    }

    let class = CLASSES.entry(key).or_insert_with(|| {
        let class = WitnessClass::new::<C>(kind);
        tracing::trace!(class = %class, "synthesized witness class");
        Arc::new(class)
    });
    Arc::clone(class.value())
}

/// The class for `kind` under `C`, if one has been synthesized.
pub fn find<C: Capability>(kind: NodeKind) -> Option<Arc<WitnessClass>> {
    CLASSES
        .get(&(kind, TypeId::of::<C>()))
        .map(|class| Arc::clone(class.value()))
}

/// All classes synthesized so far, sorted by name.
pub fn registered() -> Vec<Arc<WitnessClass>> {
    let mut classes: Vec<_> = CLASSES.iter().map(|entry| Arc::clone(entry.value())).collect();
    classes.sort_by(|a, b| a.name.cmp(&b.name));
    classes
}
