//! Variable store.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use crate::Value;

/// Maps variable names to their last assigned value.
///
/// Clones share the same bindings, so a driver can keep a handle to the
/// store of a [`StmtEval`](crate::StmtEval) and read what it wrote.
#[derive(Debug, Clone, Default)]
pub struct Store {
    bindings: Rc<RefCell<HashMap<String, Value>>>,
}

impl Store {
    /// Create a new empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind `name` to `value`, replacing any previous value.
    pub fn define(&self, name: &str, value: Value) {
        tracing::debug!(name, %value, "assign");
        self.bindings.borrow_mut().insert(name.to_string(), value);
    }

    /// Look up a variable.
    pub fn get(&self, name: &str) -> Option<Value> {
        self.bindings.borrow().get(name).copied()
    }

    pub fn len(&self) -> usize {
        self.bindings.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.borrow().is_empty()
    }

    /// Bound names, sorted.
    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<_> = self.bindings.borrow().keys().cloned().collect();
        names.sort();
        names
    }

    /// Remove every binding.
    pub fn clear(&self) {
        self.bindings.borrow_mut().clear();
    }
}
