//! Per-frame variable bindings.
//!
//! A `LocalContext` is created by the evaluator for each evaluation frame
//! and exclusively owns its variables. Dropping the context releases every
//! binding; there is no sharing between frames.

use nyx_value::Value;
use rustc_hash::FxHashMap;

/// A named, owned value slot.
///
/// The held value can be replaced in place without changing the
/// variable's identity.
#[derive(Clone, Debug, PartialEq)]
pub struct Variable {
    name: String,
    value: Value,
}

impl Variable {
    /// Create a variable holding the given value.
    pub fn new(name: impl Into<String>, value: Value) -> Self {
        Variable {
            name: name.into(),
            value,
        }
    }

    /// The variable's identifier.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The currently held value.
    pub fn value(&self) -> &Value {
        &self.value
    }

    /// Replace the held value in place.
    pub fn set(&mut self, value: Value) {
        self.value = value;
    }
}

/// Variable bindings for one evaluation frame.
///
/// Invariant: at most one live `Variable` per identifier. Inserting over
/// an existing name drops the previous binding (map insert semantics).
#[derive(Debug, Default)]
pub struct LocalContext {
    vars: FxHashMap<String, Variable>,
}

impl LocalContext {
    /// Create an empty context.
    pub fn new() -> Self {
        LocalContext {
            vars: FxHashMap::default(),
        }
    }

    /// Look up a variable by name.
    ///
    /// Absence is a normal outcome, not an error.
    #[inline]
    pub fn find_variable(&self, name: &str) -> Option<&Variable> {
        self.vars.get(name)
    }

    /// Look up a variable by name for in-place reassignment.
    #[inline]
    pub fn find_variable_mut(&mut self, name: &str) -> Option<&mut Variable> {
        self.vars.get_mut(name)
    }

    /// Check whether a name is bound. No side effect.
    #[inline]
    pub fn has_variable(&self, name: &str) -> bool {
        self.vars.contains_key(name)
    }

    /// Bind a name to a new variable holding the given value.
    ///
    /// Rebinding an existing name drops the previous variable.
    pub fn add_variable(&mut self, name: impl Into<String>, value: Value) {
        let name = name.into();
        let replaced = self
            .vars
            .insert(name.clone(), Variable::new(name.clone(), value))
            .is_some();
        tracing::trace!(name, replaced, "add_variable");
    }

    /// Remove a binding.
    ///
    /// Returns `true` and drops the variable if the name was bound,
    /// `false` with no effect otherwise.
    pub fn remove_variable(&mut self, name: &str) -> bool {
        let removed = self.vars.remove(name).is_some();
        tracing::trace!(name, removed, "remove_variable");
        removed
    }

    /// Number of live bindings.
    pub fn len(&self) -> usize {
        self.vars.len()
    }

    /// Check whether the context has no bindings.
    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }
}
