//! Process-wide naming context: builtin table and function registry.
//!
//! Builtins are plain `fn` pointers held (not owned) in a table that is
//! populated exactly once at construction. User function definitions are
//! owned by the registry and dropped with it.

use crate::builtins::{native_input, native_print, native_typeof, NativeFn};
use rustc_hash::FxHashMap;

/// Opaque handle to a function body held by the external evaluator.
///
/// The AST lives outside this crate; definitions refer to their body by
/// id the same way closures carry an expression id instead of a subtree.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct BodyId(pub u32);

/// User-declared function definition.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FunctionDef {
    /// Declared name.
    pub name: String,
    /// Parameter names, in declaration order.
    pub params: Vec<String>,
    /// Handle to the body in the evaluator's AST storage.
    pub body: BodyId,
}

impl FunctionDef {
    /// Create a definition.
    pub fn new(name: impl Into<String>, params: Vec<String>, body: BodyId) -> Self {
        FunctionDef {
            name: name.into(),
            params,
            body,
        }
    }
}

/// A name resolved to something invocable.
///
/// Builtin and user lookups share one result type, so call sites
/// dispatch on the variant instead of consulting two tables.
#[derive(Clone, Copy, Debug)]
pub enum Callable<'a> {
    /// Baseline native function.
    Native(NativeFn),
    /// User-declared function definition.
    User(&'a FunctionDef),
}

/// Process-wide naming context.
pub struct GlobalContext {
    /// Baseline native functions, keyed by surface name.
    builtins: FxHashMap<&'static str, NativeFn>,
    /// User function definitions, in declaration order.
    functions: Vec<FunctionDef>,
}

impl GlobalContext {
    /// Create a context with the baseline builtins registered.
    pub fn new() -> Self {
        let mut builtins: FxHashMap<&'static str, NativeFn> = FxHashMap::default();
        builtins.insert("print", native_print as NativeFn);
        builtins.insert("typeof", native_typeof as NativeFn);
        builtins.insert("input", native_input as NativeFn);
        tracing::debug!(count = builtins.len(), "registered baseline builtins");
        GlobalContext {
            builtins,
            functions: Vec::new(),
        }
    }

    /// Look up a builtin by name.
    ///
    /// Not-found is a normal signal; the caller decides how to report it.
    #[inline]
    pub fn builtin(&self, name: &str) -> Option<NativeFn> {
        self.builtins.get(name).copied()
    }

    /// Check whether a builtin exists.
    #[inline]
    pub fn has_builtin(&self, name: &str) -> bool {
        self.builtins.contains_key(name)
    }

    /// Register a user function definition.
    ///
    /// The registry is append-only; redeclaring a name shadows the
    /// earlier definition for lookup.
    pub fn add_function(&mut self, def: FunctionDef) {
        tracing::debug!(name = %def.name, params = def.params.len(), "add_function");
        self.functions.push(def);
    }

    /// Look up a user function by name.
    ///
    /// The most recent definition with that name wins.
    pub fn find_function(&self, name: &str) -> Option<&FunctionDef> {
        self.functions.iter().rev().find(|def| def.name == name)
    }

    /// Check whether a user function is defined.
    pub fn has_function(&self, name: &str) -> bool {
        self.find_function(name).is_some()
    }

    /// Resolve a name to a callable.
    ///
    /// User definitions shadow builtins of the same name. Absence is a
    /// normal signal; the caller decides whether it is a name error.
    pub fn find_callable(&self, name: &str) -> Option<Callable<'_>> {
        if let Some(def) = self.find_function(name) {
            return Some(Callable::User(def));
        }
        self.builtin(name).map(Callable::Native)
    }
}

impl Default for GlobalContext {
    fn default() -> Self {
        Self::new()
    }
}
