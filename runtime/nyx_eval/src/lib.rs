#![deny(clippy::arithmetic_side_effects)]
//! Nyx Eval - Evaluation core for the nyx runtime.
//!
//! This crate provides operator dispatch and the naming contexts for
//! nyx programs.
//!
//! # Architecture
//!
//! The evaluator uses:
//! - `evaluate_binary`: Direct enum-based binary operator dispatch
//! - `LocalContext`: Per-frame variable bindings, exclusively owned
//! - `GlobalContext`: Builtin table and user function registry
//! - `NativeCtx`: Capability handles routing `print` output and `input` reads
//! - `Value` types from `nyx_value`
//!
//! # Re-exports
//!
//! This crate re-exports value types from `nyx_value` for convenience:
//! - `Value`, `BinaryOp`
//! - `EvalError`, `EvalErrorKind`, `EvalResult`

mod builtins;
mod console;
mod environment;
mod globals;
mod operators;

// Re-export value types from nyx_value
pub use nyx_value::{BinaryOp, EvalError, EvalErrorKind, EvalResult, Value};

// Re-export error constructors for convenience (canonical path is nyx_value::*)
pub use nyx_value::{
    arity_mismatch, division_by_zero, integer_overflow, modulo_by_zero, type_mismatch,
};

pub use builtins::{native_input, native_print, native_typeof, NativeCtx, NativeFn};
pub use console::{
    buffer_sink, buffer_source, empty_source, silent_sink, stdin_source, stdout_sink, InputSource,
    PrintSink, SharedInputSource, SharedPrintSink,
};
pub use environment::{LocalContext, Variable};
pub use globals::{BodyId, Callable, FunctionDef, GlobalContext};
pub use operators::evaluate_binary;

#[cfg(test)]
mod tests;
