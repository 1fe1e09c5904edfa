//! Nyx Value - dynamic value model for the nyx runtime.
//!
//! This crate provides:
//! - The runtime value type (`Value`), a tagged union over the fixed
//!   primitive kinds (Null, Bool, Int, Double, String)
//! - Operator tags (`BinaryOp`) shared with the evaluation layer
//! - Evaluation error types (`EvalError`, `EvalResult`) and their
//!   factory functions
//!
//! # Architecture
//!
//! The kind set is fixed (not user-extensible), so everything downstream
//! dispatches with exhaustive pattern matching rather than trait objects:
//! adding a kind forces every operator site to be revisited by the
//! compiler instead of silently falling through.
//!
//! Values are copied by value. Two values with the same apparent content
//! never share mutable state, so cloning a value is always safe.

mod errors;
mod op;
mod value;

pub use errors::{
    arity_mismatch, division_by_zero, integer_overflow, modulo_by_zero, type_mismatch, EvalError,
    EvalErrorKind, EvalResult,
};
pub use op::BinaryOp;
pub use value::Value;
