//! Error types for expression evaluation.
//!
//! # Structured Error Categories
//!
//! `EvalErrorKind` provides typed error categories. Factory functions
//! (e.g., `division_by_zero()`) are the public API; they populate both
//! `kind` and `message`, and the `Display` impl on the kind is the single
//! source of the message text.

use crate::op::BinaryOp;
use crate::value::Value;
use std::fmt;

/// Result of evaluation.
pub type EvalResult = Result<Value, EvalError>;

/// Typed error category for structured diagnostics.
///
/// Each variant carries the data for its error condition, enabling
/// programmatic matching (switch on kind, not string parsing) alongside
/// the human-readable message.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EvalErrorKind {
    // Arithmetic
    DivisionByZero,
    ModuloByZero,
    IntegerOverflow {
        op: BinaryOp,
    },

    // Type/Operator
    TypeMismatch {
        op: BinaryOp,
        left: &'static str,
        right: &'static str,
    },

    // Function
    ArityMismatch {
        name: String,
        expected: usize,
        got: usize,
    },

    /// Catch-all for errors without a structured kind.
    ///
    /// Used by `EvalError::new(msg)`. Prefer the specific factory
    /// functions when a structured kind exists.
    Custom {
        message: String,
    },
}

impl fmt::Display for EvalErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            // Arithmetic
            Self::DivisionByZero => write!(f, "division by zero"),
            Self::ModuloByZero => write!(f, "modulo by zero"),
            Self::IntegerOverflow { op } => {
                write!(f, "integer overflow in `{}`", op.as_symbol())
            }

            // Type/Operator
            Self::TypeMismatch { op, left, right } => {
                write!(
                    f,
                    "unsupported operands for `{}`: {left} and {right}",
                    op.as_symbol()
                )
            }

            // Function
            Self::ArityMismatch {
                name,
                expected,
                got,
            } => {
                let arg_word = if *expected == 1 {
                    "argument"
                } else {
                    "arguments"
                };
                write!(f, "{name} expects {expected} {arg_word}, got {got}")
            }

            // Custom
            Self::Custom { message } => write!(f, "{message}"),
        }
    }
}

/// Evaluation error.
#[derive(Clone, Debug, PartialEq)]
pub struct EvalError {
    /// Structured error category.
    ///
    /// Factory functions set this to the specific variant;
    /// `EvalError::new(msg)` uses `Custom`.
    pub kind: EvalErrorKind,
    /// Human-readable error message.
    ///
    /// For factory-created errors, this equals `kind.to_string()`.
    pub message: String,
}

impl EvalError {
    /// Create an error with just a message.
    ///
    /// Uses `Custom` kind. Prefer specific factory functions (e.g.,
    /// `division_by_zero()`) when a structured kind is available.
    pub fn new(message: impl Into<String>) -> Self {
        let msg = message.into();
        Self {
            kind: EvalErrorKind::Custom {
                message: msg.clone(),
            },
            message: msg,
        }
    }

    /// Create an error from a structured kind.
    ///
    /// The message is computed from the kind's `Display` impl.
    /// Used internally by factory functions.
    fn from_kind(kind: EvalErrorKind) -> Self {
        let message = kind.to_string();
        Self { kind, message }
    }
}

// Binary Operation Errors

/// Operand kinds that the operator does not accept.
#[cold]
pub fn type_mismatch(op: BinaryOp, left: &'static str, right: &'static str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::TypeMismatch { op, left, right })
}

/// Division by zero error.
#[cold]
pub fn division_by_zero() -> EvalError {
    EvalError::from_kind(EvalErrorKind::DivisionByZero)
}

/// Modulo by zero error.
#[cold]
pub fn modulo_by_zero() -> EvalError {
    EvalError::from_kind(EvalErrorKind::ModuloByZero)
}

/// Integer overflow error.
#[cold]
pub fn integer_overflow(op: BinaryOp) -> EvalError {
    EvalError::from_kind(EvalErrorKind::IntegerOverflow { op })
}

// Builtin and Function Errors

/// Wrong argument count for a builtin or function call.
#[cold]
pub fn arity_mismatch(name: &str, expected: usize, got: usize) -> EvalError {
    EvalError::from_kind(EvalErrorKind::ArityMismatch {
        name: name.to_string(),
        expected,
        got,
    })
}
