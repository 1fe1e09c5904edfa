//! Binary operator implementations for the evaluator.
//!
//! Provides direct enum-based dispatch for binary operations. The kind set
//! is fixed (not user-extensible), so pattern matching is preferred over
//! trait objects for better performance and exhaustiveness checking.
//!
//! Dispatch is on the `(lhs, rhs)` tag pair first, operator second:
//! - both Int: integer arithmetic (checked), comparisons, bitwise;
//! - both numeric with at least one Double: the Int side promotes and the
//!   operation runs on doubles;
//! - either side Str (after the numeric pairs): `+` concatenates the
//!   canonical string forms, comparisons compare them as text;
//! - Bool/Bool: logic and equality; Null/Null: equality only;
//! - anything else: TypeMismatch naming the operator and both tags.

use nyx_value::{
    division_by_zero, integer_overflow, modulo_by_zero, type_mismatch, BinaryOp, EvalResult, Value,
};

/// Checked integer arithmetic with overflow reporting.
#[inline]
fn checked_arith(result: Option<i64>, op: BinaryOp) -> EvalResult {
    result.map(Value::Int).ok_or_else(|| integer_overflow(op))
}

/// Promote an integer payload for mixed-operand arithmetic.
///
/// Delegates to `Value::as_double`, which is always `Some` for `Int`.
#[inline]
fn promote(n: i64) -> f64 {
    Value::Int(n).as_double().unwrap_or(f64::NAN)
}

// Direct Dispatch Function

/// Evaluate a binary operation using direct pattern matching.
///
/// No operand is mutated; every success produces a fresh `Value`.
pub fn evaluate_binary(left: &Value, right: &Value, op: BinaryOp) -> EvalResult {
    match (left, right) {
        (Value::Int(a), Value::Int(b)) => eval_int_binary(*a, *b, op),
        (Value::Double(a), Value::Double(b)) => eval_double_binary(*a, *b, op, "Double", "Double"),
        (Value::Int(a), Value::Double(b)) => eval_double_binary(promote(*a), *b, op, "Int", "Double"),
        (Value::Double(a), Value::Int(b)) => eval_double_binary(*a, promote(*b), op, "Double", "Int"),
        (Value::Bool(a), Value::Bool(b)) => eval_bool_binary(*a, *b, op),
        (Value::Null, Value::Null) => eval_null_binary(op),
        // String coercion applies only after the numeric pairs above.
        (Value::Str(_), _) | (_, Value::Str(_)) => eval_string_coerced(left, right, op),
        _ => Err(type_mismatch(op, left.type_name(), right.type_name())),
    }
}

// Type-Specific Evaluation Functions

/// Binary operations on two integers.
///
/// Arithmetic goes through the `checked_*` methods so overflow is a
/// reported error, never a wrap or a panic.
fn eval_int_binary(a: i64, b: i64, op: BinaryOp) -> EvalResult {
    match op {
        BinaryOp::Add => checked_arith(a.checked_add(b), op),
        BinaryOp::Sub => checked_arith(a.checked_sub(b), op),
        BinaryOp::Mul => checked_arith(a.checked_mul(b), op),
        // Truncates toward zero.
        BinaryOp::Div => {
            if b == 0 {
                Err(division_by_zero())
            } else {
                checked_arith(a.checked_div(b), op)
            }
        }
        BinaryOp::Mod => {
            if b == 0 {
                Err(modulo_by_zero())
            } else {
                checked_arith(a.checked_rem(b), op)
            }
        }
        BinaryOp::Eq => Ok(Value::Bool(a == b)),
        BinaryOp::NotEq => Ok(Value::Bool(a != b)),
        BinaryOp::Lt => Ok(Value::Bool(a < b)),
        BinaryOp::LtEq => Ok(Value::Bool(a <= b)),
        BinaryOp::Gt => Ok(Value::Bool(a > b)),
        BinaryOp::GtEq => Ok(Value::Bool(a >= b)),
        BinaryOp::BitAnd => Ok(Value::Int(a & b)),
        BinaryOp::BitOr => Ok(Value::Int(a | b)),
        BinaryOp::And | BinaryOp::Or => Err(type_mismatch(op, "Int", "Int")),
    }
}

/// Binary operations on doubles, including promoted mixed pairs.
///
/// `left` and `right` are the original operand tags so error messages
/// name what the caller actually wrote, not the promoted pair.
fn eval_double_binary(
    a: f64,
    b: f64,
    op: BinaryOp,
    left: &'static str,
    right: &'static str,
) -> EvalResult {
    match op {
        BinaryOp::Add => Ok(Value::Double(a + b)),
        BinaryOp::Sub => Ok(Value::Double(a - b)),
        BinaryOp::Mul => Ok(Value::Double(a * b)),
        // Zero divisors are reported, not turned into IEEE infinities.
        BinaryOp::Div => {
            if b == 0.0 {
                Err(division_by_zero())
            } else {
                Ok(Value::Double(a / b))
            }
        }
        // Use partial_cmp for IEEE 754 compliant comparisons
        // (NaN != NaN, -0.0 == 0.0)
        BinaryOp::Eq => Ok(Value::Bool(
            a.partial_cmp(&b) == Some(std::cmp::Ordering::Equal),
        )),
        BinaryOp::NotEq => Ok(Value::Bool(
            a.partial_cmp(&b) != Some(std::cmp::Ordering::Equal),
        )),
        BinaryOp::Lt => Ok(Value::Bool(
            a.partial_cmp(&b) == Some(std::cmp::Ordering::Less),
        )),
        BinaryOp::LtEq => Ok(Value::Bool(matches!(
            a.partial_cmp(&b),
            Some(std::cmp::Ordering::Less | std::cmp::Ordering::Equal)
        ))),
        BinaryOp::Gt => Ok(Value::Bool(
            a.partial_cmp(&b) == Some(std::cmp::Ordering::Greater),
        )),
        BinaryOp::GtEq => Ok(Value::Bool(matches!(
            a.partial_cmp(&b),
            Some(std::cmp::Ordering::Greater | std::cmp::Ordering::Equal)
        ))),
        BinaryOp::Mod | BinaryOp::And | BinaryOp::Or | BinaryOp::BitAnd | BinaryOp::BitOr => {
            Err(type_mismatch(op, left, right))
        }
    }
}

/// Binary operations on two booleans.
fn eval_bool_binary(a: bool, b: bool, op: BinaryOp) -> EvalResult {
    match op {
        BinaryOp::And => Ok(Value::Bool(a && b)),
        BinaryOp::Or => Ok(Value::Bool(a || b)),
        BinaryOp::Eq => Ok(Value::Bool(a == b)),
        BinaryOp::NotEq => Ok(Value::Bool(a != b)),
        _ => Err(type_mismatch(op, "Bool", "Bool")),
    }
}

/// Binary operations on two nulls: equality only.
fn eval_null_binary(op: BinaryOp) -> EvalResult {
    match op {
        BinaryOp::Eq => Ok(Value::Bool(true)),
        BinaryOp::NotEq => Ok(Value::Bool(false)),
        _ => Err(type_mismatch(op, "Null", "Null")),
    }
}

/// Binary operations where at least one operand is a string.
///
/// Both sides take their canonical string form: `+` concatenates, the
/// comparisons are lexicographic on the result.
fn eval_string_coerced(left: &Value, right: &Value, op: BinaryOp) -> EvalResult {
    let a = left.to_string();
    let b = right.to_string();
    match op {
        BinaryOp::Add => Ok(Value::Str(format!("{a}{b}"))),
        BinaryOp::Eq => Ok(Value::Bool(a == b)),
        BinaryOp::NotEq => Ok(Value::Bool(a != b)),
        BinaryOp::Lt => Ok(Value::Bool(a < b)),
        BinaryOp::LtEq => Ok(Value::Bool(a <= b)),
        BinaryOp::Gt => Ok(Value::Bool(a > b)),
        BinaryOp::GtEq => Ok(Value::Bool(a >= b)),
        _ => Err(type_mismatch(op, left.type_name(), right.type_name())),
    }
}
