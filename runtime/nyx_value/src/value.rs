//! Runtime values for the nyx evaluator.
//!
//! The kind set is closed: `Null`, `Bool`, `Int`, `Double`, `Str`. Every
//! payload is a plain owned value, so `Clone` produces an independent copy
//! and no two values ever share mutable state.
//!
//! `Display` is the canonical stringification. It backs both string
//! coercion in binary operators and user-facing output, so the two can
//! never drift apart.

use std::fmt;

/// Runtime value in the nyx evaluator.
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    /// Absence of a value.
    Null,
    /// Boolean value.
    Bool(bool),
    /// 64-bit signed integer value.
    Int(i64),
    /// Floating-point value.
    Double(f64),
    /// String value.
    Str(String),
}

impl Value {
    /// Create a string value.
    ///
    /// # Example
    ///
    /// ```text
    /// let s = Value::string("hello");
    /// let s2 = Value::string(format!("value: {x}"));
    /// ```
    #[inline]
    pub fn string(s: impl Into<String>) -> Self {
        Value::Str(s.into())
    }

    /// Try to convert to an integer.
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Value::Int(n) => Some(*n),
            _ => None,
        }
    }

    /// Try to convert to a double, promoting integers.
    ///
    /// Promotion is the numeric widening used by mixed-operand arithmetic:
    /// `Int` operands become `Double` before the operation is applied.
    pub fn as_double(&self) -> Option<f64> {
        match self {
            Value::Double(f) => Some(*f),
            Value::Int(n) => {
                // Use i32 for lossless f64 conversion when possible
                if let Ok(small) = i32::try_from(*n) {
                    Some(f64::from(small))
                } else {
                    // For larger values, use string parsing to avoid cast warning
                    Some(format!("{n}").parse().unwrap_or(f64::NAN))
                }
            }
            _ => None,
        }
    }

    /// Try to convert to a boolean.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Try to convert to a string slice.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Str(s) => Some(s),
            _ => None,
        }
    }

    /// Check for the null value.
    #[inline]
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Get the type name for error messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Null => "Null",
            Value::Bool(_) => "Bool",
            Value::Int(_) => "Int",
            Value::Double(_) => "Double",
            Value::Str(_) => "String",
        }
    }
}

impl fmt::Display for Value {
    /// Canonical stringification: `null`, bare booleans and numbers, and
    /// string contents without quotes.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => write!(f, "null"),
            Value::Bool(b) => write!(f, "{b}"),
            Value::Int(n) => write!(f, "{n}"),
            Value::Double(d) => write!(f, "{d}"),
            Value::Str(s) => write!(f, "{s}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn display_is_canonical() {
        assert_eq!(Value::Null.to_string(), "null");
        assert_eq!(Value::Bool(true).to_string(), "true");
        assert_eq!(Value::Int(42).to_string(), "42");
        assert_eq!(Value::Double(2.5).to_string(), "2.5");
        assert_eq!(Value::string("hello").to_string(), "hello");
    }

    #[test]
    fn display_strings_are_unquoted() {
        // Concatenation and print both rely on verbatim string contents.
        assert_eq!(Value::string("").to_string(), "");
        assert_eq!(Value::string("a b").to_string(), "a b");
    }

    #[test]
    fn accessors_match_kind() {
        assert_eq!(Value::Int(7).as_int(), Some(7));
        assert_eq!(Value::Bool(false).as_int(), None);
        assert_eq!(Value::Bool(true).as_bool(), Some(true));
        assert_eq!(Value::string("x").as_str(), Some("x"));
        assert!(Value::Null.is_null());
        assert!(!Value::Int(0).is_null());
    }

    #[test]
    fn as_double_promotes_int() {
        assert_eq!(Value::Int(3).as_double(), Some(3.0));
        assert_eq!(Value::Double(1.5).as_double(), Some(1.5));
        assert_eq!(Value::string("3").as_double(), None);
    }

    #[test]
    fn as_double_promotes_large_int_exactly() {
        // 2^62 is exactly representable in f64.
        let big = 1_i64 << 62;
        assert_eq!(Value::Int(big).as_double(), Some(4_611_686_018_427_387_904.0));
    }

    #[test]
    fn type_names() {
        assert_eq!(Value::Null.type_name(), "Null");
        assert_eq!(Value::Bool(true).type_name(), "Bool");
        assert_eq!(Value::Int(1).type_name(), "Int");
        assert_eq!(Value::Double(1.0).type_name(), "Double");
        assert_eq!(Value::string("s").type_name(), "String");
    }

    #[test]
    fn equality_is_structural() {
        assert_eq!(Value::Int(42), Value::Int(42));
        assert_ne!(Value::Int(42), Value::Int(43));
        assert_ne!(Value::Int(1), Value::Double(1.0));
        assert_eq!(Value::string("hi"), Value::string("hi"));
        assert_eq!(Value::Null, Value::Null);
    }
}
