#![expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
//! Tests for baseline native functions.
//!
//! Relocated from `builtins.rs` per coding guidelines (>200 lines).

use crate::builtins::{native_input, native_print, native_typeof, NativeCtx};
use crate::console::{buffer_sink, buffer_source, empty_source, silent_sink};
use nyx_value::{EvalErrorKind, Value};
use pretty_assertions::assert_eq;

fn capture_ctx() -> NativeCtx {
    NativeCtx::with_handles(buffer_sink(), empty_source())
}

#[test]
fn test_print_joins_arguments_with_spaces() {
    let ctx = capture_ctx();
    let result = native_print(
        &ctx,
        &[Value::Int(1), Value::string("two"), Value::Bool(true)],
    )
    .unwrap();

    assert_eq!(result, Value::Null);
    assert_eq!(ctx.print.captured(), "1 two true\n");
}

#[test]
fn test_print_with_no_arguments_emits_a_blank_line() {
    let ctx = capture_ctx();
    native_print(&ctx, &[]).unwrap();
    assert_eq!(ctx.print.captured(), "\n");
}

#[test]
fn test_print_uses_canonical_forms() {
    let ctx = capture_ctx();
    native_print(&ctx, &[Value::Null, Value::Double(1.5)]).unwrap();
    assert_eq!(ctx.print.captured(), "null 1.5\n");
}

#[test]
fn test_typeof_names_each_tag() {
    let ctx = NativeCtx::with_handles(silent_sink(), empty_source());
    let cases = [
        (Value::Null, "Null"),
        (Value::Bool(true), "Bool"),
        (Value::Int(0), "Int"),
        (Value::Double(0.0), "Double"),
        (Value::string(""), "String"),
    ];
    for (value, expected) in cases {
        assert_eq!(
            native_typeof(&ctx, &[value]).unwrap(),
            Value::string(expected)
        );
    }
}

#[test]
fn test_typeof_requires_exactly_one_argument() {
    let ctx = NativeCtx::with_handles(silent_sink(), empty_source());

    let err = native_typeof(&ctx, &[]).unwrap_err();
    assert_eq!(
        err.kind,
        EvalErrorKind::ArityMismatch {
            name: "typeof".to_string(),
            expected: 1,
            got: 0
        }
    );
    assert_eq!(err.message, "typeof expects 1 argument, got 0");

    assert!(native_typeof(&ctx, &[Value::Null, Value::Null]).is_err());
}

#[test]
fn test_input_reads_seeded_lines_in_order() {
    let ctx = NativeCtx::with_handles(silent_sink(), buffer_source(["first", "second"]));

    assert_eq!(native_input(&ctx, &[]).unwrap(), Value::string("first"));
    assert_eq!(native_input(&ctx, &[]).unwrap(), Value::string("second"));
}

#[test]
fn test_input_at_end_of_input_yields_empty_string() {
    let ctx = NativeCtx::with_handles(silent_sink(), empty_source());
    assert_eq!(native_input(&ctx, &[]).unwrap(), Value::string(""));
}

#[test]
fn test_input_rejects_arguments() {
    let ctx = NativeCtx::with_handles(silent_sink(), empty_source());
    let err = native_input(&ctx, &[Value::Int(1)]).unwrap_err();
    assert_eq!(
        err.kind,
        EvalErrorKind::ArityMismatch {
            name: "input".to_string(),
            expected: 0,
            got: 1
        }
    );
}
