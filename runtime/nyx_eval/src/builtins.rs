//! Baseline native functions.
//!
//! Natives are plain `fn` pointers over a slice of argument values. They
//! receive a `NativeCtx` capability handle instead of touching stdio
//! directly, so tests run them against buffers.

use crate::console::{stdin_source, stdout_sink, SharedInputSource, SharedPrintSink};
use nyx_value::{arity_mismatch, EvalResult, Value};

/// Capability handle passed to every native call.
#[derive(Clone)]
pub struct NativeCtx {
    /// Where `print` writes.
    pub print: SharedPrintSink,
    /// Where `input` reads from.
    pub input: SharedInputSource,
}

impl NativeCtx {
    /// Default handles: real stdout and stdin.
    pub fn new() -> Self {
        NativeCtx {
            print: stdout_sink(),
            input: stdin_source(),
        }
    }

    /// Construct with explicit handles (buffers in tests).
    pub fn with_handles(print: SharedPrintSink, input: SharedInputSource) -> Self {
        NativeCtx { print, input }
    }
}

impl Default for NativeCtx {
    fn default() -> Self {
        Self::new()
    }
}

/// Native function signature.
///
/// Plain `fn` pointer: natives live for the whole program, so registries
/// hold them without owning anything.
pub type NativeFn = fn(&NativeCtx, &[Value]) -> EvalResult;

/// `print(...)`: write the canonical string form of each argument,
/// space-separated and newline-terminated. Accepts any arity.
pub fn native_print(ctx: &NativeCtx, args: &[Value]) -> EvalResult {
    let line = args
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" ");
    ctx.print.println(&line);
    Ok(Value::Null)
}

/// `typeof(x)`: the canonical tag name of the argument.
pub fn native_typeof(_ctx: &NativeCtx, args: &[Value]) -> EvalResult {
    match args {
        [value] => Ok(Value::string(value.type_name())),
        _ => Err(arity_mismatch("typeof", 1, args.len())),
    }
}

/// `input()`: read one line from the input source.
///
/// End of input yields the empty string rather than an error.
pub fn native_input(ctx: &NativeCtx, args: &[Value]) -> EvalResult {
    if !args.is_empty() {
        return Err(arity_mismatch("input", 0, args.len()));
    }
    Ok(Value::string(ctx.input.read_line()))
}
