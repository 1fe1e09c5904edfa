//! Console capability handles.
//!
//! Output and input go through shared handles so callers choose the
//! destination:
//! - Native: real stdout/stdin (default)
//! - Tests: buffers for capture and pre-seeded lines
//!
//! # Performance
//! Uses enum dispatch instead of trait objects for O(1) static dispatch
//! on this frequently-used path.

use parking_lot::Mutex;
use std::collections::VecDeque;
use std::sync::Arc;

/// Print destination using enum dispatch.
pub enum PrintSink {
    /// Writes to stdout (default).
    Stdout,
    /// Captures to a buffer (testing).
    Buffer(Mutex<String>),
    /// Discards all output silently.
    Silent,
}

impl PrintSink {
    /// Print a line (with newline).
    pub fn println(&self, msg: &str) {
        match self {
            Self::Stdout => println!("{msg}"),
            Self::Buffer(buffer) => {
                let mut buf = buffer.lock();
                buf.push_str(msg);
                buf.push('\n');
            }
            Self::Silent => {}
        }
    }

    /// Get all captured output.
    ///
    /// Returns empty string for sinks that don't capture (stdout, silent).
    pub fn captured(&self) -> String {
        match self {
            Self::Buffer(buffer) => buffer.lock().clone(),
            Self::Stdout | Self::Silent => String::new(),
        }
    }

    /// Clear captured output.
    ///
    /// No-op for sinks that don't capture.
    pub fn clear(&self) {
        if let Self::Buffer(buffer) = self {
            buffer.lock().clear();
        }
    }
}

/// Input origin using enum dispatch.
pub enum InputSource {
    /// Reads from stdin.
    Stdin,
    /// Pops pre-seeded lines (testing).
    Buffer(Mutex<VecDeque<String>>),
    /// Always at end of input.
    Empty,
}

impl InputSource {
    /// Read one line, without the trailing newline.
    ///
    /// End of input yields the empty string; reading never fails.
    pub fn read_line(&self) -> String {
        match self {
            Self::Stdin => {
                let mut line = String::new();
                if std::io::stdin().read_line(&mut line).is_ok() {
                    while line.ends_with('\n') || line.ends_with('\r') {
                        line.pop();
                    }
                }
                line
            }
            Self::Buffer(lines) => lines.lock().pop_front().unwrap_or_default(),
            Self::Empty => String::new(),
        }
    }
}

/// Shared print sink passed around as a capability handle.
pub type SharedPrintSink = Arc<PrintSink>;

/// Shared input source passed around as a capability handle.
pub type SharedInputSource = Arc<InputSource>;

/// Create a default stdout print sink.
pub fn stdout_sink() -> SharedPrintSink {
    Arc::new(PrintSink::Stdout)
}

/// Create a buffer print sink for capturing output.
pub fn buffer_sink() -> SharedPrintSink {
    Arc::new(PrintSink::Buffer(Mutex::new(String::new())))
}

/// Create a silent print sink that discards all output.
pub fn silent_sink() -> SharedPrintSink {
    Arc::new(PrintSink::Silent)
}

/// Create a stdin input source.
pub fn stdin_source() -> SharedInputSource {
    Arc::new(InputSource::Stdin)
}

/// Create an input source pre-seeded with lines.
pub fn buffer_source<I, S>(lines: I) -> SharedInputSource
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let lines = lines.into_iter().map(Into::into).collect();
    Arc::new(InputSource::Buffer(Mutex::new(lines)))
}

/// Create an input source that is always at end of input.
pub fn empty_source() -> SharedInputSource {
    Arc::new(InputSource::Empty)
}
