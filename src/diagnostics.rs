//! Shared diagnostic sink for worker progress output
//!
//! Workers from all threads write progress and error messages through one
//! sink. Access is mutually exclusive so concurrent messages never interleave
//! mid-line. The sink carries diagnostics only; result data is owned per
//! chunk and never passes through here.

use std::io::{self, Write};
use std::sync::{Arc, Mutex, MutexGuard};

enum SinkTarget {
    Stderr,
    Buffer(Vec<u8>),
}

/// Cloneable handle to a mutex-serialized diagnostic writer.
///
/// Defaults to stderr; tests swap in an in-memory buffer.
#[derive(Clone)]
pub struct DiagnosticSink {
    target: Arc<Mutex<SinkTarget>>,
}

impl DiagnosticSink {
    pub fn stderr() -> Self {
        Self {
            target: Arc::new(Mutex::new(SinkTarget::Stderr)),
        }
    }

    pub fn buffer() -> Self {
        Self {
            target: Arc::new(Mutex::new(SinkTarget::Buffer(Vec::new()))),
        }
    }

    /// Lock the sink with poison recovery: a panicked worker must not take
    /// everyone else's diagnostics down with it.
    fn lock(&self) -> MutexGuard<'_, SinkTarget> {
        match self.target.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        }
    }

    /// Write one complete line under the lock.
    pub fn writeln(&self, message: &str) {
        let mut guard = self.lock();
        match &mut *guard {
            SinkTarget::Stderr => {
                let stderr = io::stderr();
                let mut handle = stderr.lock();
                // Diagnostics are best-effort; a closed stderr is not fatal
                let _ = writeln!(handle, "{}", message);
            }
            SinkTarget::Buffer(buf) => {
                let _ = writeln!(buf, "{}", message);
            }
        }
    }

    /// Captured contents for buffer-backed sinks (empty for stderr sinks).
    pub fn captured(&self) -> String {
        match &*self.lock() {
            SinkTarget::Stderr => String::new(),
            SinkTarget::Buffer(buf) => String::from_utf8_lossy(buf).to_string(),
        }
    }
}
