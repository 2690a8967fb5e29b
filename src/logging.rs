//! Logger handle shared with every plugin.
//!
//! Production code uses [`Logger::real()`] which emits through the `tracing`
//! macros. Tests use [`Logger::capture()`] backed by a shared buffer, so
//! assertions can inspect exactly what a plugin logged during construction
//! without installing a subscriber.

use std::sync::{Arc, Mutex};

/// Cloneable logging handle.
///
/// Clones share the same capture buffer, so a plugin holding a clone and the
/// test holding the original observe the same entries.
#[derive(Clone, Debug, Default)]
pub struct Logger {
    captured: Option<Arc<Mutex<Vec<String>>>>,
}

impl Logger {
    /// Create a logger that forwards to the global `tracing` subscriber.
    pub fn real() -> Self {
        Self { captured: None }
    }

    /// Create a logger that records entries instead of emitting them.
    pub fn capture() -> Self {
        Self {
            captured: Some(Arc::new(Mutex::new(Vec::new()))),
        }
    }

    /// Log at INFO level.
    pub fn info(&self, msg: impl AsRef<str>) {
        match &self.captured {
            Some(buf) => self.push(buf, "INFO", msg.as_ref()),
            None => tracing::info!("{}", msg.as_ref()),
        }
    }

    /// Log at DEBUG level.
    pub fn debug(&self, msg: impl AsRef<str>) {
        match &self.captured {
            Some(buf) => self.push(buf, "DEBUG", msg.as_ref()),
            None => tracing::debug!("{}", msg.as_ref()),
        }
    }

    /// Entries recorded by a capturing logger, in emission order.
    ///
    /// Always empty for a [`Logger::real()`] handle.
    pub fn entries(&self) -> Vec<String> {
        match &self.captured {
            Some(buf) => buf.lock().unwrap_or_else(|e| e.into_inner()).clone(),
            None => Vec::new(),
        }
    }

    fn push(&self, buf: &Mutex<Vec<String>>, level: &str, msg: &str) {
        buf.lock()
            .unwrap_or_else(|e| e.into_inner())
            .push(format!("{level} {msg}"));
    }
}
