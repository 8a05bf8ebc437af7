//! Per-run session state.

use serde::{Deserialize, Serialize};

/// Mutable state shared by one script run.
///
/// Created when the executor is built, mutated only by directive effects,
/// dropped with the executor. The surrounding harness reads
/// [`logging_enabled`](SessionContext::logging_enabled) to decide whether
/// to emit diagnostics for subsequent commands.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionContext {
    logging: bool,
}

impl SessionContext {
    /// A fresh context. Logging starts enabled.
    pub fn new() -> Self {
        Self { logging: true }
    }

    /// Whether diagnostic logging is currently on.
    pub fn logging_enabled(&self) -> bool {
        self.logging
    }

    /// Turn diagnostic logging on or off.
    pub fn set_logging(&mut self, enabled: bool) {
        self.logging = enabled;
    }
}

impl Default for SessionContext {
    fn default() -> Self {
        Self::new()
    }
}
