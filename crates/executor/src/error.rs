//! Error types for script execution.
//!
//! All errors from driving a script are represented by the [`Error`] enum.
//! These errors are:
//! - **Structured**: Each variant has typed fields for error details
//! - **Serializable**: Can be converted to/from JSON
//! - **Fail-fast**: The first one aborts the run; nothing is retried
//!
//! Infrastructure failures (I/O, transport) are stored as plain `reason`
//! strings so the enum stays serializable end to end.

use serde::{Deserialize, Serialize};

/// Script execution errors.
///
/// # Categories
///
/// | Category | Variants | Description |
/// |----------|----------|-------------|
/// | Translation | `Translate` | A line failed to lex or translate |
/// | Directive | `MissingDirectiveArgument`, `SuggestUnavailable` | Bad or unservable directive |
/// | System | `Io`, `Transport` | Infrastructure failures |
///
/// # Example
///
/// ```ignore
/// use grnscript_executor::{Error, ScriptExecutor};
///
/// match executor.execute(script) {
///     Ok(()) => { /* all lines dispatched */ }
///     Err(Error::Transport { reason }) => {
///         eprintln!("server unreachable: {}", reason);
///     }
///     Err(e) => {
///         eprintln!("run aborted: {}", e);
///     }
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, thiserror::Error)]
pub enum Error {
    // ==================== Translation ====================
    /// A script line failed to lex or translate.
    #[error("translation failed: {0}")]
    Translate(#[from] grnscript_wire::Error),

    // ==================== Directives ====================
    /// A directive that requires an argument had none.
    #[error("missing argument for directive: {directive}")]
    MissingDirectiveArgument {
        /// The directive keyword, e.g. `suggest-create-dataset`.
        directive: String,
    },

    /// A suggest directive was seen but no suggest collaborator is
    /// registered on the executor.
    #[error("no suggest dataset handler registered (dataset: {dataset})")]
    SuggestUnavailable {
        /// The dataset the directive asked for.
        dataset: String,
    },

    // ==================== System ====================
    /// Reading the script failed.
    #[error("io error: {reason}")]
    Io {
        /// The underlying I/O failure.
        reason: String,
    },

    /// The transport collaborator failed to send a request.
    #[error("transport error: {reason}")]
    Transport {
        /// The collaborator's failure description.
        reason: String,
    },
}

impl Error {
    /// Build a transport error from any displayable failure.
    ///
    /// For [`Transport`](crate::Transport) implementations wrapping their
    /// own error types.
    pub fn transport(reason: impl std::fmt::Display) -> Self {
        Error::Transport {
            reason: reason.to_string(),
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io {
            reason: err.to_string(),
        }
    }
}
