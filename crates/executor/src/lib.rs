//! # grnscript Executor
//!
//! Drives a command script against a server, one line at a time. This is
//! the stateful half of grnscript: the translator from `grnscript-wire`
//! does the line-to-request work, while this crate owns the session
//! context, the in-band `#` directives and the run loop.
//!
//! ## Quick Start
//!
//! ```ignore
//! use grnscript_executor::ScriptExecutor;
//!
//! let transport = HttpTransport::connect("localhost:10041")?;
//! let mut executor = ScriptExecutor::new(Box::new(transport));
//! executor.execute("suite/select.grn")?;
//! ```
//!
//! ## Script handling
//!
//! | Line | Handling |
//! |------|----------|
//! | blank | closes an open load block, otherwise skipped |
//! | `# <directive>` | applied to the session, not forwarded |
//! | other `#` comment | forwarded to the transport unchanged |
//! | command | translated and forwarded |
//! | load data | folded into the pending load request |

#![warn(missing_docs)]

mod context;
mod directive;
mod error;
mod executor;
mod transport;


// =============================================================================
// Public API
// =============================================================================

pub use context::SessionContext;
pub use directive::{parse_directive, Directive};
pub use error::Error;
pub use executor::{ExecutorOptions, ScriptExecutor};
pub use transport::{SuggestDataset, Transport};

// Re-export the wire types callers need alongside the executor
pub use grnscript_wire::{SchemaTable, Translation, Translator};

/// Result type for executor operations.
pub type Result<T> = std::result::Result<T, Error>;
