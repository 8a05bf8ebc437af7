//! grnscript - scripted conformance driver core for Groonga-protocol servers
//!
//! grnscript turns the line-oriented command language of a document-store
//! query server into HTTP-style requests and drives whole command scripts
//! against a transport, for conformance testing.
//!
//! # Quick Start
//!
//! ```ignore
//! use grnscript::{ScriptExecutor, Translator};
//!
//! // Translate a single line
//! let mut translator = Translator::new();
//! let request = translator.translate("select --table Sites")?;
//! assert_eq!(request.as_str(), "/d/select?table=Sites");
//!
//! // Or drive a whole script against a transport
//! let mut executor = ScriptExecutor::new(Box::new(transport));
//! executor.execute("suite/select.grn")?;
//! ```
//!
//! # Architecture
//!
//! The pure command-language side (lexer, schema table, percent-encoding,
//! translator) lives in `grnscript-wire`; session state, `#` directives
//! and the script run loop live in `grnscript-executor`. This crate
//! re-exports the public API of both.

// Re-export the public API from grnscript-executor (which itself
// re-exports the wire types callers need)
pub use grnscript_executor::*;

// The rest of the wire surface, for callers working below the executor
pub use grnscript_wire::{
    decode_component, encode_component, tokenize, ParsedCommand, Token,
};
