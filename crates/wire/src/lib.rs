//! # grnscript Wire
//!
//! The command-language side of grnscript: everything needed to turn one
//! line of the space-delimited command language into its HTTP-equivalent
//! request string.
//!
//! This crate is pure: no I/O, no logging, no session state beyond the
//! translator's own load-block mode. Script driving, directives and
//! transport live in `grnscript-executor`.
//!
//! ## Pipeline
//!
//! | Stage | Type | Job |
//! |-------|------|-----|
//! | Lex | [`tokenize`] | split a line into quote-aware [`Token`]s |
//! | Parse | [`ParsedCommand`] | name + ordered argument map, via [`SchemaTable`] |
//! | Render | [`Translator`] | `/d/<command>?<query>`, load-block folding |
//!
//! ## Quick Start
//!
//! ```ignore
//! use grnscript_wire::{Translation, Translator};
//!
//! let mut translator = Translator::new();
//! let out = translator.translate("select --table Sites")?;
//! assert_eq!(out.as_str(), "/d/select?table=Sites");
//! ```

#![warn(missing_docs)]

mod command;
mod encode;
mod error;
mod lexer;
mod schema;
mod translate;

pub use command::ParsedCommand;
pub use encode::{decode_component, encode_component};
pub use error::Error;
pub use lexer::{tokenize, Token};
pub use schema::SchemaTable;
pub use translate::{Translation, Translator};

/// Result type for wire operations.
pub type Result<T> = std::result::Result<T, Error>;
