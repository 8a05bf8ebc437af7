//! Parsed representation of a single command line.

use indexmap::IndexMap;

use crate::lexer::Token;
use crate::schema::SchemaTable;
use crate::{Error, Result};

/// A command line parsed into its name and named arguments.
///
/// The argument map preserves insertion order: positionals land first, in
/// schema order, then explicit `--name value` pairs in the order they
/// appear. An explicit flag overriding a positionally filled argument
/// replaces the value but keeps the original slot.
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedCommand {
    /// Command name, the first token of the line.
    pub name: String,
    /// Argument name to value, in insertion order.
    pub arguments: IndexMap<String, String>,
}

impl ParsedCommand {
    /// Build a command from lexed tokens, using `schema` for positionals.
    pub fn from_tokens(tokens: Vec<Token>, schema: &SchemaTable) -> Result<Self> {
        let mut tokens = tokens.into_iter();
        let name = match tokens.next() {
            Some(token) => token.text,
            None => return Err(Error::EmptyCommand),
        };

        let mut arguments = IndexMap::new();
        let mut position = 0;
        while let Some(token) = tokens.next() {
            if let Some(flag) = token.flag_name() {
                let flag = flag.to_string();
                let value = tokens.next().ok_or(Error::MissingValue { flag: token.text })?;
                arguments.insert(flag, argument_value(value));
            } else {
                // Positionals beyond the schema's list are dropped.
                if let Some(arg_name) = schema.positional(&name, position) {
                    arguments.insert(arg_name.to_string(), argument_value(token));
                }
                position += 1;
            }
        }

        Ok(Self { name, arguments })
    }
}

/// Argument value text. Values from quoted spans drop all interior
/// whitespace: `'_key, uri'` becomes `_key,uri`.
fn argument_value(token: Token) -> String {
    if token.quoted {
        token.text.split_whitespace().collect()
    } else {
        token.text
    }
}
