//! Line-to-request translation.
//!
//! [`Translator::translate`] maps one line of the command language to its
//! HTTP-equivalent form. Translation is line-by-line and mostly stateless;
//! the one stateful part is the bulk-load block: a `load` command line
//! without inline values switches the translator into collecting mode, and
//! every following line renders as a `values=` continuation fragment until
//! the caller closes the block with [`Translator::finish_load`].
//!
//! ## Rules
//!
//! - `#` lines pass through unchanged, even inside a load block.
//! - A command renders as `/d/<name>`, plus `?name=value&...` when it has
//!   arguments, values percent-encoded, insertion order preserved.
//! - Load-block data lines render as `&values=<line>` for the first line
//!   and `%0A<line>` for each one after, so the folded request stays a
//!   single-line URL.

use serde::{Deserialize, Serialize};

use crate::command::ParsedCommand;
use crate::encode::encode_component;
use crate::lexer::tokenize;
use crate::schema::SchemaTable;
use crate::Result;

/// Path prefix shared by every rendered request.
const PATH_PREFIX: &str = "/d/";

/// Encoded newline separating bulk-data lines inside a `values=` segment.
const VALUES_SEPARATOR: &str = "%0A";

/// The result of translating one input line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Translation {
    /// A `#` line, passed through unchanged.
    Comment(String),
    /// A complete rendered request: path plus optional query string.
    Request(String),
    /// The rendered `load` request that opens a bulk-data block.
    LoadHeader(String),
    /// A continuation fragment for the open block: `&values=...` for the
    /// first data line, `%0A...` for each one after.
    ValuesFragment(String),
}

impl Translation {
    /// Textual form of the translation.
    pub fn as_str(&self) -> &str {
        match self {
            Translation::Comment(text)
            | Translation::Request(text)
            | Translation::LoadHeader(text)
            | Translation::ValuesFragment(text) => text,
        }
    }

    /// Consume the translation into its textual form.
    pub fn into_string(self) -> String {
        match self {
            Translation::Comment(text)
            | Translation::Request(text)
            | Translation::LoadHeader(text)
            | Translation::ValuesFragment(text) => text,
        }
    }
}

impl std::fmt::Display for Translation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Load-block state.
#[derive(Debug, Clone, PartialEq)]
enum LoadMode {
    Idle,
    /// Collecting bulk-data lines. Holds the request accumulated so far
    /// and whether any data line has been folded in yet.
    Collecting { pending: String, has_values: bool },
}

/// Translates command-language lines into HTTP request strings.
#[derive(Debug, Clone)]
pub struct Translator {
    schema: SchemaTable,
    mode: LoadMode,
}

impl Translator {
    /// A translator with the built-in schema table.
    pub fn new() -> Self {
        Self::with_schema(SchemaTable::builtin())
    }

    /// A translator with a caller-supplied schema table.
    pub fn with_schema(schema: SchemaTable) -> Self {
        Self {
            schema,
            mode: LoadMode::Idle,
        }
    }

    /// True while a `load` bulk-data block is open.
    pub fn in_load_block(&self) -> bool {
        matches!(self.mode, LoadMode::Collecting { .. })
    }

    /// Translate one input line.
    ///
    /// A trailing line terminator is stripped first, so lines may come
    /// straight from a buffered reader.
    pub fn translate(&mut self, line: &str) -> Result<Translation> {
        let line = chomp(line);

        if line.trim_start().starts_with('#') {
            return Ok(Translation::Comment(line.to_string()));
        }

        if let LoadMode::Collecting { pending, has_values } = &mut self.mode {
            let encoded = encode_component(line);
            let fragment = if *has_values {
                format!("{}{}", VALUES_SEPARATOR, encoded)
            } else {
                format!("&values={}", encoded)
            };
            *has_values = true;
            pending.push_str(&fragment);
            return Ok(Translation::ValuesFragment(fragment));
        }

        let command = ParsedCommand::from_tokens(tokenize(line)?, &self.schema)?;
        let rendered = render(&command);

        if command.name == "load" && !command.arguments.contains_key("values") {
            self.mode = LoadMode::Collecting {
                pending: rendered.clone(),
                has_values: false,
            };
            return Ok(Translation::LoadHeader(rendered));
        }

        Ok(Translation::Request(rendered))
    }

    /// Close an open bulk-data block.
    ///
    /// Returns the complete accumulated request, header and all folded
    /// data lines, and resets the translator to idle. `None` when no
    /// block is open.
    pub fn finish_load(&mut self) -> Option<String> {
        match std::mem::replace(&mut self.mode, LoadMode::Idle) {
            LoadMode::Collecting { pending, .. } => Some(pending),
            LoadMode::Idle => None,
        }
    }
}

impl Default for Translator {
    fn default() -> Self {
        Self::new()
    }
}

/// Strip one trailing line terminator, `\n` or `\r\n`.
fn chomp(line: &str) -> &str {
    let line = line.strip_suffix('\n').unwrap_or(line);
    line.strip_suffix('\r').unwrap_or(line)
}

/// Render a parsed command as path plus query string.
fn render(command: &ParsedCommand) -> String {
    let mut rendered = format!("{}{}", PATH_PREFIX, command.name);
    for (index, (name, value)) in command.arguments.iter().enumerate() {
        rendered.push(if index == 0 { '?' } else { '&' });
        rendered.push_str(&encode_component(name));
        rendered.push('=');
        rendered.push_str(&encode_component(value));
    }
    rendered
}
