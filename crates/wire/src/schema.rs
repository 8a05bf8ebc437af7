//! Positional-argument schema for the command language.
//!
//! Most commands accept their arguments either positionally or as explicit
//! `--name value` pairs. The schema table records, per command name, which
//! argument names positional values map onto, in order. A command without
//! an entry takes no positional arguments; only its `--name value` pairs
//! are honored.
//!
//! The built-in table covers the stock command set. `load` deliberately
//! maps only `table`: its record data arrives as the bulk block following
//! the command line, not positionally.

use std::collections::HashMap;

use once_cell::sync::Lazy;

/// Built-in positional orders for the stock command set.
static BUILTIN: Lazy<HashMap<&'static str, &'static [&'static str]>> = Lazy::new(|| {
    let mut table: HashMap<&'static str, &'static [&'static str]> = HashMap::new();
    table.insert("cache_limit", &["max"]);
    table.insert(
        "column_create",
        &["table", "name", "flags", "type", "source"],
    );
    table.insert("column_list", &["table"]);
    table.insert("column_remove", &["table", "name"]);
    table.insert("delete", &["table", "key", "id", "filter"]);
    table.insert("dump", &["tables"]);
    table.insert("load", &["table"]);
    table.insert("log_level", &["level"]);
    table.insert("log_put", &["level", "message"]);
    table.insert("register", &["path"]);
    table.insert(
        "select",
        &[
            "table",
            "match_columns",
            "query",
            "filter",
            "scorer",
            "sortby",
            "output_columns",
            "offset",
            "limit",
            "drilldown",
            "drilldown_sortby",
            "drilldown_output_columns",
            "drilldown_offset",
            "drilldown_limit",
        ],
    );
    table.insert("suggest", &["types", "table", "column", "query"]);
    table.insert(
        "table_create",
        &["name", "flags", "key_type", "value_type", "default_tokenizer"],
    );
    table.insert("table_remove", &["name"]);
    table
});

/// Mapping from command name to its ordered positional argument names.
#[derive(Debug, Clone)]
pub struct SchemaTable {
    commands: HashMap<String, Vec<String>>,
}

impl SchemaTable {
    /// A table with no positional mappings at all.
    pub fn empty() -> Self {
        Self {
            commands: HashMap::new(),
        }
    }

    /// The built-in table for the stock command set.
    pub fn builtin() -> Self {
        let commands = BUILTIN
            .iter()
            .map(|(name, args)| {
                let args = args.iter().map(|a| a.to_string()).collect();
                (name.to_string(), args)
            })
            .collect();
        Self { commands }
    }

    /// Define or replace the positional argument names of one command.
    pub fn define<I, S>(&mut self, command: &str, arguments: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.commands.insert(
            command.to_string(),
            arguments.into_iter().map(Into::into).collect(),
        );
        self
    }

    /// The positional argument name at `index` for `command`, if mapped.
    pub fn positional(&self, command: &str, index: usize) -> Option<&str> {
        self.commands
            .get(command)
            .and_then(|args| args.get(index))
            .map(String::as_str)
    }
}

impl Default for SchemaTable {
    fn default() -> Self {
        Self::builtin()
    }
}
