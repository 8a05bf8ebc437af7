//! Quote-aware tokenizer for command lines.
//!
//! Splits a command line into whitespace-delimited tokens while honoring
//! single- and double-quoted spans:
//! - Quote characters delimit a span and are stripped from the token text.
//! - Whitespace inside a quoted span is preserved.
//! - Adjacent quoted and unquoted segments with no whitespace between them
//!   join into a single token.
//! - Backslash is an ordinary character; the command language has no
//!   escape sequences.
//!
//! An unterminated quote is an error. The tokenizer reports the byte
//! offset of the opening quote instead of silently extending the span to
//! the end of the line.

use crate::{Error, Result};

/// One token of a command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// Token text with quote characters stripped.
    pub text: String,
    /// True when any part of the token came from a quoted span.
    pub quoted: bool,
}

impl Token {
    /// True for an unquoted token that names an argument (`--name`).
    ///
    /// A quoted `'--name'` is a value, not a flag.
    pub fn is_flag(&self) -> bool {
        !self.quoted && self.text.len() > 2 && self.text.starts_with("--")
    }

    /// The argument name of a flag token, without the `--` prefix.
    pub fn flag_name(&self) -> Option<&str> {
        if self.is_flag() {
            Some(&self.text[2..])
        } else {
            None
        }
    }
}

/// Split a command line into tokens.
pub fn tokenize(line: &str) -> Result<Vec<Token>> {
    let mut tokens = Vec::new();
    let mut text = String::new();
    let mut quoted = false;
    let mut in_token = false;
    let mut chars = line.char_indices();

    while let Some((offset, ch)) = chars.next() {
        match ch {
            '\'' | '"' => {
                in_token = true;
                quoted = true;
                let mut closed = false;
                for (_, inner) in chars.by_ref() {
                    if inner == ch {
                        closed = true;
                        break;
                    }
                    text.push(inner);
                }
                if !closed {
                    return Err(Error::UnterminatedQuote { offset });
                }
            }
            c if c.is_whitespace() => {
                if in_token {
                    tokens.push(Token {
                        text: std::mem::take(&mut text),
                        quoted,
                    });
                    quoted = false;
                    in_token = false;
                }
            }
            c => {
                in_token = true;
                text.push(c);
            }
        }
    }

    if in_token {
        tokens.push(Token { text, quoted });
    }
    Ok(tokens)
}
