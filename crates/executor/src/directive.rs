//! In-band `#` directives.
//!
//! A script can carry control lines disguised as comments. The first
//! whitespace-delimited word after `#` decides whether the line is a
//! directive; anything unrecognized stays an ordinary comment and flows
//! through translation unchanged.
//!
//! | Line | Directive |
//! |------|-----------|
//! | `# disable-logging` | [`Directive::DisableLogging`] |
//! | `# enable-logging` | [`Directive::EnableLogging`] |
//! | `# suggest-create-dataset <name>` | [`Directive::SuggestCreateDataset`] |
//!
//! Whitespace between `#` and the keyword is insignificant. Words beyond
//! what a directive consumes are ignored.

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// A recognized control directive.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Directive {
    /// Turn session logging off.
    DisableLogging,
    /// Turn session logging back on.
    EnableLogging,
    /// Ask the suggest collaborator to create a dataset.
    SuggestCreateDataset {
        /// Name of the dataset to create.
        dataset: String,
    },
}

/// Parse one script line as a directive.
///
/// Returns `Ok(None)` for anything that is not a directive, including
/// non-`#` lines and ordinary comments. `suggest-create-dataset` without
/// an argument is an error rather than a silent no-op.
pub fn parse_directive(line: &str) -> Result<Option<Directive>> {
    let Some(body) = line.trim_start().strip_prefix('#') else {
        return Ok(None);
    };

    let mut words = body.split_whitespace();
    let directive = match words.next() {
        Some("disable-logging") => Directive::DisableLogging,
        Some("enable-logging") => Directive::EnableLogging,
        Some("suggest-create-dataset") => {
            let dataset = words.next().ok_or_else(|| Error::MissingDirectiveArgument {
                directive: "suggest-create-dataset".to_string(),
            })?;
            Directive::SuggestCreateDataset {
                dataset: dataset.to_string(),
            }
        }
        _ => return Ok(None),
    };
    Ok(Some(directive))
}
