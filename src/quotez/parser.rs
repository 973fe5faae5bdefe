//! # Command Grammar
//!
//! ```text
//! quote list
//! quote [uwu | piglatin] "<text>"
//! quote [uwu | piglatin] “<text>”
//! ```
//!
//! Parsing stops at the intent: it validates the grammar and the raw length
//! ceiling, but running the variant engine is left to the add command.

use crate::error::{QuotezError, Result};
use crate::model::{text_len, QuoteVariant};
use tracing::debug;

const ACTION: &str = "quote";
const LIST: &str = "list";

/// Accepted delimiter pairs, as (opening, closing).
const DELIMITERS: &[(char, char)] = &[('"', '"'), ('“', '”')];

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandIntent {
    List,
    Add {
        raw_text: String,
        variant: QuoteVariant,
    },
}

/// Parses one command line. `max_len` bounds the untransformed text.
pub fn parse_command(line: &str, max_len: usize) -> Result<CommandIntent> {
    let rest = line
        .trim()
        .strip_prefix(ACTION)
        .filter(|rest| rest.starts_with(char::is_whitespace))
        .map(str::trim_start)
        .ok_or(QuotezError::InvalidCommand)?;

    if rest == LIST {
        debug!("parsed list intent");
        return Ok(CommandIntent::List);
    }

    let (variant, quoted) = split_variant(rest);
    let raw_text = unquote(quoted).ok_or(QuotezError::InvalidCommand)?;

    if text_len(raw_text) > max_len {
        return Err(QuotezError::QuoteTooLong);
    }

    debug!(%variant, raw_text, "parsed add intent");
    Ok(CommandIntent::Add {
        raw_text: raw_text.to_string(),
        variant,
    })
}

/// Peels a leading variant keyword off `rest`. Anything that is not exactly a
/// keyword followed by whitespace leaves `rest` whole, as a Normal quote.
fn split_variant(rest: &str) -> (QuoteVariant, &str) {
    rest.split_once(char::is_whitespace)
        .and_then(|(word, tail)| {
            QuoteVariant::from_keyword(word).map(|variant| (variant, tail.trim_start()))
        })
        .unwrap_or((QuoteVariant::Normal, rest))
}

/// Strips a matched delimiter pair. Returns `None` for mixed or missing delimiters.
fn unquote(quoted: &str) -> Option<&str> {
    DELIMITERS.iter().find_map(|&(open, close)| {
        quoted
            .strip_prefix(open)
            .and_then(|inner| inner.strip_suffix(close))
    })
}
