//! # Variant Engine
//!
//! Pure text rewrites, one per [`QuoteVariant`]. The engine assumes its input
//! already passed the pre-transform length check done by the parser; it only
//! enforces the ceiling on what it produces.
//!
//! Two result channels come out of [`transform`]:
//! - `Err(..)` rejects the whole add (`NoOpTransformation` for uwu,
//!   `QuoteTooLong` for pig-latin).
//! - `Ok(Transformation)` carries the text plus an optional [`Advisory`] for
//!   the uwu stutter pass, which degrades word by word instead of failing.

use crate::error::{QuotezError, Result};
use crate::model::{text_len, QuoteVariant};
use std::fmt;
use tracing::debug;

const VOWELS: &[char] = &['a', 'e', 'i', 'o', 'u', 'A', 'E', 'I', 'O', 'U'];

/// Non-fatal notes attached to a successful transformation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Advisory {
    /// Some words were left unstuttered to stay under the length ceiling.
    PartiallyTransformed,
}

impl fmt::Display for Advisory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Advisory::PartiallyTransformed => {
                f.write_str("Quote too long, only partially transformed")
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transformation {
    pub text: String,
    pub advisory: Option<Advisory>,
}

impl Transformation {
    fn complete(text: String) -> Self {
        Self {
            text,
            advisory: None,
        }
    }
}

/// Renders `raw` in the given variant, keeping the result within `max_len` characters.
pub fn transform(raw: &str, variant: QuoteVariant, max_len: usize) -> Result<Transformation> {
    match variant {
        QuoteVariant::Normal => Ok(Transformation::complete(raw.to_string())),
        QuoteVariant::Uwu => uwu(raw, max_len),
        QuoteVariant::PigLatin => pig_latin(raw, max_len),
    }
}

/// The letter pass of uwu mode. Never changes the length.
pub fn substitute(text: &str) -> String {
    text.chars()
        .map(|c| match c {
            'l' | 'r' => 'w',
            'L' | 'R' => 'W',
            other => other,
        })
        .collect()
}

fn uwu(raw: &str, max_len: usize) -> Result<Transformation> {
    let substituted = substitute(raw);
    let mut len = text_len(&substituted);
    let mut advisory = None;
    let mut words = Vec::new();

    for word in substituted.split(' ') {
        match word.chars().next() {
            Some(first @ ('u' | 'U')) => {
                // The stutter adds the first letter plus a hyphen
                if len + 2 > max_len {
                    debug!(word, len, max_len, "skipping stutter, quote would be too long");
                    advisory = Some(Advisory::PartiallyTransformed);
                    words.push(word.to_string());
                } else {
                    len += 2;
                    words.push(format!("{}-{}", first, word));
                }
            }
            _ => words.push(word.to_string()),
        }
    }

    let text = words.join(" ");
    if text == raw {
        return Err(QuotezError::NoOpTransformation);
    }

    Ok(Transformation { text, advisory })
}

fn pig_latin(raw: &str, max_len: usize) -> Result<Transformation> {
    let text = raw
        .split_whitespace()
        .map(pig_latin_word)
        .collect::<Vec<_>>()
        .join(" ");

    if text_len(&text) > max_len {
        debug!(len = text_len(&text), max_len, "pig-latin result over the ceiling");
        return Err(QuotezError::QuoteTooLong);
    }

    Ok(Transformation::complete(text))
}

fn pig_latin_word(word: &str) -> String {
    let rotated = match word.find(VOWELS) {
        Some(0) => format!("{}way", word),
        Some(i) => format!("{}{}ay", &word[i..], word[..i].to_lowercase()),
        None => format!("{}ay", word),
    };

    if word.starts_with(|c: char| c.is_uppercase()) {
        capitalize(&rotated)
    } else {
        rotated
    }
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
