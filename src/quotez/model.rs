use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Upper bound on a quote's length, in characters.
pub const MAX_QUOTE_LENGTH: usize = 50;

/// The rendering mode a quote was added with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QuoteVariant {
    #[default]
    Normal,
    Uwu,
    PigLatin,
}

impl QuoteVariant {
    pub fn as_str(&self) -> &'static str {
        match self {
            QuoteVariant::Normal => "normal",
            QuoteVariant::Uwu => "uwu",
            QuoteVariant::PigLatin => "piglatin",
        }
    }

    /// Maps a command keyword to its variant. `normal` is not a keyword:
    /// the Normal variant is selected by leaving the keyword out.
    pub fn from_keyword(word: &str) -> Option<Self> {
        match word {
            "uwu" => Some(QuoteVariant::Uwu),
            "piglatin" => Some(QuoteVariant::PigLatin),
            _ => None,
        }
    }
}

impl fmt::Display for QuoteVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for QuoteVariant {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "normal" => Ok(QuoteVariant::Normal),
            other => {
                QuoteVariant::from_keyword(other).ok_or_else(|| format!("Unknown variant: {}", s))
            }
        }
    }
}

/// An accepted quotation. `text` is what gets displayed, i.e. the output of
/// the variant transformation rather than what the user typed.
#[derive(Debug, Clone)]
pub struct Quote {
    pub text: String,
    pub variant: QuoteVariant,
}

impl Quote {
    pub fn new(text: impl Into<String>, variant: QuoteVariant) -> Self {
        Self {
            text: text.into(),
            variant,
        }
    }
}

// Two quotes are the same entry when they display the same, whatever variant produced them.
impl PartialEq for Quote {
    fn eq(&self, other: &Self) -> bool {
        self.text == other.text
    }
}

impl Eq for Quote {}

impl fmt::Display for Quote {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// Length as the rest of the crate measures it: characters, not bytes.
pub fn text_len(text: &str) -> usize {
    text.chars().count()
}
