//! # Storage Layer
//!
//! The [`QuoteStore`] trait is the collaborator the command layer commits
//! accepted quotes to. It owns exactly two rules:
//! - insertion order is preserved
//! - a quote whose display text is already present is refused with
//!   [`QuotezError::DuplicateEntry`](crate::error::QuotezError::DuplicateEntry)
//!
//! Only [`memory::InMemoryStore`] ships: quotes live for the length of a
//! session and are gone when the process exits.

use crate::error::Result;
use crate::model::Quote;

pub mod memory;

pub trait QuoteStore {
    /// All quotes, in insertion order
    fn list_quotes(&self) -> Vec<Quote>;

    /// Add a quote, failing with `DuplicateEntry` if its text is already stored
    fn add_quote(&mut self, quote: Quote) -> Result<()>;

    /// Display strings of all quotes, in insertion order
    fn get_quotes(&self) -> Vec<String> {
        self.list_quotes().into_iter().map(|q| q.text).collect()
    }
}
