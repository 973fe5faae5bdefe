use super::QuoteStore;
use crate::error::{QuotezError, Result};
use crate::model::Quote;

/// In-memory storage. Does NOT persist data.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    quotes: Vec<Quote>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.quotes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.quotes.is_empty()
    }
}

impl QuoteStore for InMemoryStore {
    fn list_quotes(&self) -> Vec<Quote> {
        self.quotes.clone()
    }

    fn add_quote(&mut self, quote: Quote) -> Result<()> {
        if self.quotes.contains(&quote) {
            return Err(QuotezError::DuplicateEntry);
        }
        self.quotes.push(quote);
        Ok(())
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::model::QuoteVariant;

    pub struct StoreFixture {
        pub store: InMemoryStore,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                store: InMemoryStore::new(),
            }
        }

        pub fn with_quotes(mut self, texts: &[&str]) -> Self {
            for text in texts {
                self.store
                    .add_quote(Quote::new(*text, QuoteVariant::Normal))
                    .unwrap();
            }
            self
        }

        pub fn with_quote(mut self, text: &str, variant: QuoteVariant) -> Self {
            self.store.add_quote(Quote::new(text, variant)).unwrap();
            self
        }
    }
}
