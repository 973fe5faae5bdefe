//! # API Facade
//!
//! A **thin facade** over the command layer and the single entry point for
//! all quotez operations, whatever UI drives them.
//!
//! The facade:
//! - **Normalizes inputs**: a raw command line is parsed into a
//!   [`CommandIntent`] before dispatch
//! - **Dispatches** to `commands::add` or `commands::list`
//! - **Returns structured types** (`Result<CmdResult>`), never strings
//!
//! `QuotezApi<S: QuoteStore>` owns its store. Each API value is one session;
//! tests build a fresh one per case.

use crate::commands;
use crate::config::QuotezConfig;
use crate::error::Result;
use crate::model::{Quote, QuoteVariant};
use crate::parser::{parse_command, CommandIntent};
use crate::store::QuoteStore;
use tracing::debug;

pub struct QuotezApi<S: QuoteStore> {
    store: S,
    max_quote_length: usize,
}

impl<S: QuoteStore> QuotezApi<S> {
    pub fn new(store: S, config: &QuotezConfig) -> Self {
        Self {
            store,
            max_quote_length: config.max_quote_length,
        }
    }

    /// Parses and runs one command line (`quote ...`).
    pub fn run_command(&mut self, line: &str) -> Result<commands::CmdResult> {
        match parse_command(line, self.max_quote_length)? {
            CommandIntent::List => self.list_quotes(),
            CommandIntent::Add { raw_text, variant } => self.add_quote(&raw_text, variant),
        }
    }

    pub fn add_quote(
        &mut self,
        raw_text: &str,
        variant: QuoteVariant,
    ) -> Result<commands::CmdResult> {
        commands::add::run(&mut self.store, raw_text, variant, self.max_quote_length)
    }

    pub fn list_quotes(&self) -> Result<commands::CmdResult> {
        commands::list::run(&self.store)
    }

    /// Preloads Normal quotes, skipping duplicates. Quotes that fail validation are an error.
    pub fn seed<I: AsRef<str>>(&mut self, texts: &[I]) -> Result<()> {
        for text in texts {
            let result = self.add_quote(text.as_ref(), QuoteVariant::Normal)?;
            if result.added_quote.is_none() {
                debug!(text = text.as_ref(), "seed quote already present");
            }
        }
        Ok(())
    }

    pub fn quotes(&self) -> Vec<Quote> {
        self.store.list_quotes()
    }
}

pub use commands::{CmdMessage, CmdResult, MessageLevel};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::QuotezError;
    use crate::store::memory::fixtures::StoreFixture;
    use crate::store::memory::InMemoryStore;

    fn api() -> QuotezApi<InMemoryStore> {
        QuotezApi::new(InMemoryStore::new(), &QuotezConfig::default())
    }

    #[test]
    fn run_command_dispatches_add() {
        let mut api = api();
        let result = api.run_command("quote \"Hello world\"").unwrap();

        assert_eq!(
            result.added_quote,
            Some(Quote::new("Hello world", QuoteVariant::Normal))
        );
        assert_eq!(api.quotes().len(), 1);
    }

    #[test]
    fn run_command_dispatches_list() {
        let store = StoreFixture::new().with_quotes(&["Quote 1", "Quote 2"]).store;
        let mut api = QuotezApi::new(store, &QuotezConfig::default());

        let result = api.run_command("quote list").unwrap();
        assert_eq!(result.listed_quotes.len(), 2);
        assert!(result.added_quote.is_none());
    }

    #[test]
    fn run_command_passes_variant() {
        let mut api = api();
        api.run_command("quote piglatin \"Tis but a scratch\"").unwrap();

        let quotes = api.quotes();
        assert_eq!(quotes[0].text, "Istay utbay away atchscray");
        assert_eq!(quotes[0].variant, QuoteVariant::PigLatin);
    }

    #[test]
    fn run_command_surfaces_parse_errors() {
        let mut api = api();
        assert!(matches!(
            api.run_command("quotes \"Hello\""),
            Err(QuotezError::InvalidCommand)
        ));
        assert!(api.quotes().is_empty());
    }

    #[test]
    fn configured_length_is_applied() {
        let config = QuotezConfig {
            max_quote_length: 5,
            ..QuotezConfig::default()
        };
        let mut api = QuotezApi::new(InMemoryStore::new(), &config);

        assert!(matches!(
            api.run_command("quote \"Hello world\""),
            Err(QuotezError::QuoteTooLong)
        ));
        assert!(api.run_command("quote \"Hello\"").is_ok());
    }

    #[test]
    fn seed_skips_duplicates() {
        let mut api = api();
        api.seed(&["Quote 1", "Quote 2", "Quote 1"]).unwrap();

        let texts: Vec<_> = api.quotes().into_iter().map(|q| q.text).collect();
        assert_eq!(texts, vec!["Quote 1", "Quote 2"]);
    }

    #[test]
    fn seed_rejects_invalid_quotes() {
        let mut api = api();
        let long = "a".repeat(51);
        assert!(matches!(
            api.seed(&[long]),
            Err(QuotezError::QuoteTooLong)
        ));
    }
}
