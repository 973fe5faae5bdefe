use crate::commands::{CmdMessage, CmdResult};
use crate::error::{QuotezError, Result};
use crate::model::{text_len, Quote, QuoteVariant};
use crate::store::QuoteStore;
use crate::variant::{transform, Advisory};
use tracing::{debug, info};

/// Transforms `raw_text` and commits the result to the store.
///
/// Fatal errors (too long, no-op) leave the store untouched. A duplicate is
/// not an error: it is reported as an info message and nothing is added.
pub fn run<S: QuoteStore>(
    store: &mut S,
    raw_text: &str,
    variant: QuoteVariant,
    max_len: usize,
) -> Result<CmdResult> {
    let (quote, advisory) = resolve(raw_text, variant, max_len)?;

    let mut result = CmdResult::default();
    if let Some(advisory) = advisory {
        result.add_message(CmdMessage::warning(advisory.to_string()));
    }

    match store.add_quote(quote.clone()) {
        Ok(()) => {
            info!(%variant, text = %quote.text, "quote added");
            Ok(result.with_added_quote(quote))
        }
        Err(QuotezError::DuplicateEntry) => {
            debug!(text = %quote.text, "duplicate quote skipped");
            result.add_message(CmdMessage::info(QuotezError::DuplicateEntry.to_string()));
            Ok(result)
        }
        Err(e) => Err(e),
    }
}

/// Turns raw input into the quote that would be stored, without touching any store.
pub fn resolve(
    raw_text: &str,
    variant: QuoteVariant,
    max_len: usize,
) -> Result<(Quote, Option<Advisory>)> {
    if text_len(raw_text) > max_len {
        return Err(QuotezError::QuoteTooLong);
    }

    let transformation = transform(raw_text, variant, max_len)?;
    Ok((
        Quote::new(transformation.text, variant),
        transformation.advisory,
    ))
}
