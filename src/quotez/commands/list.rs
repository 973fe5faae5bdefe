use crate::commands::CmdResult;
use crate::error::Result;
use crate::store::QuoteStore;

pub fn run<S: QuoteStore>(store: &S) -> Result<CmdResult> {
    Ok(CmdResult::default().with_listed_quotes(store.list_quotes()))
}
