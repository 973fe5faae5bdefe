use colored::Colorize;
use quotez::api::{CmdMessage, MessageLevel};
use quotez::model::Quote;

const BULLET: &str = "- ";

/// Markdown bullet list, one quote per line, newline-terminated.
pub(super) fn render_quote_list(quotes: &[Quote]) -> String {
    quotes
        .iter()
        .map(|quote| format!("{}{}\n", BULLET, quote))
        .collect()
}

/// Info goes to stdout, warnings to stderr.
pub(super) fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content),
            MessageLevel::Warning => eprintln!("{}", message.content.yellow()),
        }
    }
}
