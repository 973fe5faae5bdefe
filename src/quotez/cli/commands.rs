use super::render::{print_messages, render_quote_list};
use super::setup::Cli;
use clap::Parser;
use quotez::api::{CmdResult, QuotezApi};
use quotez::config::QuotezConfig;
use quotez::error::Result;
use quotez::store::memory::InMemoryStore;
use quotez::store::QuoteStore;
use std::io::BufRead;
use std::path::Path;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Runs the whole session. `Ok(false)` means at least one command failed.
pub fn run() -> Result<bool> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = load_config(cli.config.as_deref())?;
    let mut api = QuotezApi::new(InMemoryStore::new(), &config);
    api.seed(config.seed_quotes.as_slice())?;

    if cli.commands.is_empty() {
        info!("reading commands from stdin");
        run_session(&mut api, std::io::stdin().lock().lines())
    } else {
        run_session(&mut api, cli.commands.into_iter().map(Ok))
    }
}

fn init_logging(verbose: u8) {
    let filter = match verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn load_config(path: Option<&Path>) -> Result<QuotezConfig> {
    match path {
        Some(path) => QuotezConfig::load(path),
        None => match QuotezConfig::default_path() {
            Some(path) => QuotezConfig::load(path),
            None => Ok(QuotezConfig::default()),
        },
    }
}

fn run_session<S, I>(api: &mut QuotezApi<S>, lines: I) -> Result<bool>
where
    S: QuoteStore,
    I: IntoIterator<Item = std::io::Result<String>>,
{
    let mut all_ok = true;

    for line in lines {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        match api.run_command(&line) {
            Ok(result) => print_result(&result),
            Err(e) => {
                eprintln!("Error: {}", e);
                all_ok = false;
            }
        }
    }

    Ok(all_ok)
}

fn print_result(result: &CmdResult) {
    print!("{}", render_quote_list(&result.listed_quotes));
    print_messages(&result.messages);
}
