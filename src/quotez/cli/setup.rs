use clap::{ArgAction, Parser};
use std::path::PathBuf;

/// Returns the version string, including the git hash for non-release builds.
/// Format: "0.3.2" for releases, "0.3.2@abc1234" for dev builds
fn get_version() -> &'static str {
    const VERSION: &str = env!("CARGO_PKG_VERSION");
    const GIT_HASH: &str = env!("GIT_HASH");
    const IS_RELEASE: &str = env!("IS_RELEASE");

    use std::sync::OnceLock;
    static VERSION_STRING: OnceLock<String> = OnceLock::new();

    VERSION_STRING.get_or_init(|| {
        if IS_RELEASE == "true" || GIT_HASH.is_empty() {
            VERSION.to_string()
        } else {
            format!("{}@{}", VERSION, GIT_HASH)
        }
    })
}

#[derive(Parser, Debug)]
#[command(name = "quotez", bin_name = "quotez", version = get_version())]
#[command(
    about = "Collect quotes, plain, uwu-ified or in pig latin",
    long_about = "Collect quotes, plain, uwu-ified or in pig latin.\n\n\
        Each COMMAND is one full command line:\n  \
        quote \"<text>\"\n  \
        quote uwu \"<text>\"\n  \
        quote piglatin \"<text>\"\n  \
        quote list\n\n\
        Commands share one in-memory collection for the duration of the run."
)]
pub struct Cli {
    /// Command lines to run in order (read from stdin, one per line, when omitted)
    #[arg(value_name = "COMMAND")]
    pub commands: Vec<String>,

    /// Path to the config file
    #[arg(short, long, env = "QUOTEZ_CONFIG", value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Verbose output (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}
