//! CLI entry point for ranking value patterns in CSV columns

use clap::Parser;
use patternrank::io::cli::{Cli, FileProcessor};
use tracing_subscriber::EnvFilter;

/// Initialize tracing subscriber, honouring `RUST_LOG` unless debug output is forced
fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> patternrank::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let stdout = std::io::stdout();
    let mut writer = stdout.lock();
    FileProcessor::new(cli).process(&mut writer)
}
