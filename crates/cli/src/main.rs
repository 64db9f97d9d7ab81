//! fieldname
//!
//! Maps property names to database field names from the command line.

use clap::Parser;
use fieldname_cli::Cli;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize logging; RUST_LOG wins over -v
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(cli.log_level()));
    FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    fieldname_cli::run(cli)
}
