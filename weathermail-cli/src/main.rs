//! Binary crate for the `weathermail` tool.
//!
//! One invocation performs a single fetch-format-send cycle and exits:
//! zero on success, non-zero with a descriptive error otherwise.

use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cli;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let cmd = cli::Cli::parse();
    cmd.run().await
}
