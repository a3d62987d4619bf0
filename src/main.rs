mod cli;
mod config;
mod error;
mod filter;
mod runner;

use clap::Parser;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), error::CliError> {
    // Diagnostics go to stderr; stdout carries the filtered child output.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = cli::Args::parse();

    let exit = runner::run(args).await?;
    std::process::exit(exit);
}
