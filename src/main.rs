//! Album Scout - search a public music catalog with an offline cache.
//!
//! Searches the catalog's `/search` endpoint, keeps the last successful
//! response per term on disk, and serves the cached copy when the network
//! is down or the fetch fails.

pub mod catalog;
pub mod cli;
pub mod config;
pub mod error;
pub mod store;
#[cfg(test)]
pub mod test_utils;

use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

fn main() -> anyhow::Result<()> {
    let args = cli::Cli::parse();

    // Initialize logging
    tracing_subscriber::registry()
        .with(fmt::layer().with_target(true))
        .with(EnvFilter::from_default_env().add_directive("album_scout=info".parse()?))
        .init();

    cli::run_command(&args)?;
    Ok(())
}
