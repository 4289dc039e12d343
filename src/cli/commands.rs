//! CLI command definitions and handlers.
//!
//! Each subcommand is implemented as a function that takes the parsed
//! arguments and returns a `Result<()>`. This is the presentation layer:
//! it reads store snapshots and prints, nothing more.

use clap::{Parser, Subcommand};
use tokio::runtime::Runtime;
use tracing::debug;

use crate::catalog::{AlbumCache, AlbumResult, Connectivity, TcpProbe};
use crate::config::{self, Config};
use crate::error::Result;
use crate::store::DefaultAlbumListStore;

/// Album Scout - search a music catalog, with offline fallback
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand)]
pub enum Commands {
    /// Search the catalog for albums and tracks
    Search {
        /// Search term, passed to the catalog verbatim
        term: String,
        /// Print the raw response as JSON
        #[arg(long)]
        json: bool,
    },
    /// Show cache location and size
    CacheInfo,
    /// Remove all cached search results
    CacheClear,
    /// Print the effective configuration
    Config {
        /// Write the effective configuration to the config file
        #[arg(long)]
        save: bool,
    },
}

/// Execute the parsed command.
pub fn run_command(cli: &Cli) -> Result<()> {
    let config = config::load();
    debug!(
        "App config: name={:?} bundle_id={:?} api={:?}",
        config.app.name, config.app.bundle_id, config.api.base_url
    );

    match &cli.command {
        Commands::Search { term, json } => cmd_search(&config, term, *json),
        Commands::CacheInfo => cmd_cache_info(),
        Commands::CacheClear => cmd_cache_clear(),
        Commands::Config { save } => cmd_config(&config, *save),
    }
}

fn cmd_search(config: &Config, term: &str, json: bool) -> Result<()> {
    let probe = TcpProbe::for_base_url(&config.api.base_url);
    if !probe.is_connected() {
        eprintln!("Offline - Showing cached data");
    }

    let store = DefaultAlbumListStore::from_config(config);
    let rt = Runtime::new()?;
    rt.block_on(store.trigger(term))?;

    // Render from the settled state, the same view a UI binding would read
    let response = store.snapshot().data;

    if json {
        println!("{}", serde_json::to_string_pretty(&response)?);
        return Ok(());
    }

    println!(
        "{} results for {:?} (showing {})",
        response.result_count,
        term,
        response.results.len()
    );
    for item in &response.results {
        println!("  {}", format_result(item));
    }
    Ok(())
}

/// One line per item: title, artist, genre, and price when known.
fn format_result(item: &AlbumResult) -> String {
    let title = item.display_title();
    let mut line = format!(
        "{} - {} [{}]",
        item.artist_name, title, item.primary_genre_name
    );
    if let Some(price) = item.track_price {
        line.push_str(&format!(" {} {:.2}", item.currency, price));
    }
    line
}

fn cmd_cache_info() -> Result<()> {
    let cache = AlbumCache::default_location();
    println!("Cache location: {}", cache.location().display());
    println!("Entries:        {}", cache.entry_count());
    println!("Size:           {} bytes", cache.size_bytes());
    Ok(())
}

fn cmd_cache_clear() -> Result<()> {
    let cache = AlbumCache::default_location();
    let entries = cache.entry_count();
    cache.clear()?;
    println!("Cleared {entries} cached search(es)");
    Ok(())
}

fn cmd_config(config: &Config, save: bool) -> Result<()> {
    let toml =
        toml::to_string_pretty(config).map_err(|e| crate::error::Error::config(e.to_string()))?;
    print!("{toml}");
    if let Some(path) = config::config_path() {
        println!("# file: {}", path.display());
    }
    if save {
        config::save(config).map_err(|e| crate::error::Error::config(e.to_string()))?;
    }
    Ok(())
}
