//! Command-line interface for album-scout.
//!
//! This module provides CLI commands for searching the catalog and
//! inspecting or clearing the offline cache.

mod commands;

pub use commands::{Cli, Commands, run_command};
