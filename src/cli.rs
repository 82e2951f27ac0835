//! Command-line interface definitions using clap
//!
//! Running `folio` without a subcommand starts the HTTP server.

use clap::{Parser, Subcommand};

/// Folio - a server-rendered personal portfolio site
#[derive(Parser, Debug)]
#[command(name = "folio")]
#[command(version)]
#[command(about = "A server-rendered personal portfolio site", long_about = None)]
pub struct Cli {
    /// Configuration file path (default: config.toml)
    #[arg(long, short = 'c', global = true)]
    pub config: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands
#[derive(Subcommand, Debug, PartialEq)]
pub enum Commands {
    /// Remove cached build artifacts, then start the dev server in the foreground
    CleanDev,

    /// Validate the project, skill and experience catalogs
    Validate,

    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigCommands,
    },
}

/// Configuration management commands
#[derive(Subcommand, Debug, PartialEq)]
pub enum ConfigCommands {
    /// Generate example configuration file
    Generate {
        /// Output path (default: config.example.toml)
        output_path: Option<String>,

        /// Force overwrite without confirmation
        #[arg(long)]
        force: bool,
    },
}
