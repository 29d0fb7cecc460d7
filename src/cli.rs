//! Command-line interface definitions using clap

use clap::{Parser, Subcommand};

/// hackernews-api - GraphQL API server for a link-sharing feed
#[derive(Parser, Debug)]
#[command(name = "hackernews-api")]
#[command(version)]
#[command(about = "GraphQL API server for a link-sharing feed", long_about = None)]
pub struct Cli {
    /// Configuration file path (default: config.toml)
    #[arg(long, short = 'c', global = true)]
    pub config: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands
#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Commands {
    /// Start the HTTP server (default)
    Serve,

    /// Print the SDL generated from the resolver types
    PrintSchema,

    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigCommands,
    },
}

/// Configuration management commands
#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum ConfigCommands {
    /// Generate example configuration file
    Generate {
        /// Output path (default: config.example.toml)
        output_path: Option<String>,
    },
}
