//! CLI argument definitions using clap

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// shelfql - a minimal product catalog manager
#[derive(Parser, Debug)]
#[command(name = "shelfql")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Start the catalog server
    Serve {
        /// Host to bind to
        #[arg(long, default_value = "0.0.0.0")]
        host: String,

        /// Port to bind to
        #[arg(long, default_value_t = 4000)]
        port: u16,

        /// Allowed CORS origin (repeatable); permissive when omitted
        #[arg(long = "cors-origin")]
        cors_origins: Vec<String>,

        /// JSON file holding an array of products to preload
        #[arg(long)]
        seed: Option<PathBuf>,
    },

    /// Print the operation contract as GraphQL SDL
    Schema,
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
