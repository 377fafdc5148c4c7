//! CLI command implementations

use std::fs;
use std::path::PathBuf;
use std::sync::Arc;

use crate::graphql::registry;
use crate::server::{CatalogServer, ServerConfig};
use crate::store::{ProductDraft, ProductStore};

use super::args::Command;
use super::errors::{CliError, CliResult};

/// Run one parsed command to completion.
pub fn execute(command: Command) -> CliResult<()> {
    match command {
        Command::Serve {
            host,
            port,
            cors_origins,
            seed,
        } => serve(host, port, cors_origins, seed),
        Command::Schema => {
            println!("{}", registry::sdl());
            Ok(())
        }
    }
}

fn serve(
    host: String,
    port: u16,
    cors_origins: Vec<String>,
    seed: Option<PathBuf>,
) -> CliResult<()> {
    let store = Arc::new(ProductStore::new());

    if let Some(path) = seed {
        let raw = fs::read_to_string(&path)?;
        let drafts: Vec<ProductDraft> = serde_json::from_str(&raw).map_err(|e| {
            CliError::seed_error(format!("{}: {}", path.display(), e))
        })?;
        store
            .seed(drafts)
            .map_err(|e| CliError::seed_error(e.message().to_string()))?;
    }

    let config = ServerConfig {
        host,
        port,
        cors_origins,
    };
    let server = CatalogServer::with_config(config, store);

    let runtime = tokio::runtime::Runtime::new()
        .map_err(|e| CliError::serve_failed(e.to_string()))?;
    runtime
        .block_on(server.serve())
        .map_err(|e| CliError::serve_failed(e.to_string()))
}
