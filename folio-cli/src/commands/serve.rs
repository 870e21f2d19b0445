//! HTTP server command
//!
//! Runs the site API. Flags override the config file.

use anyhow::{Context, Result};
use clap::Parser;
use std::net::SocketAddr;

use folio_server::db::{create_pool_with_options, migrations};
use folio_server::{run_server, ServerConfig};

use crate::settings::FolioConfig;

/// Arguments for the serve command
#[derive(Parser, Debug)]
pub struct ServeArgs {
    /// Address to bind to (default: 127.0.0.1:3030)
    #[arg(long, short = 'b', env = "FOLIO_BIND")]
    pub bind: Option<SocketAddr>,

    /// Allow permissive CORS (all origins) - use with caution
    #[arg(long)]
    pub cors_permissive: bool,

    /// Database URL (overrides config)
    #[arg(long, env = "DATABASE_URL")]
    pub database_url: Option<String>,

    /// Don't apply schema migrations before serving
    #[arg(long)]
    pub no_migrate: bool,
}

impl ServeArgs {
    /// Merge flags over the config file.
    fn server_config(&self, config: &FolioConfig) -> ServerConfig {
        ServerConfig {
            bind_addr: self.bind.unwrap_or(config.server.bind),
            cors_permissive: self.cors_permissive || config.server.cors_permissive,
            cors_origins: config.server.cors_origins.clone(),
        }
    }
}

/// Run the HTTP server
pub async fn run_serve(args: ServeArgs, config: &FolioConfig) -> Result<()> {
    let database_url = args
        .database_url
        .clone()
        .unwrap_or_else(|| config.database.url.clone());
    let server_config = args.server_config(config);

    tracing::info!("Starting folio server on {}", server_config.bind_addr);

    let pool = create_pool_with_options(&database_url, config.database.max_connections)
        .await
        .context("Failed to create database pool")?;

    if config.server.migrate_on_start && !args.no_migrate {
        migrations::run(&pool)
            .await
            .context("Failed to run database migrations")?;
    }

    // Blocks until shutdown
    run_server(pool, server_config).await.context("Server error")?;

    Ok(())
}
