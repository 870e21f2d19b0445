//! Apply the site schema to a database

use anyhow::{Context, Result};
use clap::Parser;

use folio_server::db::{create_pool, migrations};

use crate::settings::FolioConfig;

#[derive(Parser, Debug)]
pub struct MigrateArgs {
    /// Database URL (overrides config)
    #[arg(long, env = "DATABASE_URL")]
    pub database_url: Option<String>,
}

pub async fn run_migrate(args: MigrateArgs, config: &FolioConfig) -> Result<()> {
    let database_url = args
        .database_url
        .unwrap_or_else(|| config.database.url.clone());

    let pool = create_pool(&database_url)
        .await
        .context(format!("Failed to open database: {}", database_url))?;

    migrations::run(&pool)
        .await
        .context("Failed to run database migrations")?;

    pool.close().await;
    println!("✅ Schema up to date: {}", database_url);
    Ok(())
}
