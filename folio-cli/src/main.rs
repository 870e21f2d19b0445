//! folio CLI - runs the portfolio site API
//!
//! Subcommands:
//! - `serve`: HTTP API for listings, blog posts, views and comments
//! - `migrate`: create the site tables in a database
//! - `config`: inspect the resolved configuration
//! - `completions`: shell completion scripts

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};

mod commands;
mod settings;
mod tracing_setup;

use settings::FolioConfig;
use tracing_setup::TracingConfig;

#[derive(Parser, Debug)]
#[command(
    name = "folio",
    author,
    version,
    about = "JSON API for a bilingual portfolio and blog"
)]
struct Cli {
    /// Enable debug logging
    #[arg(long, global = true)]
    debug: bool,

    /// Path to config file (default: ~/.folio/config.toml)
    #[arg(long, short = 'c', global = true, env = "FOLIO_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run HTTP API server
    Serve(commands::serve::ServeArgs),
    /// Create or update the database schema
    Migrate(commands::migrate::MigrateArgs),
    /// Inspect folio configuration (path, show)
    Config(commands::config::ConfigArgs),
    /// Generate shell completion scripts
    Completions(CompletionsArgs),
}

#[derive(Parser, Debug)]
struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    shell: Shell,
}

#[derive(ValueEnum, Debug, Clone, Copy)]
#[allow(clippy::enum_variant_names)] // PowerShell is a proper noun, not a suffix
enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    let config = FolioConfig::load(cli.config.as_deref())?;

    tracing_setup::init(&TracingConfig {
        debug: cli.debug,
        default_level: config.logging.level.clone(),
    })
    .ok();

    // Logged here because the subscriber depends on the loaded config
    let config_path = FolioConfig::resolve_path(cli.config.as_deref());
    if config_path.exists() {
        tracing::debug!(path = %config_path.display(), "loaded config file");
    } else {
        tracing::debug!(path = %config_path.display(), "no config file, using defaults");
    }

    match cli.command {
        Commands::Serve(args) => commands::run_serve(args, &config).await?,
        Commands::Migrate(args) => commands::run_migrate(args, &config).await?,
        Commands::Config(args) => commands::run_config(args, cli.config.as_deref(), &config)?,
        Commands::Completions(args) => run_completions(args)?,
    }
    Ok(())
}

fn run_completions(args: CompletionsArgs) -> Result<()> {
    use clap::CommandFactory;
    use clap_complete::{generate, Shell as CompletionShell};
    use std::io;

    let mut cmd = Cli::command();
    let bin_name = cmd.get_name().to_string();

    let shell = match args.shell {
        Shell::Bash => CompletionShell::Bash,
        Shell::Zsh => CompletionShell::Zsh,
        Shell::Fish => CompletionShell::Fish,
        Shell::PowerShell => CompletionShell::PowerShell,
        Shell::Elvish => CompletionShell::Elvish,
    };

    generate(shell, &mut cmd, bin_name, &mut io::stdout());

    Ok(())
}
