use std::path::Path;

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::settings::FolioConfig;

#[derive(Parser, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommands,
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show config file path
    Path,
    /// Print the resolved configuration as TOML
    Show,
}

pub fn run_config(args: ConfigArgs, explicit: Option<&Path>, config: &FolioConfig) -> Result<()> {
    match args.command {
        ConfigCommands::Path => {
            println!("{}", FolioConfig::resolve_path(explicit).display());
        }
        ConfigCommands::Show => {
            println!("{}", config.to_toml()?);
        }
    }
    Ok(())
}
