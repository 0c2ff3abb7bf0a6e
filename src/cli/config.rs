//! `errand config` subcommands implementation

use anyhow::Result;
use clap::Subcommand;

use crate::config::{config_path, load_config, save_config, Config};
use crate::settings::list_profiles;

#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Print the effective configuration
    Show,

    /// Write a config file with default values
    Init,

    /// Print the config file location
    Path,
}

pub fn run(command: ConfigCommands) -> Result<()> {
    match command {
        ConfigCommands::Show => show(),
        ConfigCommands::Init => init(),
        ConfigCommands::Path => {
            println!("{}", config_path()?.display());
            Ok(())
        }
    }
}

fn show() -> Result<()> {
    let path = config_path()?;
    let config = match load_config()? {
        Some(config) => {
            println!("# {}", path.display());
            config
        }
        None => {
            println!("# {} (not found, showing defaults)", path.display());
            Config::default()
        }
    };
    print!("{}", toml::to_string_pretty(&config)?);

    let profiles = list_profiles()?;
    if !profiles.is_empty() {
        println!("\n# profiles: {}", profiles.join(", "));
    }
    Ok(())
}

fn init() -> Result<()> {
    let path = config_path()?;
    if path.exists() {
        println!("Config already exists at {}", path.display());
        return Ok(());
    }

    save_config(&Config::default())?;
    println!("✓ Wrote default config to {}", path.display());
    Ok(())
}
