use std::path::Path;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use lightbnb_core::LightbnbConfig;

#[derive(Parser, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommands,
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Write a default config file
    Init(InitArgs),
    /// Show the effective connection settings (password hidden)
    Show,
    /// Show config file path
    Path,
}

#[derive(Parser, Debug)]
pub struct InitArgs {
    /// Force overwrite existing config
    #[arg(long, short)]
    pub force: bool,
}

impl ConfigArgs {
    /// `init` creates the file, so a missing `--config` path is expected
    pub fn is_init(&self) -> bool {
        matches!(self.command, ConfigCommands::Init(_))
    }
}

/// Run a config subcommand against `--config` when given, else the default path
pub fn run_config(
    args: ConfigArgs,
    config: &LightbnbConfig,
    explicit_path: Option<&Path>,
) -> Result<()> {
    let config_path = match explicit_path {
        Some(path) => path.to_path_buf(),
        None => LightbnbConfig::config_path()?,
    };

    match args.command {
        ConfigCommands::Init(args) => run_init(args, &config_path),
        ConfigCommands::Show => run_show(config),
        ConfigCommands::Path => run_path(&config_path),
    }
}

fn run_init(args: InitArgs, config_path: &Path) -> Result<()> {
    if config_path.exists() && !args.force {
        bail!(
            "Config already exists at {}\n\nUse --force to overwrite",
            config_path.display()
        );
    }

    LightbnbConfig::default()
        .save_to(config_path)
        .with_context(|| format!("Failed to write {}", config_path.display()))?;
    println!("✓ Wrote {}", config_path.display());
    Ok(())
}

fn run_show(config: &LightbnbConfig) -> Result<()> {
    match config.database_url() {
        Some(_) => println!("database: from DATABASE_URL / --database-url"),
        None => println!("database: {}", config.database.redacted()),
    }
    println!(
        "log_level: {}",
        config.log_level.as_deref().unwrap_or("info (default)")
    );
    Ok(())
}

fn run_path(path: &Path) -> Result<()> {
    let status = if path.exists() { "exists" } else { "not created" };
    println!("{} ({})", path.display(), status);
    Ok(())
}
