//! lightbnb CLI - query and update the LightBnB database from a terminal
//!
//! Exposes the data access layer used by the web app:
//! - user lookup and registration (`user`, `signup`)
//! - property search and listing (`properties`, `list-property`, `reviews`)
//! - past reservations by guest or host (`reservations`)
//! - schema setup (`migrate`) and config management (`config`)
//!
//! Query results are printed to stdout as pretty JSON.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use lightbnb_core::LightbnbConfig;
use lightbnb_db::Database;
use tracing::info;

mod commands;
mod config;
mod tracing_setup;

#[derive(Parser, Debug)]
#[command(
    name = "lightbnb",
    author,
    version,
    about = "Query the LightBnB rental database",
    long_about = "Look up users, search properties, and list past reservations in the \
                  LightBnB PostgreSQL database. Connection settings come from \
                  ~/.lightbnb/config.toml, DATABASE_URL, or --database-url."
)]
struct Cli {
    /// Database URL (overrides config file)
    #[arg(long, global = true, env = "DATABASE_URL", hide_env_values = true)]
    database_url: Option<String>,

    /// Config file path (default: ~/.lightbnb/config.toml)
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Enable debug logging (shows rendered SQL)
    #[arg(long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Manage lightbnb configuration (show, path, init)
    Config(config::ConfigArgs),
    #[command(flatten)]
    Db(DbCommands),
}

/// Commands that need a database connection
#[derive(Subcommand, Debug)]
enum DbCommands {
    /// Create or update the database schema
    Migrate,
    /// Look up a user by email or id
    User(commands::users::UserArgs),
    /// Register a new user
    Signup(commands::users::SignupArgs),
    /// Search properties, cheapest first
    Properties(commands::properties::PropertiesArgs),
    /// List a new property from a JSON file
    ListProperty(commands::properties::ListPropertyArgs),
    /// Show reviews for a property
    Reviews(commands::properties::ReviewsArgs),
    /// Show past reservations for a guest or a host
    Reservations(commands::reservations::ReservationsArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    // Before parsing so `env = "DATABASE_URL"` sees values from .env
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    let config = load_config(&cli)?;
    tracing_setup::init(&tracing_setup::TracingConfig {
        debug: cli.debug,
        log_level: config.log_level.clone(),
    })
    .ok();

    let command = match cli.command {
        Commands::Config(args) => return config::run_config(args, &config, cli.config.as_deref()),
        Commands::Db(command) => command,
    };

    let pool = lightbnb_db::pool::connect(&config)
        .await
        .context("Failed to connect to database")?;
    let db = Database::new(pool);

    let result = run(command, &db).await;
    db.close().await;
    result
}

fn load_config(cli: &Cli) -> Result<LightbnbConfig> {
    let init = matches!(&cli.command, Commands::Config(args) if args.is_init());

    let mut config = match &cli.config {
        Some(path) if init && !path.exists() => LightbnbConfig::default().with_env_overrides(),
        Some(path) => LightbnbConfig::load_from(path)
            .with_context(|| format!("Failed to load config from {}", path.display()))?
            .with_env_overrides(),
        None => LightbnbConfig::load().context("Failed to load config")?,
    };

    if let Some(url) = &cli.database_url {
        config.set_database_url(url.clone());
    }

    Ok(config)
}

async fn run(command: DbCommands, db: &Database) -> Result<()> {
    match command {
        DbCommands::Migrate => {
            db.migrate().await.context("Migration failed")?;
            info!("Database schema is up to date");
            Ok(())
        }
        DbCommands::User(args) => commands::run_user(args, db).await,
        DbCommands::Signup(args) => commands::run_signup(args, db).await,
        DbCommands::Properties(args) => commands::run_properties(args, db).await,
        DbCommands::ListProperty(args) => commands::run_list_property(args, db).await,
        DbCommands::Reviews(args) => commands::run_reviews(args, db).await,
        DbCommands::Reservations(args) => commands::run_reservations(args, db).await,
    }
}
