use anyhow::{bail, Context, Result};
use clap::{ArgGroup, Parser};
use lightbnb_db::{Database, NewUser};

use super::print_json;

/// Arguments for the user command
#[derive(Parser, Debug)]
#[command(group(ArgGroup::new("lookup").required(true).args(["email", "id"])))]
pub struct UserArgs {
    /// Look up by email address (exact match)
    #[arg(long)]
    pub email: Option<String>,

    /// Look up by user id
    #[arg(long)]
    pub id: Option<i32>,
}

/// Arguments for the signup command
#[derive(Parser, Debug)]
pub struct SignupArgs {
    /// Display name
    #[arg(long)]
    pub name: String,

    /// Email address (must be unused)
    #[arg(long)]
    pub email: String,

    /// Password as it should be stored (hash it first)
    #[arg(long, env = "LIGHTBNB_PASSWORD", hide_env_values = true)]
    pub password: String,
}

pub async fn run_user(args: UserArgs, db: &Database) -> Result<()> {
    let user = match (args.email, args.id) {
        (Some(email), _) => db.users().get_by_email(&email).await?,
        (None, Some(id)) => db.users().get_by_id(id).await?,
        (None, None) => bail!("Pass --email or --id"),
    };

    match user {
        Some(user) => print_json(&user),
        None => bail!("User not found"),
    }
}

pub async fn run_signup(args: SignupArgs, db: &Database) -> Result<()> {
    let user = db
        .users()
        .create(&NewUser {
            name: args.name,
            email: args.email,
            password: args.password,
        })
        .await
        .context("Failed to register user")?;

    print_json(&user)
}
