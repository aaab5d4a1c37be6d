use anyhow::{Context, Result};
use clap::{ArgGroup, Parser};
use lightbnb_db::{Database, ReservationScope, DEFAULT_LIMIT};

use super::print_json;

/// Arguments for the reservations command
#[derive(Parser, Debug)]
#[command(group(ArgGroup::new("scope").required(true).args(["guest", "owner"])))]
pub struct ReservationsArgs {
    /// Reservations made by this guest (user id)
    #[arg(long, value_name = "USER_ID")]
    pub guest: Option<i32>,

    /// Reservations at properties owned by this user id
    #[arg(long, value_name = "USER_ID")]
    pub owner: Option<i32>,

    /// Maximum number of results
    #[arg(long, default_value_t = DEFAULT_LIMIT)]
    pub limit: u32,
}

impl ReservationsArgs {
    fn scope(&self) -> Option<ReservationScope> {
        self.guest
            .map(ReservationScope::Guest)
            .or(self.owner.map(ReservationScope::Owner))
    }
}

pub async fn run_reservations(args: ReservationsArgs, db: &Database) -> Result<()> {
    let scope = args.scope().context("Pass --guest or --owner")?;

    let listings = db
        .reservations()
        .list(scope, Some(args.limit))
        .await
        .context("Failed to list reservations")?;

    print_json(&listings)
}
