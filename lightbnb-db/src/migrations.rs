//! Schema migrations for the LightBnB tables

use sqlx::migrate::Migrator;
use sqlx::PgPool;

use crate::Result;

/// Embedded migrations from `lightbnb-db/migrations`.
///
/// Also used by `#[sqlx::test(migrator = "lightbnb_db::MIGRATOR")]`.
pub static MIGRATOR: Migrator = sqlx::migrate!("./migrations");

/// Run all pending migrations
pub async fn run(pool: &PgPool) -> Result<()> {
    tracing::info!("Running LightBnB migrations...");

    MIGRATOR.run(pool).await?;

    tracing::info!(
        applied = MIGRATOR.iter().count(),
        "LightBnB schema is up to date"
    );
    Ok(())
}
