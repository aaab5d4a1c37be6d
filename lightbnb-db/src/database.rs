//! Data access handle shared across request handlers

use sqlx::PgPool;

use crate::repos::{PropertyRepo, ReservationRepo, UserRepo};

/// Entry point for all queries.
///
/// Wraps an injected pool; cloning is cheap and every clone shares the
/// same connections.
#[derive(Debug, Clone)]
pub struct Database {
    pool: PgPool,
}

impl Database {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    pub fn users(&self) -> UserRepo<'_> {
        UserRepo::new(&self.pool)
    }

    pub fn properties(&self) -> PropertyRepo<'_> {
        PropertyRepo::new(&self.pool)
    }

    pub fn reservations(&self) -> ReservationRepo<'_> {
        ReservationRepo::new(&self.pool)
    }

    /// Bring the schema up to date
    pub async fn migrate(&self) -> crate::Result<()> {
        crate::migrations::run(&self.pool).await
    }

    /// Close all pooled connections, waiting for checked-out ones to return.
    pub async fn close(&self) {
        self.pool.close().await;
    }
}
