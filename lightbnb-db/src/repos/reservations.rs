//! Reservation repository
//!
//! Past reservations with the reserved property and its average rating.
//! Two scopes are offered: by guest (the traveller's "my trips" page) and by
//! property owner (the host's booking history).

use sqlx::PgPool;

use super::DEFAULT_LIMIT;
use crate::error::Result;
use crate::models::ReservationListing;

/// Which column a reservation listing is filtered on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReservationScope {
    /// `reservations.guest_id`
    Guest(i32),
    /// `properties.owner_id`
    Owner(i32),
}

impl ReservationScope {
    fn column(self) -> &'static str {
        match self {
            Self::Guest(_) => "reservations.guest_id",
            Self::Owner(_) => "properties.owner_id",
        }
    }

    fn id(self) -> i32 {
        match self {
            Self::Guest(id) | Self::Owner(id) => id,
        }
    }
}

/// Reservation repository
pub struct ReservationRepo<'a> {
    pool: &'a PgPool,
}

impl<'a> ReservationRepo<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Past reservations made by a guest, earliest first.
    pub async fn list_for_guest(
        &self,
        guest_id: i32,
        limit: Option<u32>,
    ) -> Result<Vec<ReservationListing>> {
        self.list(ReservationScope::Guest(guest_id), limit).await
    }

    /// Past reservations at any property the user owns, earliest first.
    pub async fn list_for_owner(
        &self,
        owner_id: i32,
        limit: Option<u32>,
    ) -> Result<Vec<ReservationListing>> {
        self.list(ReservationScope::Owner(owner_id), limit).await
    }

    /// Reservations that ended before today, grouped per reservation and
    /// property, ordered by start date.
    pub async fn list(
        &self,
        scope: ReservationScope,
        limit: Option<u32>,
    ) -> Result<Vec<ReservationListing>> {
        // Only the column name is interpolated, and it comes from a fixed set
        let query = format!(
            r#"
            SELECT
                reservations.id AS reservation_id,
                reservations.guest_id,
                reservations.start_date,
                reservations.end_date,
                properties.*,
                avg(property_reviews.rating)::float8 AS average_rating
            FROM reservations
            JOIN properties ON properties.id = reservations.property_id
            LEFT JOIN property_reviews ON property_reviews.property_id = properties.id
            WHERE {} = $1
              AND reservations.end_date < CURRENT_DATE
            GROUP BY reservations.id, properties.id
            ORDER BY reservations.start_date ASC
            LIMIT $2
            "#,
            scope.column()
        );

        let rows = sqlx::query_as::<_, ReservationListing>(&query)
            .bind(scope.id())
            .bind(i64::from(limit.unwrap_or(DEFAULT_LIMIT)))
            .fetch_all(self.pool)
            .await?;

        tracing::debug!(?scope, count = rows.len(), "listed past reservations");
        Ok(rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scope_selects_filter_column() {
        assert_eq!(ReservationScope::Guest(4).column(), "reservations.guest_id");
        assert_eq!(ReservationScope::Owner(4).column(), "properties.owner_id");
        assert_eq!(ReservationScope::Owner(9).id(), 9);
    }
}
