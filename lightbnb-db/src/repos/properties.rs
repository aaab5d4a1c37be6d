//! Property repository
//!
//! - filtered search with average rating (see [`crate::search`])
//! - listing a new property via `INSERT ... RETURNING`

use sqlx::PgPool;

use super::DEFAULT_LIMIT;
use crate::error::Result;
use crate::models::{NewProperty, Property, PropertyListing, PropertyReview};
use crate::search::{PropertyFilters, PropertySearch};

/// Property repository
pub struct PropertyRepo<'a> {
    pool: &'a PgPool,
}

impl<'a> PropertyRepo<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Search properties, cheapest first.
    ///
    /// Every filter is optional; `limit` defaults to [`DEFAULT_LIMIT`].
    /// Returns an empty vec when nothing matches.
    pub async fn list(
        &self,
        filters: &PropertyFilters,
        limit: Option<u32>,
    ) -> Result<Vec<PropertyListing>> {
        let search = PropertySearch::new(filters, limit.unwrap_or(DEFAULT_LIMIT));
        let binds = search.bind_count();
        let mut builder = search.into_builder();

        tracing::debug!(sql = builder.sql(), binds, "property search");

        let rows = builder
            .build_query_as::<PropertyListing>()
            .fetch_all(self.pool)
            .await?;

        Ok(rows)
    }

    /// Insert a property and return the stored row.
    pub async fn create(&self, property: &NewProperty) -> Result<Property> {
        let created = sqlx::query_as::<_, Property>(
            r#"
            INSERT INTO properties (
                owner_id,
                title,
                description,
                thumbnail_photo_url,
                cover_photo_url,
                cost_per_night,
                street,
                city,
                province,
                post_code,
                country,
                parking_spaces,
                number_of_bathrooms,
                number_of_bedrooms
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14)
            RETURNING *
            "#,
        )
        .bind(property.owner_id)
        .bind(&property.title)
        .bind(&property.description)
        .bind(&property.thumbnail_photo_url)
        .bind(&property.cover_photo_url)
        .bind(property.cost_per_night)
        .bind(&property.street)
        .bind(&property.city)
        .bind(&property.province)
        .bind(&property.post_code)
        .bind(&property.country)
        .bind(property.parking_spaces)
        .bind(property.number_of_bathrooms)
        .bind(property.number_of_bedrooms)
        .fetch_one(self.pool)
        .await?;

        tracing::info!(
            property_id = created.id,
            owner_id = created.owner_id,
            "property listed"
        );
        Ok(created)
    }

    /// Reviews for one property, newest first.
    pub async fn reviews(&self, property_id: i32) -> Result<Vec<PropertyReview>> {
        let reviews = sqlx::query_as::<_, PropertyReview>(
            r#"
            SELECT id, guest_id, property_id, reservation_id, rating, message
            FROM property_reviews
            WHERE property_id = $1
            ORDER BY id DESC
            "#,
        )
        .bind(property_id)
        .fetch_all(self.pool)
        .await?;

        Ok(reviews)
    }
}
