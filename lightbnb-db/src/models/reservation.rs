use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::Property;

/// Reservation record from database
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Reservation {
    pub id: i32,
    pub property_id: i32,
    pub guest_id: i32,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

/// A past reservation joined with the reserved property and its rating.
///
/// The reservation id is aliased to `reservation_id` in the query since
/// `properties.id` already occupies `id`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct ReservationListing {
    pub reservation_id: i32,
    pub guest_id: i32,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    #[sqlx(flatten)]
    #[serde(flatten)]
    pub property: Property,
    pub average_rating: Option<f64>,
}

impl ReservationListing {
    /// The reservation row on its own
    pub fn reservation(&self) -> Reservation {
        Reservation {
            id: self.reservation_id,
            property_id: self.property.id,
            guest_id: self.guest_id,
            start_date: self.start_date,
            end_date: self.end_date,
        }
    }

    /// Length of stay in nights
    pub fn nights(&self) -> i64 {
        (self.end_date - self.start_date).num_days()
    }
}
