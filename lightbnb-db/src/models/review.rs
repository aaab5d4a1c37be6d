use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Review left by a guest after a reservation.
///
/// Read-only here: listings only use the average `rating` per property.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct PropertyReview {
    pub id: i32,
    pub guest_id: i32,
    pub property_id: i32,
    pub reservation_id: i32,
    pub rating: i16,
    pub message: Option<String>,
}
