//! Records mapped to and from the LightBnB tables

pub mod property;
pub mod reservation;
pub mod review;
pub mod user;

pub use property::{NewProperty, Property, PropertyListing};
pub use reservation::{Reservation, ReservationListing};
pub use review::PropertyReview;
pub use user::{NewUser, User};

/// Minor currency units per major unit; `cost_per_night` is stored in cents.
pub const CENTS_PER_UNIT: i64 = 100;

/// Convert a major-unit price (e.g. dollars) to the stored minor units,
/// rounding to the nearest cent.
pub fn to_cents(major: f64) -> i64 {
    (major * CENTS_PER_UNIT as f64).round() as i64
}
