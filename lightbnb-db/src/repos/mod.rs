//! Repository implementations for database access
//!
//! Each repository borrows the shared pool and follows these patterns:
//! - Lookups return `Ok(None)` for a missing row
//! - Inserts use `RETURNING` (no insert-then-select)
//! - List operations aggregate with JOINs in a single query

pub mod properties;
pub mod reservations;
pub mod users;

pub use properties::PropertyRepo;
pub use reservations::{ReservationRepo, ReservationScope};
pub use users::UserRepo;

/// Row cap for list operations when the caller passes `None`.
pub const DEFAULT_LIMIT: u32 = 10;
