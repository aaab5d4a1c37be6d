//! Command implementations for the lightbnb CLI

pub mod properties;
pub mod reservations;
pub mod users;

use anyhow::Result;
use serde::Serialize;

// Re-export dispatcher functions for flat access from main.rs
pub use properties::{run_list_property, run_properties, run_reviews};
pub use reservations::run_reservations;
pub use users::{run_signup, run_user};

/// Print a result to stdout as pretty JSON
fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
