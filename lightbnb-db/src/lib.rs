//! lightbnb-db: data access for the LightBnB rental app
//!
//! Translates typed requests into parameterized PostgreSQL statements and
//! result rows into records. The web layer owns routing and validation;
//! this crate owns the SQL.
//!
//! # Design Principles
//!
//! - The pool is injected ([`Database::new`]), never a global
//! - Inserts return the created row in the same statement
//! - Rely on DB constraints, map the ones callers care about

pub mod database;
pub mod error;
pub mod migrations;
pub mod models;
pub mod pool;
pub mod repos;
pub mod search;

pub use database::Database;
pub use error::{DbError, Result};
pub use migrations::MIGRATOR;
pub use models::*;
pub use repos::{PropertyRepo, ReservationRepo, ReservationScope, UserRepo, DEFAULT_LIMIT};
pub use search::{Predicate, PropertyFilters, PropertySearch};
