//! lightbnb-core: configuration and shared error types.
//!
//! Kept free of database dependencies so the CLI and any web layer can
//! load settings before a pool exists.

pub mod config;
pub mod error;

pub use config::{DatabaseConfig, LightbnbConfig};
pub use error::{CoreError, Result};
