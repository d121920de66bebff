//! Repository implementations module.
//!
//! This module contains the implementations of the `ClimateRepository` trait:
//! - `sqlite`: Diesel implementation reading the fixed SQLite dataset
//! - `local`: In-memory implementation for unit testing and local development
pub mod local;
#[cfg(feature = "sqlite-repo")]
pub mod sqlite;

pub use local::LocalRepository;
#[cfg(feature = "sqlite-repo")]
pub use sqlite::{SqliteConfig, SqliteRepository};
