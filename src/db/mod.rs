//! Database module for the climate dataset.
//!
//! This module provides abstractions for the backing store via the
//! Repository pattern, allowing storage backends to be swapped easily.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────┐
//! │  HTTP Layer (axum handlers)                              │
//! └───────────────────┬─────────────────────────────────────┘
//!                     │
//! ┌───────────────────▼─────────────────────────────────────┐
//! │  Query Engine (services) - Derived Computations          │
//! └───────────────────┬─────────────────────────────────────┘
//!                     │
//! ┌───────────────────▼─────────────────────────────────────┐
//! │  Repository Trait (repository/) - Abstract Interface     │
//! └───────────────────┬─────────────────────────────────────┘
//!                     │
//!     ┌───────────────────┴─────────────────┐
//!     │ SqliteRepository    LocalRepository  │
//!     │ (diesel + r2d2)     (in-memory)      │
//!     └──────────────────────────────────────┘
//! ```
//!
//! The repository is always passed into the query engine at construction;
//! there is no module-level store handle.

#[cfg(not(any(feature = "sqlite-repo", feature = "local-repo")))]
compile_error!("Enable at least one repository backend feature.");

pub mod factory;
pub mod repositories;
pub mod repository;

pub use factory::{RepositoryFactory, RepositoryType};
pub use repositories::LocalRepository;
#[cfg(feature = "sqlite-repo")]
pub use repositories::{SqliteConfig, SqliteRepository};
pub use repository::{
    ClimateRepository, ErrorContext, MeasurementRepository, RepositoryError, RepositoryResult,
    StationRepository,
};
