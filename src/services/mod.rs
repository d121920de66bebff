//! Service layer implementing the derived computations over the dataset.
//!
//! The query engine sits between the HTTP handlers and the repository and
//! owns the windowing, station-selection, and aggregate rules.

pub mod query_engine;


pub use query_engine::{QueryEngine, ServiceError, ServiceResult};
