//! # Climate Observation API
//!
//! Read-only reporting backend over a fixed climate-observation dataset
//! (station metadata plus daily precipitation and temperature records).
//! The backend exposes a small REST API via Axum.
//!
//! ## Architecture
//!
//! The crate is organized into layered modules:
//!
//! - [`models`]: Domain entities (stations, measurements) and derived result types
//! - [`db`]: Repository trait, storage backends, and the repository factory
//! - [`services`]: The query engine implementing the derived computations
//! - [`http`]: Axum-based HTTP server, request handlers, and error mapping
//!
//! The dataset is a pre-existing read-only snapshot; there is no write path.
//! All request handling is a pure read against the backing store, so no
//! locking or transaction discipline is required beyond what the store
//! itself provides.

pub mod db;
pub mod models;

pub mod services;

#[cfg(feature = "http-server")]
pub mod http;
