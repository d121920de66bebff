//! HTTP server module for the climate API.
//!
//! This module exposes the query engine as a small read-only REST API
//! built on axum. Handlers parse and validate path parameters, delegate to
//! the query engine, serialize results to JSON, and map domain errors to
//! HTTP statuses.

pub mod dto;

pub mod error;

pub mod handlers;

pub mod router;

pub mod state;

pub use router::create_router;

pub use state::AppState;
