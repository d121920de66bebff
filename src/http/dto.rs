//! Data Transfer Objects for the HTTP API.
//!
//! Series results serialize as JSON objects keyed by date string, stats as
//! `{min, avg, max}`. Domain types that already derive Serialize are
//! re-exported rather than duplicated.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

pub use crate::models::TemperatureStats;

/// A date-keyed series of optional readings (precipitation or temperature).
pub type SeriesResponse = BTreeMap<String, Option<f64>>;

/// One entry of the route listing served at `/`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RouteInfo {
    /// What the route returns
    pub description: String,
    /// Path template
    pub path: String,
}

impl RouteInfo {
    pub fn new(description: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            path: path.into(),
        }
    }
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Status of the service
    pub status: String,
    /// Version of the API
    pub version: String,
    /// Backing store status
    pub database: String,
}

