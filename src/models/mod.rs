//! Domain entities and derived result types.
//!
//! The two persisted entities mirror the fixed `station` and `measurement`
//! tables of the backing store. Both are immutable: they are reflected from
//! the store at query time and never created, mutated, or destroyed by this
//! system.

use serde::{Deserialize, Serialize};

/// A weather station, as stored in the `station` table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Station {
    /// Surrogate row id
    pub id: i32,
    /// Station identifier (e.g. "USC00519281")
    pub station: String,
    /// Human-readable station name
    pub name: String,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub elevation: Option<f64>,
}

/// A daily observation row, as stored in the `measurement` table.
///
/// The date is kept as the store encodes it: an ISO `YYYY-MM-DD` string,
/// so lexicographic comparison equals chronological comparison. Every
/// measurement's station identifier references exactly one [`Station`];
/// the store guarantees this, not this system.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Measurement {
    /// Surrogate row id
    pub id: i32,
    /// Station identifier this observation belongs to
    pub station: String,
    /// Observation date, `YYYY-MM-DD`
    pub date: String,
    /// Precipitation in inches, absent when not recorded
    pub prcp: Option<f64>,
    /// Observed temperature in degrees Fahrenheit, absent when not recorded
    pub tobs: Option<f64>,
}

/// A single (date, value) pair returned by series queries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyReading {
    pub date: String,
    pub value: Option<f64>,
}

impl DailyReading {
    pub fn new(date: impl Into<String>, value: Option<f64>) -> Self {
        Self {
            date: date.into(),
            value,
        }
    }
}

/// Minimum, arithmetic mean, and maximum temperature over a date range.
///
/// The mean is rounded to one decimal place, half away from zero. Min and
/// max are reported as stored.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TemperatureStats {
    pub min: f64,
    pub avg: f64,
    pub max: f64,
}
