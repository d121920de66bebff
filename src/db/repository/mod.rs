//! Repository trait definitions for the climate dataset.
//!
//! The backing store is an external collaborator with two tables,
//! `station` and `measurement`. The traits below expose the generic read
//! capability the query engine composes: filtered scans, a group-by
//! aggregate, and a max. Dates cross this boundary as the `YYYY-MM-DD`
//! strings the store encodes, so `>=` / `<=` filters are plain string
//! comparisons on both backends.
//!
//! # Thread safety
//! Implementations must be `Send + Sync` to work with async Rust; all
//! operations are pure reads, so implementations need no locking beyond
//! whatever isolation the store itself provides.

mod error;

use async_trait::async_trait;

use crate::models::DailyReading;

pub use error::{ErrorContext, RepositoryError, RepositoryResult};

/// Repository trait for station metadata reads.
#[async_trait]
pub trait StationRepository: Send + Sync {
    /// Return the name of every station row, in store iteration order,
    /// without deduplication.
    async fn station_names(&self) -> RepositoryResult<Vec<String>>;
}

/// Repository trait for measurement reads.
#[async_trait]
pub trait MeasurementRepository: Send + Sync {
    /// Return the maximum date string across all measurement rows, or
    /// `None` when the table is empty.
    async fn latest_measurement_date(&self) -> RepositoryResult<Option<String>>;

    /// Return (date, precipitation) pairs for all rows with date >= `start`,
    /// in store iteration order.
    async fn precipitation_on_or_after(&self, start: &str)
        -> RepositoryResult<Vec<DailyReading>>;

    /// Return the identifier of the station with the most measurement rows,
    /// or `None` when the table is empty. When several stations share the
    /// top count the store decides which group comes first; the in-memory
    /// backend keeps first-encountered order.
    async fn most_active_station(&self) -> RepositoryResult<Option<String>>;

    /// Return (date, temperature) pairs for `station` with date >= `start`,
    /// in store iteration order.
    async fn temperatures_on_or_after(
        &self,
        station: &str,
        start: &str,
    ) -> RepositoryResult<Vec<DailyReading>>;

    /// Return every non-null temperature with date >= `start` and, when
    /// `end` is given, date <= `end` (inclusive).
    async fn temperatures_in_range(
        &self,
        start: &str,
        end: Option<&str>,
    ) -> RepositoryResult<Vec<f64>>;
}

/// Combined repository trait covering every read the query engine needs.
///
/// Handed to the query engine as an injected `Arc<dyn ClimateRepository>`
/// at construction so tests can substitute an in-memory double.
#[async_trait]
pub trait ClimateRepository: StationRepository + MeasurementRepository {
    /// Verify the backing store is reachable.
    async fn health_check(&self) -> RepositoryResult<bool>;
}
