//! The query engine: derived computations over the climate dataset.
//!
//! Four computations are exposed: the windowed precipitation series, the
//! station name list, the temperature series of the most active station,
//! and min/avg/max temperature over a date range. Everything is recomputed
//! per call from the repository; nothing is cached.

use std::collections::BTreeMap;
use std::sync::Arc;

use chrono::{Days, NaiveDate};

use crate::db::repository::{ClimateRepository, RepositoryError};
use crate::models::TemperatureStats;

/// Date encoding used throughout the dataset.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Result type for query engine operations.
pub type ServiceResult<T> = Result<T, ServiceError>;

/// Errors surfaced by the query engine.
#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    /// The measurement table has no rows, so the reference date is undefined.
    #[error("measurement table contains no rows")]
    EmptyDataset,

    /// The stored reference date is not a valid `YYYY-MM-DD` string.
    /// Indicates dataset corruption, not user error.
    #[error("stored reference date '{0}' is not a valid YYYY-MM-DD date")]
    DataFormat(String),

    /// A date-range query matched zero temperature rows; min/avg/max are
    /// undefined over an empty set.
    #[error("no temperature observations match the requested date range")]
    EmptyRange,

    /// The backing store could not be reached or read.
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

/// Read-only query engine over the climate dataset.
///
/// Holds the repository as an injected dependency so tests can substitute
/// an in-memory double. Cloning is cheap; the repository is shared.
#[derive(Clone)]
pub struct QueryEngine {
    repository: Arc<dyn ClimateRepository>,
}

impl QueryEngine {
    /// Create a query engine over the given repository.
    pub fn new(repository: Arc<dyn ClimateRepository>) -> Self {
        Self { repository }
    }

    /// Verify the backing store is reachable.
    pub async fn health_check(&self) -> ServiceResult<bool> {
        Ok(self.repository.health_check().await?)
    }

    /// Start of the "last twelve months" window: the most recent date in
    /// the measurement table minus 365 days.
    ///
    /// Recomputed on every call that needs it. Fails with
    /// [`ServiceError::DataFormat`] when the stored maximum date does not
    /// parse, and [`ServiceError::EmptyDataset`] when there are no rows.
    pub async fn reference_window_start(&self) -> ServiceResult<NaiveDate> {
        let most_recent = self
            .repository
            .latest_measurement_date()
            .await?
            .ok_or(ServiceError::EmptyDataset)?;

        let last = NaiveDate::parse_from_str(&most_recent, DATE_FORMAT)
            .map_err(|_| ServiceError::DataFormat(most_recent.clone()))?;

        last.checked_sub_days(Days::new(365))
            .ok_or(ServiceError::DataFormat(most_recent))
    }

    /// All (date, precipitation) pairs within the last twelve months of
    /// data, across every station.
    ///
    /// When several stations report the same date the mapping keeps the
    /// last value in store iteration order.
    pub async fn precipitation_series(&self) -> ServiceResult<BTreeMap<String, Option<f64>>> {
        let start = self.window_start_string().await?;
        let readings = self.repository.precipitation_on_or_after(&start).await?;

        Ok(readings
            .into_iter()
            .map(|r| (r.date, r.value))
            .collect())
    }

    /// The name of every station, in store iteration order, without
    /// deduplication.
    pub async fn station_names(&self) -> ServiceResult<Vec<String>> {
        Ok(self.repository.station_names().await?)
    }

    /// Temperature observations within the last twelve months of data for
    /// the station with the most measurement rows.
    ///
    /// Same duplicate-date collision policy as [`precipitation_series`].
    /// An empty measurement table surfaces [`ServiceError::EmptyDataset`].
    ///
    /// [`precipitation_series`]: QueryEngine::precipitation_series
    pub async fn most_active_station_temperatures(
        &self,
    ) -> ServiceResult<BTreeMap<String, Option<f64>>> {
        let most_active = self
            .repository
            .most_active_station()
            .await?
            .ok_or(ServiceError::EmptyDataset)?;
        let start = self.window_start_string().await?;

        let readings = self
            .repository
            .temperatures_on_or_after(&most_active, &start)
            .await?;

        Ok(readings
            .into_iter()
            .map(|r| (r.date, r.value))
            .collect())
    }

    /// Minimum, arithmetic mean, and maximum temperature over all rows
    /// with date >= `start` and, when given, date <= `end` (inclusive).
    ///
    /// The mean is rounded to one decimal place, half away from zero.
    /// Null temperatures are excluded. A range matching zero rows, which
    /// includes start > end, fails with [`ServiceError::EmptyRange`]
    /// rather than returning nulls.
    pub async fn temperature_stats(
        &self,
        start: NaiveDate,
        end: Option<NaiveDate>,
    ) -> ServiceResult<TemperatureStats> {
        let start = start.format(DATE_FORMAT).to_string();
        let end = end.map(|d| d.format(DATE_FORMAT).to_string());

        let temps = self
            .repository
            .temperatures_in_range(&start, end.as_deref())
            .await?;

        if temps.is_empty() {
            return Err(ServiceError::EmptyRange);
        }

        let min = temps.iter().copied().fold(f64::INFINITY, f64::min);
        let max = temps.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        let avg = temps.iter().sum::<f64>() / temps.len() as f64;

        Ok(TemperatureStats {
            min,
            avg: round_to_tenth(avg),
            max,
        })
    }

    async fn window_start_string(&self) -> ServiceResult<String> {
        let start = self.reference_window_start().await?;
        Ok(start.format(DATE_FORMAT).to_string())
    }
}

/// Round to one decimal place, half away from zero.
fn round_to_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
