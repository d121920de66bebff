//! SQLite repository implementation using Diesel.
//!
//! This backend reads the fixed climate dataset (a pre-existing SQLite
//! file) through an r2d2 connection pool. Every operation checks a
//! connection out of the pool inside `spawn_blocking` and returns it on
//! every exit path; failures surface immediately as [`RepositoryError`]s
//! without retries, since each operation is a single read against a
//! static dataset.
//!
//! ## Configuration
//!
//! Environment variables:
//! - `DATABASE_URL`: Path to the SQLite dataset file (required)
//! - `SQLITE_POOL_MAX`: Maximum pool size (default: 10)
//! - `SQLITE_CONN_TIMEOUT_SEC`: Connection timeout in seconds (default: 30)

use async_trait::async_trait;
use diesel::dsl::count_star;
use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, Pool};
use diesel::sql_query;
use diesel::sqlite::SqliteConnection;
use std::time::Duration;
use tokio::task;

use crate::db::repository::{
    ClimateRepository, ErrorContext, MeasurementRepository, RepositoryError, RepositoryResult,
    StationRepository,
};
use crate::models::DailyReading;

mod models;
mod schema;

use models::ReadingRow;
use schema::{measurement, station};

type SqlitePool = Pool<ConnectionManager<SqliteConnection>>;

/// Configuration for opening the SQLite dataset.
#[derive(Debug, Clone)]
pub struct SqliteConfig {
    /// Path or URL of the SQLite database file
    pub database_url: String,
    /// Maximum number of connections in the pool
    pub max_pool_size: u32,
    /// Connection timeout in seconds
    pub connection_timeout_sec: u64,
}

impl Default for SqliteConfig {
    fn default() -> Self {
        Self {
            database_url: String::new(),
            max_pool_size: 10,
            connection_timeout_sec: 30,
        }
    }
}

impl SqliteConfig {
    /// Create configuration from environment variables.
    ///
    /// # Environment Variables
    /// - `DATABASE_URL`: Path to the SQLite dataset file (required)
    /// - `SQLITE_POOL_MAX`: Maximum pool size (default: 10)
    /// - `SQLITE_CONN_TIMEOUT_SEC`: Connection timeout in seconds (default: 30)
    pub fn from_env() -> Result<Self, String> {
        let database_url = std::env::var("DATABASE_URL")
            .map_err(|_| "DATABASE_URL must be set".to_string())?;

        let max_pool_size = std::env::var("SQLITE_POOL_MAX")
            .ok()
            .and_then(|v| v.parse::<u32>().ok())
            .unwrap_or(10);

        let connection_timeout_sec = std::env::var("SQLITE_CONN_TIMEOUT_SEC")
            .ok()
            .and_then(|v| v.parse::<u64>().ok())
            .unwrap_or(30);

        Ok(Self {
            database_url,
            max_pool_size,
            connection_timeout_sec,
        })
    }

    /// Create a new configuration with a database URL.
    pub fn with_url(database_url: impl Into<String>) -> Self {
        Self {
            database_url: database_url.into(),
            ..Default::default()
        }
    }
}

/// Diesel-backed repository for the SQLite climate dataset.
#[derive(Clone)]
pub struct SqliteRepository {
    pool: SqlitePool,
}

impl SqliteRepository {
    /// Open the dataset and build the connection pool.
    pub fn new(config: SqliteConfig) -> RepositoryResult<Self> {
        let manager = ConnectionManager::<SqliteConnection>::new(&config.database_url);

        let pool = Pool::builder()
            .max_size(config.max_pool_size)
            .connection_timeout(Duration::from_secs(config.connection_timeout_sec))
            .test_on_check_out(true)
            .build(manager)
            .map_err(|e| {
                RepositoryError::connection_with_context(
                    e.to_string(),
                    ErrorContext::new("create_pool")
                        .with_details(format!("url={}", config.database_url)),
                )
            })?;

        Ok(Self { pool })
    }

    /// Run a read against a pooled connection on the blocking thread pool.
    ///
    /// The connection is scoped to the closure and returned to the pool on
    /// every exit path.
    async fn with_conn<T, F>(&self, operation: &'static str, f: F) -> RepositoryResult<T>
    where
        T: Send + 'static,
        F: FnOnce(&mut SqliteConnection) -> RepositoryResult<T> + Send + 'static,
    {
        let pool = self.pool.clone();

        task::spawn_blocking(move || {
            let mut conn = pool.get().map_err(|e| {
                RepositoryError::connection_with_context(
                    e.to_string(),
                    ErrorContext::new(operation),
                )
            })?;
            f(&mut conn).map_err(|e| e.with_operation(operation))
        })
        .await
        .map_err(|e| {
            RepositoryError::internal_with_context(
                format!("Task join error: {}", e),
                ErrorContext::new(operation),
            )
        })?
    }
}

#[async_trait]
impl StationRepository for SqliteRepository {
    async fn station_names(&self) -> RepositoryResult<Vec<String>> {
        self.with_conn("station_names", |conn| {
            station::table
                .select(station::name)
                .load::<String>(conn)
                .map_err(RepositoryError::from)
        })
        .await
    }
}

#[async_trait]
impl MeasurementRepository for SqliteRepository {
    async fn latest_measurement_date(&self) -> RepositoryResult<Option<String>> {
        self.with_conn("latest_measurement_date", |conn| {
            measurement::table
                .select(diesel::dsl::max(measurement::date))
                .first::<Option<String>>(conn)
                .map_err(RepositoryError::from)
        })
        .await
    }

    async fn precipitation_on_or_after(
        &self,
        start: &str,
    ) -> RepositoryResult<Vec<DailyReading>> {
        let start = start.to_owned();
        self.with_conn("precipitation_on_or_after", move |conn| {
            let rows = measurement::table
                .filter(measurement::date.ge(start))
                .select((measurement::date, measurement::prcp))
                .load::<ReadingRow>(conn)
                .map_err(RepositoryError::from)?;
            Ok(rows.into_iter().map(Into::into).collect())
        })
        .await
    }

    async fn most_active_station(&self) -> RepositoryResult<Option<String>> {
        self.with_conn("most_active_station", |conn| {
            measurement::table
                .group_by(measurement::station)
                .select((measurement::station, count_star()))
                .order(count_star().desc())
                .first::<(String, i64)>(conn)
                .optional()
                .map_err(RepositoryError::from)
                .map(|row| row.map(|(station, _)| station))
        })
        .await
    }

    async fn temperatures_on_or_after(
        &self,
        station_id: &str,
        start: &str,
    ) -> RepositoryResult<Vec<DailyReading>> {
        let station_id = station_id.to_owned();
        let start = start.to_owned();
        self.with_conn("temperatures_on_or_after", move |conn| {
            let rows = measurement::table
                .filter(measurement::station.eq(station_id))
                .filter(measurement::date.ge(start))
                .select((measurement::date, measurement::tobs))
                .load::<ReadingRow>(conn)
                .map_err(RepositoryError::from)?;
            Ok(rows.into_iter().map(Into::into).collect())
        })
        .await
    }

    async fn temperatures_in_range(
        &self,
        start: &str,
        end: Option<&str>,
    ) -> RepositoryResult<Vec<f64>> {
        let start = start.to_owned();
        let end = end.map(str::to_owned);
        self.with_conn("temperatures_in_range", move |conn| {
            let mut query = measurement::table
                .filter(measurement::date.ge(start))
                .filter(measurement::tobs.is_not_null())
                .select(measurement::tobs)
                .into_boxed();
            if let Some(end) = end {
                query = query.filter(measurement::date.le(end));
            }
            let rows = query
                .load::<Option<f64>>(conn)
                .map_err(RepositoryError::from)?;
            Ok(rows.into_iter().flatten().collect())
        })
        .await
    }
}

#[async_trait]
impl ClimateRepository for SqliteRepository {
    async fn health_check(&self) -> RepositoryResult<bool> {
        self.with_conn("health_check", |conn| {
            sql_query("SELECT 1")
                .execute(conn)
                .map_err(RepositoryError::from)
                .map(|_| true)
        })
        .await
    }
}
