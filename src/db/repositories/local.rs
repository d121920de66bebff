//! In-memory repository implementation for unit testing and local development.
//!
//! Holds the dataset in plain vectors behind `parking_lot::RwLock`s and
//! answers every query by scanning them in insertion order, which makes the
//! "store iteration order" semantics of the trait deterministic in tests.

use async_trait::async_trait;
use parking_lot::RwLock;

use crate::db::repository::{
    ClimateRepository, MeasurementRepository, RepositoryResult, StationRepository,
};
use crate::models::{DailyReading, Measurement, Station};

/// In-memory implementation of [`ClimateRepository`].
#[derive(Debug, Default)]
pub struct LocalRepository {
    stations: RwLock<Vec<Station>>,
    measurements: RwLock<Vec<Measurement>>,
}

impl LocalRepository {
    /// Create an empty repository.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a repository pre-loaded with a dataset snapshot.
    pub fn with_data(stations: Vec<Station>, measurements: Vec<Measurement>) -> Self {
        Self {
            stations: RwLock::new(stations),
            measurements: RwLock::new(measurements),
        }
    }

    /// Append a station row. Rows keep insertion order.
    pub fn insert_station(&self, station: Station) {
        self.stations.write().push(station);
    }

    /// Append a measurement row. Rows keep insertion order.
    pub fn insert_measurement(&self, measurement: Measurement) {
        self.measurements.write().push(measurement);
    }
}

#[async_trait]
impl StationRepository for LocalRepository {
    async fn station_names(&self) -> RepositoryResult<Vec<String>> {
        Ok(self.stations.read().iter().map(|s| s.name.clone()).collect())
    }
}

#[async_trait]
impl MeasurementRepository for LocalRepository {
    async fn latest_measurement_date(&self) -> RepositoryResult<Option<String>> {
        Ok(self
            .measurements
            .read()
            .iter()
            .map(|m| m.date.clone())
            .max())
    }

    async fn precipitation_on_or_after(
        &self,
        start: &str,
    ) -> RepositoryResult<Vec<DailyReading>> {
        Ok(self
            .measurements
            .read()
            .iter()
            .filter(|m| m.date.as_str() >= start)
            .map(|m| DailyReading::new(m.date.clone(), m.prcp))
            .collect())
    }

    async fn most_active_station(&self) -> RepositoryResult<Option<String>> {
        // Count rows per station while remembering first-encountered order,
        // which is the tie-break for equal counts.
        let measurements = self.measurements.read();
        let mut order: Vec<&str> = Vec::new();
        let mut counts: std::collections::HashMap<&str, usize> =
            std::collections::HashMap::new();
        for m in measurements.iter() {
            let entry = counts.entry(m.station.as_str()).or_insert(0);
            if *entry == 0 {
                order.push(m.station.as_str());
            }
            *entry += 1;
        }

        let mut best: Option<(&str, usize)> = None;
        for station in order {
            let count = counts[station];
            match best {
                Some((_, best_count)) if count <= best_count => {}
                _ => best = Some((station, count)),
            }
        }

        Ok(best.map(|(station, _)| station.to_string()))
    }

    async fn temperatures_on_or_after(
        &self,
        station: &str,
        start: &str,
    ) -> RepositoryResult<Vec<DailyReading>> {
        Ok(self
            .measurements
            .read()
            .iter()
            .filter(|m| m.station == station && m.date.as_str() >= start)
            .map(|m| DailyReading::new(m.date.clone(), m.tobs))
            .collect())
    }

    async fn temperatures_in_range(
        &self,
        start: &str,
        end: Option<&str>,
    ) -> RepositoryResult<Vec<f64>> {
        Ok(self
            .measurements
            .read()
            .iter()
            .filter(|m| {
                m.date.as_str() >= start && end.is_none_or(|end| m.date.as_str() <= end)
            })
            .filter_map(|m| m.tobs)
            .collect())
    }
}

#[async_trait]
impl ClimateRepository for LocalRepository {
    async fn health_check(&self) -> RepositoryResult<bool> {
        Ok(true)
    }
}
