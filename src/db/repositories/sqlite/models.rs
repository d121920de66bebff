//! Row types for Diesel query results.

use diesel::prelude::*;

use crate::models::DailyReading;

/// A (date, value) projection of the `measurement` table, used for both
/// precipitation and temperature series.
#[derive(Debug, Clone, Queryable)]
pub struct ReadingRow {
    pub date: String,
    pub value: Option<f64>,
}

impl From<ReadingRow> for DailyReading {
    fn from(row: ReadingRow) -> Self {
        DailyReading::new(row.date, row.value)
    }
}
