//! Repository-level tests for the in-memory backend.

use climate_api::db::repositories::LocalRepository;
use climate_api::db::repository::{MeasurementRepository, StationRepository};
use climate_api::models::{Measurement, Station};

fn measurement(id: i32, station: &str, date: &str, tobs: Option<f64>) -> Measurement {
    Measurement {
        id,
        station: station.to_string(),
        date: date.to_string(),
        prcp: Some(0.0),
        tobs,
    }
}

#[tokio::test]
async fn latest_date_is_the_lexicographic_maximum() {
    let repo = LocalRepository::new();
    repo.insert_measurement(measurement(1, "S1", "2017-08-23", Some(80.0)));
    repo.insert_measurement(measurement(2, "S1", "2017-12-01", Some(70.0)));
    repo.insert_measurement(measurement(3, "S1", "2016-05-05", Some(60.0)));

    let latest = repo.latest_measurement_date().await.unwrap();
    assert_eq!(latest.as_deref(), Some("2017-12-01"));
}

#[tokio::test]
async fn latest_date_is_none_for_empty_table() {
    let repo = LocalRepository::new();
    assert_eq!(repo.latest_measurement_date().await.unwrap(), None);
}

#[tokio::test]
async fn most_active_station_breaks_ties_by_first_encountered() {
    let repo = LocalRepository::new();
    // X and Y both have two rows; X appears first.
    repo.insert_measurement(measurement(1, "X", "2017-01-01", Some(70.0)));
    repo.insert_measurement(measurement(2, "Y", "2017-01-01", Some(71.0)));
    repo.insert_measurement(measurement(3, "Y", "2017-01-02", Some(72.0)));
    repo.insert_measurement(measurement(4, "X", "2017-01-02", Some(73.0)));

    let winner = repo.most_active_station().await.unwrap();
    assert_eq!(winner.as_deref(), Some("X"));
}

#[tokio::test]
async fn most_active_station_prefers_strictly_higher_counts() {
    let repo = LocalRepository::new();
    repo.insert_measurement(measurement(1, "A", "2017-01-01", Some(70.0)));
    repo.insert_measurement(measurement(2, "B", "2017-01-01", Some(71.0)));
    repo.insert_measurement(measurement(3, "B", "2017-01-02", Some(72.0)));

    let winner = repo.most_active_station().await.unwrap();
    assert_eq!(winner.as_deref(), Some("B"));
}

#[tokio::test]
async fn temperatures_in_range_excludes_nulls_and_honors_bounds() {
    let repo = LocalRepository::new();
    repo.insert_measurement(measurement(1, "S1", "2017-01-01", Some(60.0)));
    repo.insert_measurement(measurement(2, "S1", "2017-01-10", None));
    repo.insert_measurement(measurement(3, "S1", "2017-01-20", Some(70.0)));
    repo.insert_measurement(measurement(4, "S1", "2017-02-01", Some(80.0)));

    let temps = repo
        .temperatures_in_range("2017-01-01", Some("2017-01-31"))
        .await
        .unwrap();
    assert_eq!(temps, vec![60.0, 70.0]);

    let open_ended = repo.temperatures_in_range("2017-01-15", None).await.unwrap();
    assert_eq!(open_ended, vec![70.0, 80.0]);
}

#[tokio::test]
async fn station_names_keep_insertion_order() {
    let repo = LocalRepository::new();
    for (id, name) in ["KANEOHE", "WAIHEE", "WAIKIKI"].iter().enumerate() {
        repo.insert_station(Station {
            id: id as i32 + 1,
            station: format!("S{}", id + 1),
            name: name.to_string(),
            latitude: None,
            longitude: None,
            elevation: None,
        });
    }

    let names = repo.station_names().await.unwrap();
    assert_eq!(names, vec!["KANEOHE", "WAIHEE", "WAIKIKI"]);
}
