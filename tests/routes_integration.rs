//! Handler-level tests against a seeded in-memory repository.

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;

use climate_api::db::repositories::LocalRepository;
use climate_api::http::handlers::{self, INVALID_DATE_MESSAGE};
use climate_api::http::AppState;
use climate_api::models::{Measurement, Station};

fn seeded_state() -> AppState {
    let repo = LocalRepository::new();
    repo.insert_station(Station {
        id: 1,
        station: "USC00519281".to_string(),
        name: "WAIHEE 837.5, HI US".to_string(),
        latitude: Some(21.45),
        longitude: Some(-157.84),
        elevation: Some(32.9),
    });
    repo.insert_station(Station {
        id: 2,
        station: "USC00519397".to_string(),
        name: "WAIKIKI 717.2, HI US".to_string(),
        latitude: Some(21.27),
        longitude: Some(-157.82),
        elevation: Some(3.0),
    });

    // USC00519281 is the most active station (three rows to one).
    let rows = [
        ("USC00519281", "2017-01-05", Some(0.1), Some(60.0)),
        ("USC00519281", "2017-01-15", Some(0.0), Some(70.0)),
        ("USC00519281", "2017-08-23", Some(0.45), Some(81.0)),
        ("USC00519397", "2017-01-15", Some(0.2), Some(65.0)),
    ];
    for (id, (station, date, prcp, tobs)) in rows.into_iter().enumerate() {
        repo.insert_measurement(Measurement {
            id: id as i32 + 1,
            station: station.to_string(),
            date: date.to_string(),
            prcp,
            tobs,
        });
    }

    AppState::new(Arc::new(repo))
}

async fn error_body(response: axum::response::Response) -> serde_json::Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn health_check_reports_connected_store() {
    let state = seeded_state();
    let health = handlers::health_check(State(state)).await.unwrap().0;
    assert_eq!(health.status, "ok");
    assert_eq!(health.database, "connected");
}

#[tokio::test]
async fn home_lists_the_available_routes() {
    let routes = handlers::home().await.0;
    let paths: Vec<&str> = routes.iter().map(|r| r.path.as_str()).collect();
    assert!(paths.contains(&"/api/v1.0/precipitation"));
    assert!(paths.contains(&"/api/v1.0/stations"));
    assert!(paths.contains(&"/api/v1.0/tobs"));
    assert!(paths.contains(&"/api/v1.0/{start}"));
    assert!(paths.contains(&"/api/v1.0/{start}/{end}"));
}

#[tokio::test]
async fn precipitation_returns_windowed_series() {
    let state = seeded_state();
    let series = handlers::precipitation(State(state)).await.unwrap().0;

    // Window start is 2016-08-23, so every seeded row is in range.
    assert_eq!(series.len(), 3);
    assert_eq!(series["2017-08-23"], Some(0.45));
    // Duplicate date: the later row in iteration order wins.
    assert_eq!(series["2017-01-15"], Some(0.2));
}

#[tokio::test]
async fn stations_returns_all_names_in_order() {
    let state = seeded_state();
    let names = handlers::stations(State(state)).await.unwrap().0;
    assert_eq!(
        names,
        vec!["WAIHEE 837.5, HI US", "WAIKIKI 717.2, HI US"]
    );
}

#[tokio::test]
async fn tobs_returns_series_for_most_active_station_only() {
    let state = seeded_state();
    let series = handlers::temperature_observations(State(state))
        .await
        .unwrap()
        .0;

    assert_eq!(series.len(), 3);
    // USC00519397's reading for the shared date must not appear.
    assert_eq!(series["2017-01-15"], Some(70.0));
}

#[tokio::test]
async fn start_route_computes_stats() {
    let state = seeded_state();
    let stats = handlers::stats_from_start(State(state), Path("2017-01-01".to_string()))
        .await
        .unwrap()
        .0;

    assert_eq!(stats.min, 60.0);
    assert_eq!(stats.max, 81.0);
    assert_eq!(stats.avg, 69.0);
}

#[tokio::test]
async fn range_route_honors_inclusive_end() {
    let state = seeded_state();
    let stats = handlers::stats_for_range(
        State(state),
        Path(("2017-01-01".to_string(), "2017-01-15".to_string())),
    )
    .await
    .unwrap()
    .0;

    assert_eq!(stats.min, 60.0);
    assert_eq!(stats.max, 70.0);
    assert_eq!(stats.avg, 65.0);
}

#[tokio::test]
async fn malformed_start_date_is_a_400_with_fixed_message() {
    let state = seeded_state();
    let err = handlers::stats_from_start(State(state), Path("2017/01/01".to_string()))
        .await
        .unwrap_err();

    let response = err.into_response();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = error_body(response).await;
    assert_eq!(body["message"], INVALID_DATE_MESSAGE);
}

#[tokio::test]
async fn malformed_end_date_is_a_400() {
    let state = seeded_state();
    let err = handlers::stats_for_range(
        State(state),
        Path(("2017-01-01".to_string(), "2017-02-30".to_string())),
    )
    .await
    .unwrap_err();

    assert_eq!(err.into_response().status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn empty_range_is_reported_not_silently_null() {
    let state = seeded_state();
    let err = handlers::stats_from_start(State(state), Path("2018-01-01".to_string()))
        .await
        .unwrap_err();

    let response = err.into_response();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body = error_body(response).await;
    assert_eq!(body["code"], "NOT_FOUND");
}

#[tokio::test]
async fn empty_dataset_surfaces_as_server_error() {
    let state = AppState::new(Arc::new(LocalRepository::new()));
    let err = handlers::precipitation(State(state)).await.unwrap_err();
    assert_eq!(
        err.into_response().status(),
        StatusCode::INTERNAL_SERVER_ERROR
    );
}
