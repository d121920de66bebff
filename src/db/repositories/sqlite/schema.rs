//! Static schema declarations for the fixed climate dataset.
//!
//! The dataset pre-exists; these tables are declared by hand against the
//! known schema rather than reflected at startup.

diesel::table! {
    station (id) {
        id -> Integer,
        station -> Text,
        name -> Text,
        latitude -> Nullable<Double>,
        longitude -> Nullable<Double>,
        elevation -> Nullable<Double>,
    }
}

diesel::table! {
    measurement (id) {
        id -> Integer,
        station -> Text,
        date -> Text,
        prcp -> Nullable<Double>,
        tobs -> Nullable<Double>,
    }
}

diesel::allow_tables_to_appear_in_same_query!(measurement, station);
