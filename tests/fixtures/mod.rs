//! Test fixtures for trip-planner.
//!
//! Provides POI builders with sensible defaults plus real Paris locations
//! for realistic itineraries.

#![allow(dead_code)]

pub mod paris_locations;

pub use paris_locations::*;

use trip_planner::poi::{PoiCategory, PointOfInterest};

pub fn hotel(id: &str, lat: f64, lon: f64) -> PointOfInterest {
    PointOfInterest::new(id, id, lat, lon, PoiCategory::Hotel)
}

pub fn visit(id: &str, lat: f64, lon: f64, duration_min: i64) -> PointOfInterest {
    let mut poi = PointOfInterest::new(id, id, lat, lon, PoiCategory::Visit);
    poi.duration_min = duration_min;
    poi
}

pub fn food(id: &str, lat: f64, lon: f64) -> PointOfInterest {
    PointOfInterest::new(id, id, lat, lon, PoiCategory::Food)
}

pub fn transport(id: &str, lat: f64, lon: f64) -> PointOfInterest {
    PointOfInterest::new(id, id, lat, lon, PoiCategory::Transport)
}

/// The first fixture hotel as the planning anchor.
pub fn paris_hotel() -> PointOfInterest {
    let loc = &HOTELS[0];
    hotel("hotel", loc.lat, loc.lon)
}

/// All fixture landmarks as visit POIs with a uniform duration.
pub fn landmark_visits(duration_min: i64) -> Vec<PointOfInterest> {
    LANDMARKS
        .iter()
        .enumerate()
        .map(|(i, loc)| {
            let mut poi = PointOfInterest::new(
                format!("v{i}"),
                loc.name,
                loc.lat,
                loc.lon,
                PoiCategory::Visit,
            );
            poi.duration_min = duration_min;
            poi
        })
        .collect()
}
