//! Pairwise travel-time model.
//!
//! Builds a directed minute matrix over the visit POIs and the hotel from
//! great-circle distances. The matrix is asymmetric: legs leaving the
//! hotel assume motorized transport, legs leaving any other POI assume
//! walking, so (hotel -> X) and (X -> hotel) differ.

use std::collections::HashMap;

use crate::poi::{PoiCategory, PointOfInterest};

/// Assumed walking speed.
pub const DEFAULT_WALKING_SPEED_KMH: f64 = 5.0;

/// Assumed driving speed for legs leaving the hotel.
pub const DEFAULT_DRIVING_SPEED_KMH: f64 = 35.0;

/// Earth radius in kilometers.
const EARTH_RADIUS_KM: f64 = 6371.0;

/// Great-circle (haversine) distance between two (lat, lon) points in km.
pub fn great_circle_km(from: (f64, f64), to: (f64, f64)) -> f64 {
    let (lat1, lon1) = from;
    let (lat2, lon2) = to;

    let lat1_rad = lat1.to_radians();
    let lat2_rad = lat2.to_radians();
    let delta_lat = (lat2 - lat1).to_radians();
    let delta_lon = (lon2 - lon1).to_radians();

    let a = (delta_lat / 2.0).sin().powi(2)
        + lat1_rad.cos() * lat2_rad.cos() * (delta_lon / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().asin();

    EARTH_RADIUS_KM * c
}

/// Precomputed directed travel times in minutes, keyed by POI id.
///
/// Lookups for an id pair the matrix was not built over return 0 rather
/// than panicking; the planner only queries pairs it precomputed.
#[derive(Debug, Clone)]
pub struct TravelTimeMatrix {
    index: HashMap<String, usize>,
    minutes: Vec<Vec<i64>>,
}

impl TravelTimeMatrix {
    /// Creates a zeroed matrix over the given ids.
    pub fn new(ids: impl IntoIterator<Item = String>) -> Self {
        let index: HashMap<String, usize> = ids
            .into_iter()
            .enumerate()
            .map(|(i, id)| (id, i))
            .collect();
        let n = index.len();
        Self {
            index,
            minutes: vec![vec![0; n]; n],
        }
    }

    /// Sets the directed time for a tracked pair. Untracked ids are ignored.
    pub fn set(&mut self, from: &str, to: &str, minutes: i64) {
        if let (Some(&i), Some(&j)) = (self.index.get(from), self.index.get(to)) {
            self.minutes[i][j] = minutes;
        }
    }

    /// Directed travel time in minutes, 0 for untracked pairs.
    pub fn minutes_between(&self, from: &str, to: &str) -> i64 {
        match (self.index.get(from), self.index.get(to)) {
            (Some(&i), Some(&j)) => self.minutes[i][j],
            _ => 0,
        }
    }
}

/// Provides the travel-time matrix for a set of POIs.
///
/// The seam between the planner and the time model: production code uses
/// [`GeodesicTravelTime`], tests can substitute synthetic matrices.
pub trait TravelTimeProvider {
    fn matrix_for(&self, nodes: &[PointOfInterest]) -> TravelTimeMatrix;
}

/// Geodesic travel-time model with category-keyed mode selection.
#[derive(Debug, Clone)]
pub struct GeodesicTravelTime {
    pub walking_speed_kmh: f64,
    pub driving_speed_kmh: f64,
}

impl Default for GeodesicTravelTime {
    fn default() -> Self {
        Self {
            walking_speed_kmh: DEFAULT_WALKING_SPEED_KMH,
            driving_speed_kmh: DEFAULT_DRIVING_SPEED_KMH,
        }
    }
}

impl GeodesicTravelTime {
    pub fn new(walking_speed_kmh: f64, driving_speed_kmh: f64) -> Self {
        Self {
            walking_speed_kmh,
            driving_speed_kmh,
        }
    }

    /// Speed applied to a leg leaving `origin`.
    fn speed_from(&self, origin: &PointOfInterest) -> f64 {
        if origin.category == PoiCategory::Hotel {
            self.driving_speed_kmh
        } else {
            self.walking_speed_kmh
        }
    }

    /// Converts a distance to whole minutes at the given speed, rounding down.
    pub fn minutes_for(&self, km: f64, speed_kmh: f64) -> i64 {
        ((km / speed_kmh) * 60.0) as i64
    }
}

impl TravelTimeProvider for GeodesicTravelTime {
    fn matrix_for(&self, nodes: &[PointOfInterest]) -> TravelTimeMatrix {
        let mut matrix = TravelTimeMatrix::new(nodes.iter().map(|p| p.id.clone()));

        for from in nodes {
            for to in nodes {
                if from.id == to.id {
                    continue;
                }
                let km = great_circle_km(from.coords(), to.coords());
                let minutes = self.minutes_for(km, self.speed_from(from));
                matrix.set(&from.id, &to.id, minutes);
            }
        }

        matrix
    }
}
