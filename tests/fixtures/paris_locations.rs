//! Real Paris locations for realistic test fixtures.
//!
//! Coordinates sourced from OpenStreetMap. Distances between these are in
//! comfortable walking range, which keeps packed schedules multi-stop.

/// A named location with coordinates.
#[derive(Debug, Clone)]
pub struct Location {
    pub name: &'static str,
    pub lat: f64,
    pub lon: f64,
}

impl Location {
    pub const fn new(name: &'static str, lat: f64, lon: f64) -> Self {
        Self { name, lat, lon }
    }

    pub fn coords(&self) -> (f64, f64) {
        (self.lat, self.lon)
    }
}

// ============================================================================
// Hotels (anchor candidates)
// ============================================================================

pub const HOTELS: &[Location] = &[
    Location::new("Hotel du Louvre", 48.8630, 2.3362),
    Location::new("Le Meurice", 48.8655, 2.3281),
];

// ============================================================================
// Landmarks (visit POIs)
// ============================================================================

pub const LANDMARKS: &[Location] = &[
    Location::new("Eiffel Tower", 48.8584, 2.2945),
    Location::new("Louvre Museum", 48.8606, 2.3376),
    Location::new("Notre-Dame", 48.8530, 2.3499),
    Location::new("Sacre-Coeur", 48.8867, 2.3431),
    Location::new("Arc de Triomphe", 48.8738, 2.2950),
    Location::new("Pantheon", 48.8462, 2.3464),
    Location::new("Musee d'Orsay", 48.8600, 2.3266),
    Location::new("Luxembourg Gardens", 48.8462, 2.3372),
];

// ============================================================================
// Restaurants (excluded from optimization)
// ============================================================================

pub const RESTAURANTS: &[Location] = &[
    Location::new("Le Procope", 48.8531, 2.3390),
    Location::new("Bouillon Chartier", 48.8721, 2.3430),
];
