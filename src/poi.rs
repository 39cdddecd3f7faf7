//! Point-of-interest records exchanged with the surrounding application.
//!
//! The planner receives these as an immutable snapshot and returns new,
//! annotated copies; it never mutates the caller's collection. Serde field
//! names follow the JSON the surrounding application persists.

use serde::{Deserialize, Serialize};

/// Category of a point of interest.
///
/// Only `Visit` POIs and the single `Hotel` anchor participate in
/// optimization; `Food` and `Transport` entries are carried through
/// untouched apart from being stamped unscheduled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PoiCategory {
    Hotel,
    Visit,
    Food,
    Transport,
}

/// Half-day slot a POI is assigned to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Period {
    Morning,
    Afternoon,
    /// Not placed on any day (day = 0).
    Unscheduled,
    /// The hotel itself, the fixed start/end of every day.
    Anchor,
}

impl Default for Period {
    fn default() -> Self {
        Period::Unscheduled
    }
}

/// A visitable location with coordinates, a category, and the three
/// planner-assigned fields (`day`, `period`, `transit_prev`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PointOfInterest {
    pub id: String,
    pub name: String,
    pub lat: f64,
    pub lon: f64,
    #[serde(rename = "type")]
    pub category: PoiCategory,
    /// Visit duration in minutes. Zero for the hotel.
    #[serde(rename = "time_min", default)]
    pub duration_min: i64,
    /// Estimated cost, caller's currency.
    #[serde(default)]
    pub cost: f64,
    /// Day number assigned by the planner. Zero means unscheduled.
    #[serde(default)]
    pub day: u32,
    #[serde(default)]
    pub period: Period,
    /// Transit minutes from the previous stop in the same day, assigned
    /// by the packer. Absent for unscheduled POIs and the anchor.
    #[serde(rename = "transit_prev", default, skip_serializing_if = "Option::is_none")]
    pub transit_from_prev: Option<i64>,
}

impl PointOfInterest {
    /// Creates a POI with zeroed planner fields.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        lat: f64,
        lon: f64,
        category: PoiCategory,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            lat,
            lon,
            category,
            duration_min: 0,
            cost: 0.0,
            day: 0,
            period: Period::Unscheduled,
            transit_from_prev: None,
        }
    }

    /// Location as a (lat, lon) pair in decimal degrees.
    pub fn coords(&self) -> (f64, f64) {
        (self.lat, self.lon)
    }

    /// Clears the planner-assigned fields back to the unscheduled state.
    pub fn clear_assignment(&mut self) {
        self.day = 0;
        self.period = Period::Unscheduled;
        self.transit_from_prev = None;
    }
}
