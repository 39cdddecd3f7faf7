//! Per-day itinerary statistics for the annotated collection.
//!
//! Pure read-only helpers the surrounding application uses to caption the
//! rendered itinerary: route legs and totals for a day (including the
//! return to the hotel), and the nearest scheduled visit to a food stop.

use crate::poi::{PoiCategory, PointOfInterest};
use crate::travel_time::{GeodesicTravelTime, great_circle_km};

/// Legs longer than this are assumed driven even when not leaving the
/// hotel.
const DRIVING_LEG_THRESHOLD_KM: f64 = 2.0;

/// One leg of a day's route.
#[derive(Debug, Clone, PartialEq)]
pub struct RouteLeg {
    pub from_id: String,
    pub to_id: String,
    pub distance_km: f64,
    pub transit_min: i64,
}

/// Aggregate statistics for one planned day.
#[derive(Debug, Clone, PartialEq)]
pub struct DaySummary {
    pub day: u32,
    /// Number of visit POIs scheduled on the day.
    pub stops: usize,
    /// Summed visit durations in minutes.
    pub visit_min: i64,
    /// Distance over all legs, return to the hotel included.
    pub distance_km: f64,
    /// Transit estimate over all legs, return to the hotel included.
    pub transit_min: i64,
}

fn day_stops<'a>(pois: &'a [PointOfInterest], day: u32) -> Vec<&'a PointOfInterest> {
    pois.iter()
        .filter(|p| p.category == PoiCategory::Visit && p.day == day)
        .collect()
}

/// The day's route as hotel -> stops -> hotel legs, in collection order.
///
/// Legs leaving the hotel, and any leg over 2 km, are estimated at driving
/// speed; everything else at walking speed. Returns an empty route when
/// the day has no stops.
pub fn day_legs(
    pois: &[PointOfInterest],
    day: u32,
    model: &GeodesicTravelTime,
) -> Vec<RouteLeg> {
    let stops = day_stops(pois, day);
    if stops.is_empty() {
        return Vec::new();
    }

    let hotel = pois.iter().find(|p| p.category == PoiCategory::Hotel);
    let mut nodes: Vec<&PointOfInterest> = Vec::with_capacity(stops.len() + 2);
    if let Some(h) = hotel {
        nodes.push(h);
    }
    nodes.extend(stops);
    if let Some(h) = hotel {
        nodes.push(h);
    }

    nodes
        .windows(2)
        .map(|pair| {
            let (from, to) = (pair[0], pair[1]);
            let distance_km = great_circle_km(from.coords(), to.coords());
            let speed = if from.category == PoiCategory::Hotel
                || distance_km > DRIVING_LEG_THRESHOLD_KM
            {
                model.driving_speed_kmh
            } else {
                model.walking_speed_kmh
            };
            RouteLeg {
                from_id: from.id.clone(),
                to_id: to.id.clone(),
                distance_km,
                transit_min: model.minutes_for(distance_km, speed),
            }
        })
        .collect()
}

/// Totals for one day, `None` when nothing is scheduled on it.
pub fn day_summary(
    pois: &[PointOfInterest],
    day: u32,
    model: &GeodesicTravelTime,
) -> Option<DaySummary> {
    let stops = day_stops(pois, day);
    if stops.is_empty() {
        return None;
    }

    let legs = day_legs(pois, day, model);
    Some(DaySummary {
        day,
        stops: stops.len(),
        visit_min: stops.iter().map(|p| p.duration_min).sum(),
        distance_km: legs.iter().map(|l| l.distance_km).sum(),
        transit_min: legs.iter().map(|l| l.transit_min).sum(),
    })
}

/// The closest visit POI to `poi` by great-circle distance, with the
/// distance in km. `None` when the collection has no other visit POI.
pub fn nearest_visit<'a>(
    poi: &PointOfInterest,
    pois: &'a [PointOfInterest],
) -> Option<(&'a PointOfInterest, f64)> {
    pois.iter()
        .filter(|p| p.category == PoiCategory::Visit && p.id != poi.id)
        .map(|p| (p, great_circle_km(poi.coords(), p.coords())))
        .min_by(|a, b| a.1.total_cmp(&b.1))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::poi::Period;

    fn poi(id: &str, lat: f64, category: PoiCategory, day: u32) -> PointOfInterest {
        let mut p = PointOfInterest::new(id, id, lat, 0.0, category);
        p.day = day;
        p.duration_min = 60;
        p.period = Period::Morning;
        p
    }

    // 0.009 deg of latitude is ~1.0008 km.
    fn sample_day() -> Vec<PointOfInterest> {
        vec![
            poi("h", 0.0, PoiCategory::Hotel, 0),
            poi("v1", 0.009, PoiCategory::Visit, 1),
            poi("v2", 0.018, PoiCategory::Visit, 1),
        ]
    }

    #[test]
    fn legs_cover_out_and_return() {
        let legs = day_legs(&sample_day(), 1, &GeodesicTravelTime::default());
        assert_eq!(legs.len(), 3);
        assert_eq!(legs[0].from_id, "h");
        assert_eq!(legs[2].to_id, "h");
    }

    #[test]
    fn leg_modes_follow_origin_and_length() {
        let legs = day_legs(&sample_day(), 1, &GeodesicTravelTime::default());
        // hotel -> v1: ~1 km driven
        assert_eq!(legs[0].transit_min, 1);
        // v1 -> v2: ~1 km walked
        assert_eq!(legs[1].transit_min, 12);
        // v2 -> h: ~2 km, over the driving threshold
        assert_eq!(legs[2].transit_min, 3);
    }

    #[test]
    fn summary_totals_include_return_leg() {
        let summary = day_summary(&sample_day(), 1, &GeodesicTravelTime::default()).unwrap();
        assert_eq!(summary.stops, 2);
        assert_eq!(summary.visit_min, 120);
        assert_eq!(summary.transit_min, 16);
        assert!(summary.distance_km > 3.9 && summary.distance_km < 4.1);
    }

    #[test]
    fn no_stops_yields_no_summary() {
        let summary = day_summary(&sample_day(), 3, &GeodesicTravelTime::default());
        assert!(summary.is_none());
    }

    #[test]
    fn nearest_visit_picks_closest() {
        let pois = sample_day();
        let food = poi("f", 0.010, PoiCategory::Food, 0);
        let (nearest, km) = nearest_visit(&food, &pois).unwrap();
        assert_eq!(nearest.id, "v1");
        assert!(km < 0.2);
    }
}
