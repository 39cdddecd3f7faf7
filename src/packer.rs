//! Greedy day/period packer.
//!
//! Decodes a candidate permutation of visit POIs into a concrete multi-day
//! schedule by first-fitting POIs into each half-day's remaining budget.
//! Fully deterministic; the annealing search uses it as a fitness oracle.

use crate::poi::{Period, PointOfInterest};
use crate::travel_time::TravelTimeMatrix;

/// Time-budget parameters for a planning run.
///
/// Passed in explicitly so concurrent runs with different parameters never
/// interfere.
#[derive(Debug, Clone)]
pub struct PlannerConfig {
    /// Nominal morning budget in hours.
    pub morning_hours: u32,
    /// Nominal afternoon budget in hours.
    pub afternoon_hours: u32,
    /// Slack added on top of each period's nominal budget.
    pub tolerance_min: i64,
    /// Hard cap on the number of planned days.
    pub max_days: u32,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            morning_hours: 4,
            afternoon_hours: 4,
            tolerance_min: 30,
            max_days: 10,
        }
    }
}

impl PlannerConfig {
    fn morning_budget_min(&self) -> i64 {
        i64::from(self.morning_hours) * 60 + self.tolerance_min
    }

    fn afternoon_budget_min(&self) -> i64 {
        i64::from(self.afternoon_hours) * 60 + self.tolerance_min
    }
}

/// Outcome of packing one permutation.
#[derive(Debug, Clone, PartialEq)]
pub struct PackedSchedule {
    /// Placed POIs in visiting order, stamped with day, period, and transit.
    pub entries: Vec<PointOfInterest>,
    /// Number of POIs placed.
    pub visited: usize,
    /// Sum of the transit legs actually taken, in minutes.
    pub travel_min: i64,
}

/// Packs `order` into day/period slots, first-fit in permutation order.
///
/// Works on an owned copy of the input; the caller's POIs are untouched.
/// Days run from 1 up to the configured cap; the loop ends early once a
/// whole day places nothing.
pub fn pack(
    order: &[PointOfInterest],
    hotel: &PointOfInterest,
    matrix: &TravelTimeMatrix,
    config: &PlannerConfig,
) -> PackedSchedule {
    let mut pending: Vec<PointOfInterest> = order.to_vec();
    let mut entries = Vec::new();
    let mut travel_min = 0i64;

    let mut day = 1u32;
    while !pending.is_empty() && day <= config.max_days {
        let morning = fill_period(
            &mut pending,
            &hotel.id,
            matrix,
            config.morning_budget_min(),
            day,
            Period::Morning,
            &mut travel_min,
        );

        // The afternoon picks up wherever the morning left off.
        let afternoon_start = morning
            .last()
            .map_or_else(|| hotel.id.clone(), |p| p.id.clone());
        let afternoon = fill_period(
            &mut pending,
            &afternoon_start,
            matrix,
            config.afternoon_budget_min(),
            day,
            Period::Afternoon,
            &mut travel_min,
        );

        if morning.is_empty() && afternoon.is_empty() {
            break;
        }
        entries.extend(morning);
        entries.extend(afternoon);
        day += 1;
    }

    let visited = entries.len();
    PackedSchedule {
        entries,
        visited,
        travel_min,
    }
}

/// Single forward scan over the pending list: commit every POI whose
/// transit + duration still fits the remaining budget, skip the rest.
/// Skipped POIs are not reconsidered within this period.
fn fill_period(
    pending: &mut Vec<PointOfInterest>,
    start_id: &str,
    matrix: &TravelTimeMatrix,
    budget_min: i64,
    day: u32,
    period: Period,
    travel_total: &mut i64,
) -> Vec<PointOfInterest> {
    let mut placed: Vec<PointOfInterest> = Vec::new();
    let mut spent = 0i64;
    let mut at = start_id.to_owned();

    let mut i = 0;
    while i < pending.len() {
        let transit = matrix.minutes_between(&at, &pending[i].id);
        let cost = transit + pending[i].duration_min;
        if spent + cost <= budget_min {
            let mut poi = pending.remove(i);
            at.clone_from(&poi.id);
            poi.day = day;
            poi.period = period;
            poi.transit_from_prev = Some(transit);
            spent += cost;
            *travel_total += transit;
            placed.push(poi);
            // removal shifts the next candidate into slot i
        } else {
            i += 1;
        }
    }

    placed
}
