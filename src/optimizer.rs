//! Planning entry point and result assembly.
//!
//! Validates the input collection, runs the annealing search over the
//! visit POIs, and merges everything back into a single annotated
//! collection for the caller to persist.

use std::collections::HashSet;

use thiserror::Error;
use tracing::info;

use crate::annealing::{self, AnnealingOptions};
use crate::packer::PlannerConfig;
use crate::poi::{PoiCategory, PointOfInterest};
use crate::travel_time::TravelTimeProvider;

/// Failures that prevent optimization from running at all.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PlanError {
    /// No POI in the collection is marked as the hotel anchor.
    #[error("define a hotel before optimizing")]
    MissingHotel,
}

/// The annotated collection plus a human-readable status message.
#[derive(Debug, Clone)]
pub struct OptimizedPlan {
    pub pois: Vec<PointOfInterest>,
    pub message: String,
}

/// Optimizes the itinerary for a full POI collection.
///
/// Runs synchronously to completion; callers needing responsiveness should
/// run it off the interactive path. The input is never mutated.
pub fn optimize<M: TravelTimeProvider>(
    pois: &[PointOfInterest],
    provider: &M,
    config: &PlannerConfig,
    options: &AnnealingOptions,
) -> Result<OptimizedPlan, PlanError> {
    let hotel = pois
        .iter()
        .find(|p| p.category == PoiCategory::Hotel)
        .ok_or(PlanError::MissingHotel)?;

    let visits: Vec<PointOfInterest> = pois
        .iter()
        .filter(|p| p.category == PoiCategory::Visit)
        .cloned()
        .collect();

    if visits.is_empty() {
        let echoed = pois
            .iter()
            .cloned()
            .map(|mut p| {
                if p.category != PoiCategory::Hotel {
                    p.clear_assignment();
                }
                p
            })
            .collect();
        return Ok(OptimizedPlan {
            pois: echoed,
            message: "Add visit-type points of interest to generate an itinerary.".to_owned(),
        });
    }

    info!(
        visits = visits.len(),
        iterations = options.iterations,
        "starting itinerary optimization"
    );

    let mut nodes = visits.clone();
    nodes.push(hotel.clone());
    let matrix = provider.matrix_for(&nodes);

    let result = annealing::search(&visits, hotel, &matrix, config, options);
    info!(
        best_energy = result.best_energy,
        accepted = result.accepted_moves,
        improving = result.improving_moves,
        "annealing finished"
    );

    // Reintroduce everything the optimizer never saw (food, transport,
    // surplus anchors), cleared of any stale day assignment.
    let optimized_ids: HashSet<String> = result.schedule.iter().map(|p| p.id.clone()).collect();
    let mut out = result.schedule;
    for poi in pois {
        if !optimized_ids.contains(&poi.id) {
            let mut other = poi.clone();
            other.clear_assignment();
            out.push(other);
        }
    }

    Ok(OptimizedPlan {
        pois: out,
        message: "Optimization complete.".to_owned(),
    })
}
