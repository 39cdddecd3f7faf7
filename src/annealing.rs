//! Simulated-annealing search over visiting orders.
//!
//! The state is a permutation of the visit POIs; the packer scores each
//! candidate. Worse orders are accepted with probability exp(-delta / T)
//! under a geometric cooling schedule, and the best schedule ever observed
//! is what gets returned.

use rand::rngs::StdRng;
use rand::seq::{SliceRandom, index};
use rand::{Rng, SeedableRng};
use tracing::debug;

use crate::packer::{self, PackedSchedule, PlannerConfig};
use crate::poi::{Period, PointOfInterest};
use crate::travel_time::TravelTimeMatrix;

/// Reward per visited POI in the energy function. Large enough that
/// coverage dominates travel time; travel only breaks ties.
const VISITED_WEIGHT: i64 = 10_000;

/// Floor for the cooling schedule so the Metropolis ratio never divides
/// by zero late in the run.
const MIN_TEMPERATURE: f64 = 1e-9;

/// Search parameters, including the injected seed for reproducible runs.
#[derive(Debug, Clone)]
pub struct AnnealingOptions {
    /// Fixed iteration budget; there is no early stopping.
    pub iterations: usize,
    pub initial_temperature: f64,
    /// Geometric decay factor applied after every iteration.
    pub cooling_rate: f64,
    /// Seed for the search's RNG. `None` seeds from OS entropy.
    pub seed: Option<u64>,
}

impl Default for AnnealingOptions {
    fn default() -> Self {
        Self {
            iterations: 3000,
            initial_temperature: 1000.0,
            cooling_rate: 0.995,
            seed: None,
        }
    }
}

/// Result of an annealing run.
#[derive(Debug, Clone)]
pub struct AnnealingResult {
    /// Hotel anchor, then the best schedule's entries, then never-placed
    /// visit POIs stamped unscheduled.
    pub schedule: Vec<PointOfInterest>,
    /// Energy of the best schedule found.
    pub best_energy: i64,
    /// Best-so-far energy after each iteration, starting with the energy
    /// of the initial permutation.
    pub energy_history: Vec<i64>,
    /// Moves accepted by the Metropolis criterion (improvements included).
    pub accepted_moves: usize,
    /// Strictly improving moves.
    pub improving_moves: usize,
}

fn energy(packed: &PackedSchedule) -> i64 {
    -(packed.visited as i64 * VISITED_WEIGHT) + packed.travel_min
}

/// Runs the annealing search and returns the best finalized schedule.
pub fn search(
    visits: &[PointOfInterest],
    hotel: &PointOfInterest,
    matrix: &TravelTimeMatrix,
    config: &PlannerConfig,
    options: &AnnealingOptions,
) -> AnnealingResult {
    let mut rng = match options.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    let mut current: Vec<PointOfInterest> = visits.to_vec();
    current.shuffle(&mut rng);

    let packed = packer::pack(&current, hotel, matrix, config);
    let mut current_energy = energy(&packed);
    let mut best = packed;
    let mut best_energy = current_energy;

    let mut temperature = options.initial_temperature;
    let mut energy_history = Vec::with_capacity(options.iterations + 1);
    energy_history.push(best_energy);
    let mut accepted_moves = 0usize;
    let mut improving_moves = 0usize;

    // A permutation of fewer than two POIs has no neighbors; the initial
    // evaluation above is already the answer.
    if current.len() >= 2 {
        for iteration in 0..options.iterations {
            let mut candidate = current.clone();
            let picks = index::sample(&mut rng, candidate.len(), 2);
            candidate.swap(picks.index(0), picks.index(1));

            let packed = packer::pack(&candidate, hotel, matrix, config);
            let candidate_energy = energy(&packed);
            let delta = candidate_energy - current_energy;

            let accept = delta < 0
                || rng.random::<f64>() < (-(delta as f64) / temperature).exp();
            if accept {
                accepted_moves += 1;
                if delta < 0 {
                    improving_moves += 1;
                }
                current = candidate;
                current_energy = candidate_energy;
                if candidate_energy < best_energy {
                    best_energy = candidate_energy;
                    best = packed;
                    debug!(iteration, energy = best_energy, "new best schedule");
                }
            }

            temperature = (temperature * options.cooling_rate).max(MIN_TEMPERATURE);
            energy_history.push(best_energy);
        }
    }

    AnnealingResult {
        schedule: finalize(visits, hotel, &best),
        best_energy,
        energy_history,
        accepted_moves,
        improving_moves,
    }
}

/// Hotel anchor first, then the best schedule, then copies of every visit
/// POI the schedule never placed, stamped day 0 / unscheduled.
fn finalize(
    visits: &[PointOfInterest],
    hotel: &PointOfInterest,
    best: &PackedSchedule,
) -> Vec<PointOfInterest> {
    let mut anchor = hotel.clone();
    anchor.day = 0;
    anchor.period = Period::Anchor;
    anchor.duration_min = 0;
    anchor.transit_from_prev = None;

    let mut out = Vec::with_capacity(1 + visits.len());
    out.push(anchor);
    out.extend(best.entries.iter().cloned());

    for poi in visits {
        if !best.entries.iter().any(|p| p.id == poi.id) {
            let mut unplaced = poi.clone();
            unplaced.clear_assignment();
            out.push(unplaced);
        }
    }

    out
}
