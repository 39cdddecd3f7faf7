//! trip-planner core
//!
//! Assigns points of interest to a multi-day itinerary anchored at a
//! hotel: a pairwise travel-time model, a greedy day/period packer, and a
//! simulated-annealing search over visiting orders.

pub mod annealing;
pub mod optimizer;
pub mod packer;
pub mod poi;
pub mod summary;
pub mod travel_time;
