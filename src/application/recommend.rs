//! # Recommendation Engine
//!
//! Picks the facility to send people to.
//!
//! The least-loaded facility wins, but every facility whose load is within
//! `threshold_percent` points of the minimum counts as a near-tie. Among
//! near-ties the largest capacity wins, and among equal capacities the one
//! listed first in the registry. Zero-capacity facilities cannot be rated and
//! are never recommended.

use crate::domain::facility::{Facility, Registry};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Recommendation {
    /// No facility has a free seat.
    AllFull,
    Best(String),
}

pub fn recommend(registry: &Registry, threshold_percent: f64) -> Recommendation {
    // Zero-capacity facilities neither count as free nor get rated.
    let rated: Vec<(&Facility, f64)> = registry
        .iter()
        .filter_map(|f| f.load_percent().map(|load| (f, load)))
        .collect();

    if rated.iter().all(|(f, _)| f.is_full()) {
        return Recommendation::AllFull;
    }

    let min_percent = rated
        .iter()
        .map(|(_, load)| *load)
        .fold(f64::INFINITY, f64::min);

    let best = rated
        .iter()
        .filter(|(_, load)| (load - min_percent).abs() <= threshold_percent)
        .map(|(f, _)| *f)
        .fold(None::<&Facility>, |best, f| match best {
            Some(current) if current.capacity >= f.capacity => Some(current),
            _ => Some(f),
        });

    match best {
        Some(f) => Recommendation::Best(f.id.clone()),
        // Unreachable: a non-full rated facility exists, so the minimum is a candidate.
        None => Recommendation::AllFull,
    }
}
