//! # Status Report
//!
//! Builds the text sent for `/start` and `/status`: the recommendation line
//! followed by one block per facility in registry order.

use crate::application::recommend::{Recommendation, recommend};
use crate::domain::facility::Registry;
use crate::strings::messages;

pub fn format_report(registry: &Registry, threshold_percent: f64) -> String {
    let mut lines = vec![recommendation_line(registry, threshold_percent)];
    lines.extend(registry.iter().map(messages::facility_block));
    lines.join("\n")
}

fn recommendation_line(registry: &Registry, threshold_percent: f64) -> String {
    match recommend(registry, threshold_percent) {
        Recommendation::AllFull => messages::ALL_FULL.to_string(),
        Recommendation::Best(id) => match registry.get(&id) {
            Some(f) => messages::recommend_facility(&f.name, f.free_seats()),
            None => messages::ALL_FULL.to_string(),
        },
    }
}
