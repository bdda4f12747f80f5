//! # Messages
//!
//! Contains constant strings and format functions for user-facing messages.
//! Includes the report lines, `/set` replies and validation errors.

use crate::domain::facility::Facility;

pub const ALL_FULL: &str = "⚠️ All facilities are full, please wait!";

pub fn recommend_facility(name: &str, free_seats: i64) -> String {
    format!("👉 We recommend {name} ({free_seats} seats free)")
}

pub fn facility_block(facility: &Facility) -> String {
    format!(
        "\n{icon} {name}\nPeople now: {occupancy} / {capacity}\nLoad: {percent:.1}%",
        icon = facility.load_level().icon(),
        name = facility.name,
        occupancy = facility.occupancy,
        capacity = facility.capacity,
        percent = facility.display_percent(),
    )
}

pub fn occupancy_updated(facility: &Facility) -> String {
    format!(
        "✅ Updated: {name}: {occupancy}/{capacity} ({percent:.1}% occupied)",
        name = facility.name,
        occupancy = facility.occupancy,
        capacity = facility.capacity,
        percent = facility.display_percent(),
    )
}

pub const PERMISSION_DENIED: &str = "🚫 You do not have permission to change the data.";
pub const SET_USAGE: &str =
    "Usage: /set <facility_id> <count>\nExample: /set stol1 120";
pub const COUNT_NOT_A_NUMBER: &str = "The count must be a number.";
pub const COUNT_NEGATIVE: &str = "The number of people cannot be negative.";
pub const COUNT_TOO_LARGE: &str = "The count is too large.";

pub fn unknown_facility(id: &str) -> String {
    format!("No such facility: {id}")
}

// Log lines
pub fn config_loaded(path: &str, facilities: usize) -> String {
    format!("Loaded configuration from {path} ({facilities} facilities)")
}

pub fn invite_received(room_id: &str) -> String {
    format!("Received invite for room {room_id}")
}

pub fn join_invite_fail(err: &str) -> String {
    format!("Failed to join room after invite: {err}")
}

pub fn set_display_name_fail(err: &str) -> String {
    format!("Failed to set display name: {err}")
}

pub const SYNC_LOOP_START: &str = "Starting sync loop...";
