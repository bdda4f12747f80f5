//! # Occupancy Updates
//!
//! Validates and applies `/set <facility_id> <count>`.
//! Checks run in a fixed order and the registry is only touched once all of them pass.

use crate::domain::facility::{Facility, Registry};
use crate::domain::types::CommandError;

pub fn set_occupancy<'a>(
    registry: &'a mut Registry,
    is_admin: bool,
    args: &[String],
) -> Result<&'a Facility, CommandError> {
    if !is_admin {
        return Err(CommandError::Unauthorized);
    }

    let [id, count] = args else {
        return Err(CommandError::MalformedArguments);
    };

    if registry.get(id).is_none() {
        return Err(CommandError::UnknownFacility(id.clone()));
    }

    let count = parse_count(count)?;

    let facility = registry
        .get_mut(id)
        .ok_or_else(|| CommandError::UnknownFacility(id.clone()))?;
    // No upper bound: over-capacity is a valid state.
    facility.occupancy = count;
    Ok(&*facility)
}

/// Base-10 integer with an optional sign. Any negative value is
/// `NegativeCount` regardless of magnitude; positives must fit in `u32`.
fn parse_count(raw: &str) -> Result<u32, CommandError> {
    let (negative, digits) = match raw.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, raw.strip_prefix('+').unwrap_or(raw)),
    };
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(CommandError::InvalidCount(raw.to_string()));
    }
    // "-0" is zero, not negative
    if negative && digits.bytes().any(|b| b != b'0') {
        return Err(CommandError::NegativeCount(raw.to_string()));
    }
    digits
        .parse::<u32>()
        .map_err(|_| CommandError::CountTooLarge(raw.to_string()))
}
