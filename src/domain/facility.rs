//! # Facilities
//!
//! The monitored spaces (`Facility`), their ordered `Registry`, and the
//! qualitative load classifier used for report icons.

use serde::Deserialize;

/// One monitored space.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Facility {
    pub id: String,
    pub name: String,
    /// Zero means the capacity is unknown.
    pub capacity: u32,
    /// Current headcount. May exceed `capacity`.
    #[serde(default)]
    pub occupancy: u32,
}

impl Facility {
    #[cfg(test)]
    pub fn new(id: &str, name: &str, capacity: u32, occupancy: u32) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            capacity,
            occupancy,
        }
    }

    /// Load as a percentage of capacity, or `None` when capacity is zero.
    pub fn load_percent(&self) -> Option<f64> {
        if self.capacity == 0 {
            return None;
        }
        Some(self.occupancy as f64 / self.capacity as f64 * 100.0)
    }

    /// Load percentage for display. Zero-capacity facilities show `0.0`.
    pub fn display_percent(&self) -> f64 {
        self.load_percent().unwrap_or(0.0)
    }

    /// At or above capacity. Zero-capacity facilities are never full.
    pub fn is_full(&self) -> bool {
        self.capacity > 0 && self.occupancy >= self.capacity
    }

    /// Seats left. Negative when over capacity.
    pub fn free_seats(&self) -> i64 {
        i64::from(self.capacity) - i64::from(self.occupancy)
    }

    pub fn load_level(&self) -> LoadLevel {
        classify(self.occupancy, self.capacity)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LoadLevel {
    Unknown,
    Low,
    Medium,
    High,
}

impl LoadLevel {
    pub fn icon(self) -> &'static str {
        match self {
            LoadLevel::Unknown => "⚪",
            LoadLevel::Low => "🟢",
            LoadLevel::Medium => "🟡",
            LoadLevel::High => "🔴",
        }
    }
}

/// Classifies a headcount against a capacity.
///
/// Below 50% is `Low`, below 80% is `Medium`, anything else (over-capacity
/// included) is `High`. A zero capacity yields `Unknown`.
pub fn classify(occupancy: u32, capacity: u32) -> LoadLevel {
    if capacity == 0 {
        return LoadLevel::Unknown;
    }
    let percent = occupancy as f64 / capacity as f64 * 100.0;
    if percent < 50.0 {
        LoadLevel::Low
    } else if percent < 80.0 {
        LoadLevel::Medium
    } else {
        LoadLevel::High
    }
}

/// Ordered `id -> Facility` mapping. Insertion order is display order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Registry {
    facilities: Vec<Facility>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a facility. Returns it back if the id is already taken.
    pub fn insert(&mut self, facility: Facility) -> Result<(), Facility> {
        if self.get(&facility.id).is_some() {
            return Err(facility);
        }
        self.facilities.push(facility);
        Ok(())
    }

    pub fn get(&self, id: &str) -> Option<&Facility> {
        self.facilities.iter().find(|f| f.id == id)
    }

    pub fn get_mut(&mut self, id: &str) -> Option<&mut Facility> {
        self.facilities.iter_mut().find(|f| f.id == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Facility> {
        self.facilities.iter()
    }

    pub fn len(&self) -> usize {
        self.facilities.len()
    }
}

impl TryFrom<Vec<Facility>> for Registry {
    type Error = Facility;

    fn try_from(facilities: Vec<Facility>) -> Result<Self, Self::Error> {
        let mut registry = Registry::new();
        for facility in facilities {
            registry.insert(facility)?;
        }
        Ok(registry)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_thresholds() {
        assert_eq!(classify(0, 100), LoadLevel::Low);
        assert_eq!(classify(49, 100), LoadLevel::Low);
        assert_eq!(classify(50, 100), LoadLevel::Medium);
        assert_eq!(classify(79, 100), LoadLevel::Medium);
        assert_eq!(classify(80, 100), LoadLevel::High);
        assert_eq!(classify(100, 100), LoadLevel::High);
        // Over capacity is still just High
        assert_eq!(classify(250, 100), LoadLevel::High);
    }

    #[test]
    fn test_classify_zero_capacity_is_unknown() {
        for occupancy in [0, 1, 50, u32::MAX] {
            assert_eq!(classify(occupancy, 0), LoadLevel::Unknown);
        }
    }

    #[test]
    fn test_classify_is_monotonic() {
        for capacity in [1, 3, 7, 100, 301] {
            let mut previous = classify(0, capacity);
            for occupancy in 1..=capacity * 2 {
                let level = classify(occupancy, capacity);
                assert!(
                    level >= previous,
                    "level dropped at {}/{}",
                    occupancy,
                    capacity
                );
                previous = level;
            }
        }
    }

    #[test]
    fn test_facility_helpers() {
        let over = Facility::new("a", "A", 100, 120);
        assert!(over.is_full());
        assert_eq!(over.free_seats(), -20);
        assert_eq!(over.load_percent(), Some(120.0));

        let unknown = Facility::new("b", "B", 0, 10);
        assert!(!unknown.is_full());
        assert_eq!(unknown.load_percent(), None);
        assert_eq!(unknown.display_percent(), 0.0);
        assert_eq!(unknown.load_level(), LoadLevel::Unknown);
    }

    #[test]
    fn test_registry_preserves_order_and_rejects_duplicates() {
        let mut registry = Registry::new();
        registry.insert(Facility::new("b", "B", 10, 0)).unwrap();
        registry.insert(Facility::new("a", "A", 10, 0)).unwrap();
        let rejected = registry.insert(Facility::new("b", "Other", 5, 0));
        assert_eq!(rejected.unwrap_err().name, "Other");

        let ids: Vec<&str> = registry.iter().map(|f| f.id.as_str()).collect();
        assert_eq!(ids, vec!["b", "a"]);
        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn test_registry_get_mut() {
        let mut registry =
            Registry::try_from(vec![Facility::new("a", "A", 10, 0)]).unwrap();
        registry.get_mut("a").unwrap().occupancy = 7;
        assert_eq!(registry.get("a").unwrap().occupancy, 7);
        assert!(registry.get_mut("missing").is_none());
    }
}
