//! Intermediate waypoint within a day

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::Location;

/// A location on a day's route with a stable identity for reordering
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Stop {
    pub id: Uuid,
    #[serde(flatten)]
    pub location: Location,
}

impl Stop {
    /// Wrap a picked location with a fresh identifier
    #[must_use]
    pub fn new(location: Location) -> Self {
        Self {
            id: Uuid::new_v4(),
            location,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_stops_get_distinct_ids() {
        let location = Location::new("Ella", 6.8667, 81.0466);
        let a = Stop::new(location.clone());
        let b = Stop::new(location);
        assert_ne!(a.id, b.id);
        assert_eq!(a.location, b.location);
    }

    #[test]
    fn test_json_is_flattened() {
        let stop = Stop::new(Location::new("Ella", 6.8667, 81.0466));
        let json = serde_json::to_value(&stop).unwrap();
        assert_eq!(json["name"], "Ella");
        assert_eq!(json["lat"], 6.8667);
        assert!(json["id"].is_string());

        let back: Stop = serde_json::from_value(json).unwrap();
        assert_eq!(back, stop);
    }
}
