//! Location model for geographic coordinates

use haversine::{Location as HaversineLocation, Units, distance};
use serde::{Deserialize, Serialize};

use crate::{Result, TripPlannerError};

/// A named point on the map
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Location {
    /// Place name (city, landmark, formatted address)
    pub name: String,
    /// Latitude in decimal degrees
    #[serde(rename = "lat")]
    pub latitude: f64,
    /// Longitude in decimal degrees
    #[serde(rename = "lng")]
    pub longitude: f64,
}

impl Location {
    /// Create a new location
    #[must_use]
    pub fn new(name: impl Into<String>, latitude: f64, longitude: f64) -> Self {
        Self {
            name: name.into(),
            latitude,
            longitude,
        }
    }

    /// Create a location whose name is its own coordinates
    #[must_use]
    pub fn unnamed(latitude: f64, longitude: f64) -> Self {
        Self::new(format!("{latitude:.4}, {longitude:.4}"), latitude, longitude)
    }

    /// Format location as coordinates string
    #[must_use]
    pub fn format_coordinates(&self) -> String {
        format!("{:.4}, {:.4}", self.latitude, self.longitude)
    }

    /// Check that the coordinates are on the globe
    pub fn validate(&self) -> Result<()> {
        if !(-90.0..=90.0).contains(&self.latitude) {
            return Err(TripPlannerError::validation(format!(
                "Latitude must be between -90 and 90, got: {}",
                self.latitude
            )));
        }
        if !(-180.0..=180.0).contains(&self.longitude) {
            return Err(TripPlannerError::validation(format!(
                "Longitude must be between -180 and 180, got: {}",
                self.longitude
            )));
        }
        Ok(())
    }

    /// Great-circle distance in kilometers (haversine, R = 6371 km)
    #[must_use]
    pub fn distance_km(&self, other: &Location) -> f64 {
        let from = HaversineLocation {
            latitude: self.latitude,
            longitude: self.longitude,
        };
        let to = HaversineLocation {
            latitude: other.latitude,
            longitude: other.longitude,
        };
        distance(from, to, Units::Kilometers)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_distance_colombo_kandy() {
        let colombo = Location::new("Colombo", 6.9271, 79.8612);
        let kandy = Location::new("Kandy", 7.2906, 80.6337);
        let km = colombo.distance_km(&kandy);
        assert!((km - 94.34).abs() < 0.05, "got {km}");
        assert!((kandy.distance_km(&colombo) - km).abs() < 1e-9);
    }

    #[test]
    fn test_distance_to_self_is_zero() {
        let galle = Location::new("Galle", 6.0535, 80.2210);
        assert!(galle.distance_km(&galle).abs() < 1e-9);
    }

    #[test]
    fn test_unnamed_location() {
        let location = Location::unnamed(46.818_234, 8.227_456);
        assert_eq!(location.name, "46.8182, 8.2275");
        assert_eq!(location.format_coordinates(), "46.8182, 8.2275");
    }

    #[test]
    fn test_validate_rejects_out_of_range() {
        assert!(Location::new("ok", 7.0, 80.0).validate().is_ok());
        assert!(Location::new("north", 91.0, 80.0).validate().is_err());
        assert!(Location::new("east", 7.0, -181.0).validate().is_err());
    }

    #[test]
    fn test_json_shape() {
        let location = Location::new("Kandy", 7.2906, 80.6337);
        let json = serde_json::to_value(&location).unwrap();
        assert_eq!(json["name"], "Kandy");
        assert_eq!(json["lat"], 7.2906);
        assert_eq!(json["lng"], 80.6337);
    }
}
