//! One unit of an itinerary

use serde::{Deserialize, Serialize};
use std::fmt::Display;

use super::{Location, Stop};

/// Maximum number of intermediate stops on a single day
pub const MAX_STOPS_PER_DAY: usize = 10;

/// Whether a day moves the travelers or keeps them in place
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "UPPERCASE")]
pub enum DayType {
    Travel,
    Stay,
}

impl Display for DayType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DayType::Travel => write!(f, "TRAVEL"),
            DayType::Stay => write!(f, "STAY"),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Day {
    /// 1-based position in the trip
    pub day_no: u32,
    #[serde(rename = "type")]
    pub day_type: DayType,
    /// Authoritative on day 1 only; later days inherit their start
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_location: Option<Location>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_location: Option<Location>,
    #[serde(default)]
    pub stops: Vec<Stop>,
    /// Encoded route path, set by the estimator for travel days
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub polyline: Option<String>,
    /// Estimated distance in km
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub distance: Option<u64>,
    /// Estimated cost in whole currency units
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cost: Option<u64>,
}

impl Day {
    #[must_use]
    pub fn new(day_no: u32, day_type: DayType) -> Self {
        Self {
            day_no,
            day_type,
            start_location: None,
            end_location: None,
            stops: Vec::new(),
            polyline: None,
            distance: None,
            cost: None,
        }
    }

    #[must_use]
    pub fn is_travel(&self) -> bool {
        self.day_type == DayType::Travel
    }

    #[must_use]
    pub fn has_room_for_stop(&self) -> bool {
        self.stops.len() < MAX_STOPS_PER_DAY
    }

    /// Position of a stop by its identifier
    #[must_use]
    pub fn stop_position(&self, id: &uuid::Uuid) -> Option<usize> {
        self.stops.iter().position(|stop| &stop.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_day_type_serialization() {
        assert_eq!(serde_json::to_string(&DayType::Travel).unwrap(), "\"TRAVEL\"");
        assert_eq!(serde_json::to_string(&DayType::Stay).unwrap(), "\"STAY\"");
        assert_eq!(DayType::Stay.to_string(), "STAY");
    }

    #[test]
    fn test_day_json_keys() {
        let mut day = Day::new(1, DayType::Travel);
        day.end_location = Some(Location::new("Kandy", 7.2906, 80.6337));
        let json = serde_json::to_value(&day).unwrap();
        assert_eq!(json["dayNo"], 1);
        assert_eq!(json["type"], "TRAVEL");
        assert_eq!(json["endLocation"]["name"], "Kandy");
        assert!(json.get("startLocation").is_none());
        assert!(json.get("cost").is_none());
    }

    #[test]
    fn test_day_without_stops_key_deserializes() {
        let day: Day = serde_json::from_str(r#"{"dayNo": 2, "type": "STAY"}"#).unwrap();
        assert_eq!(day.day_no, 2);
        assert_eq!(day.day_type, DayType::Stay);
        assert!(day.stops.is_empty());
    }

    #[test]
    fn test_stop_capacity() {
        let mut day = Day::new(1, DayType::Travel);
        for i in 0..MAX_STOPS_PER_DAY {
            assert!(day.has_room_for_stop());
            day.stops
                .push(Stop::new(Location::new(format!("stop {i}"), 7.0, 80.0)));
        }
        assert!(!day.has_room_for_stop());
    }
}
