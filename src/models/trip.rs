//! Trip aggregate

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{Day, DayType, MAX_STOPS_PER_DAY};
use crate::{Result, TripPlannerError};

/// Upper bound the traveler-count editor accepts
pub const MAX_MEMBERS: u32 = 50;

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Trip {
    pub id: Uuid,
    /// Number of travelers
    pub members: u32,
    pub days: Vec<Day>,
    /// One placeholder path per travel day, set by the estimator
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trip_polyline: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_distance: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_cost: Option<u64>,
}

impl Default for Trip {
    fn default() -> Self {
        Self::new(1)
    }
}

impl Trip {
    /// New trip with a single travel day
    #[must_use]
    pub fn new(members: u32) -> Self {
        Self {
            id: Uuid::new_v4(),
            members: members.clamp(1, MAX_MEMBERS),
            days: vec![Day::new(1, DayType::Travel)],
            trip_polyline: None,
            total_distance: None,
            total_cost: None,
        }
    }

    /// Check the structural invariants of the day list
    pub fn validate(&self) -> Result<()> {
        if self.members == 0 {
            return Err(TripPlannerError::validation(
                "A trip needs at least one traveler",
            ));
        }
        if self.days.is_empty() {
            return Err(TripPlannerError::validation("A trip needs at least one day"));
        }
        for (index, day) in self.days.iter().enumerate() {
            let expected = index as u32 + 1;
            if day.day_no != expected {
                return Err(TripPlannerError::validation(format!(
                    "Day at position {expected} is numbered {}",
                    day.day_no
                )));
            }
            if day.stops.len() > MAX_STOPS_PER_DAY {
                return Err(TripPlannerError::StopLimitExceeded {
                    day_no: day.day_no,
                    max: MAX_STOPS_PER_DAY,
                });
            }
        }
        Ok(())
    }

    /// Borrow the day at a 0-based index
    pub fn day(&self, index: usize) -> Result<&Day> {
        self.days.get(index).ok_or_else(|| {
            TripPlannerError::validation(format!(
                "Trip has {} days, no day at position {}",
                self.days.len(),
                index + 1
            ))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_trip_has_day_one() {
        let trip = Trip::new(2);
        assert_eq!(trip.members, 2);
        assert_eq!(trip.days.len(), 1);
        assert_eq!(trip.days[0].day_no, 1);
        assert_eq!(trip.days[0].day_type, DayType::Travel);
        assert!(trip.validate().is_ok());
    }

    #[test]
    fn test_new_trip_clamps_members() {
        assert_eq!(Trip::new(0).members, 1);
        assert_eq!(Trip::new(500).members, MAX_MEMBERS);
    }

    #[test]
    fn test_validate_catches_gaps() {
        let mut trip = Trip::new(1);
        trip.days.push(Day::new(3, DayType::Stay));
        let err = trip.validate().unwrap_err();
        assert!(err.to_string().contains("numbered 3"));
    }

    #[test]
    fn test_validate_catches_empty_trip() {
        let mut trip = Trip::new(1);
        trip.days.clear();
        assert!(trip.validate().is_err());

        let mut trip = Trip::new(1);
        trip.members = 0;
        assert!(trip.validate().is_err());
    }

    #[test]
    fn test_day_lookup_out_of_range() {
        let trip = Trip::new(1);
        assert!(trip.day(0).is_ok());
        assert!(trip.day(1).is_err());
    }

    #[test]
    fn test_json_roundtrip_keeps_keys() {
        let trip = Trip::new(3);
        let json = serde_json::to_value(&trip).unwrap();
        assert_eq!(json["members"], 3);
        assert!(json.get("totalCost").is_none());
        let back: Trip = serde_json::from_value(json).unwrap();
        assert_eq!(back, trip);
    }
}
