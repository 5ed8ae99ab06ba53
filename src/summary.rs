//! Trip summary for display

use std::fmt::Display;

use serde::Serialize;

use crate::models::{Day, Trip};

/// One line of the daily breakdown
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DaySummary {
    pub day_no: u32,
    pub label: String,
    pub distance: Option<u64>,
    pub cost: Option<u64>,
}

impl From<&Day> for DaySummary {
    fn from(day: &Day) -> Self {
        let label = if day.is_travel() {
            format!("{} stops", day.stops.len())
        } else {
            "Stay Day".to_string()
        };
        Self {
            day_no: day.day_no,
            label,
            distance: day.distance,
            cost: day.cost,
        }
    }
}

/// Totals plus per-day breakdown; totals are 0 until the trip is calculated
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TripSummary {
    pub day_count: usize,
    pub total_distance: u64,
    pub total_cost: u64,
    pub days: Vec<DaySummary>,
}

impl From<&Trip> for TripSummary {
    fn from(trip: &Trip) -> Self {
        Self {
            day_count: trip.days.len(),
            total_distance: trip.total_distance.unwrap_or_default(),
            total_cost: trip.total_cost.unwrap_or_default(),
            days: trip.days.iter().map(DaySummary::from).collect(),
        }
    }
}

impl Display for TripSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Full Trip Summary")?;
        writeln!(f, "   📅 Days: {}", self.day_count)?;
        writeln!(f, "   🗺️ Est. Distance: {} km", self.total_distance)?;
        writeln!(f, "   💲 Est. Cost: ${}", self.total_cost)?;
        writeln!(f)?;
        for day in &self.days {
            write!(f, "Day {} - {}", day.day_no, day.label)?;
            if let Some(distance) = day.distance {
                write!(f, " | {distance} km")?;
            }
            if let Some(cost) = day.cost {
                write!(f, " | ${cost}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
