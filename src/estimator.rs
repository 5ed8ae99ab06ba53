//! Mock route and cost estimator
//!
//! This is a simulation stand-in for a routing backend: distances are
//! great-circle sums stretched by a road factor, costs are flat fee
//! formulas, and every travel day gets the same placeholder path.

use std::time::Duration;

use async_trait::async_trait;
use rand::RngExt;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

use crate::config::EstimatorConfig;
use crate::itinerary::Itinerary;
use crate::models::{Day, DayType, Location, Trip};
use crate::{Result, TripPlannerError};

/// Placeholder encoded polyline handed out for every travel day
pub const MOCK_POLYLINE: &str = "cmpeA_~clC~@s@v@y@z@{@|@}@~@_A`@aAh@bAl@dA`@eAf@gAh@iAj@kAl@mAn@oAp@qArk@dAlB|@dCx@pCzA~C~@lD~@tD";

/// Result of a trip calculation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TripEstimate {
    pub days: Vec<Day>,
    pub trip_polyline: Vec<String>,
    pub total_distance: u64,
    pub total_cost: u64,
}

impl TripEstimate {
    /// Write the calculated values into the trip they were computed for
    #[must_use]
    pub fn apply(self, mut trip: Trip) -> Trip {
        trip.days = self.days;
        trip.trip_polyline = Some(self.trip_polyline);
        trip.total_distance = Some(self.total_distance);
        trip.total_cost = Some(self.total_cost);
        trip
    }
}

#[async_trait]
pub trait RouteEstimator: Send + Sync {
    /// Compute per-day distance and cost plus trip totals
    async fn calculate_trip(&self, trip: &Trip) -> Result<TripEstimate>;
}

/// Sum of great-circle legs between consecutive points, in km
#[must_use]
pub fn path_distance_km(points: &[&Location]) -> f64 {
    points
        .windows(2)
        .map(|pair| pair[0].distance_km(pair[1]))
        .sum()
}

/// Estimator that never leaves the process
pub struct MockRouteEstimator {
    config: EstimatorConfig,
}

impl Default for MockRouteEstimator {
    fn default() -> Self {
        Self::new(EstimatorConfig::default())
    }
}

impl MockRouteEstimator {
    #[must_use]
    pub fn new(config: EstimatorConfig) -> Self {
        Self { config }
    }

    /// Road distance of a travel day in whole km
    #[must_use]
    pub fn day_distance_km(&self, start: Option<&Location>, day: &Day) -> u64 {
        let mut points: Vec<&Location> = Vec::with_capacity(day.stops.len() + 2);
        points.extend(start);
        points.extend(day.stops.iter().map(|stop| &stop.location));
        points.extend(day.end_location.as_ref());

        (path_distance_km(&points) * self.config.road_factor).round() as u64
    }

    /// Unrounded cost of a day
    #[must_use]
    pub fn day_cost(&self, day_type: DayType, distance_km: u64, members: u32) -> f64 {
        let members = f64::from(members);
        match day_type {
            DayType::Travel => {
                self.config.travel_base_fee + distance_km as f64 * self.config.per_km_fee * members
            }
            DayType::Stay => self.config.stay_fee * members,
        }
    }

    /// The calculation itself, without the simulated delay
    pub fn estimate(&self, trip: &Trip) -> Result<TripEstimate> {
        trip.validate()
            .map_err(|e| TripPlannerError::estimation(e.to_string()))?;

        let starts = Itinerary::effective_starts(&trip.days);
        let mut total_distance = 0_u64;
        let mut total_cost = 0.0_f64;

        let days: Vec<Day> = trip
            .days
            .iter()
            .zip(&starts)
            .map(|(day, start)| {
                let distance = if day.is_travel() {
                    self.day_distance_km(start.as_ref(), day)
                } else {
                    0
                };
                let cost = self.day_cost(day.day_type, distance, trip.members);
                debug!(
                    "Day {} ({}): {} km, cost {:.1}",
                    day.day_no, day.day_type, distance, cost
                );

                total_distance += distance;
                total_cost += cost;

                Day {
                    distance: Some(distance),
                    cost: Some(cost.round() as u64),
                    polyline: day.is_travel().then(|| MOCK_POLYLINE.to_string()),
                    ..day.clone()
                }
            })
            .collect();

        let trip_polyline = trip
            .days
            .iter()
            .filter(|day| day.is_travel())
            .map(|_| MOCK_POLYLINE.to_string())
            .collect();

        Ok(TripEstimate {
            days,
            trip_polyline,
            total_distance,
            total_cost: total_cost.round() as u64,
        })
    }

    fn simulated_delay(&self) -> Option<Duration> {
        if self.config.simulated_delay_ms == 0 {
            return None;
        }
        let jitter: f64 = rand::rng().random_range(0.9..1.1);
        Some(Duration::from_millis(
            (self.config.simulated_delay_ms as f64 * jitter) as u64,
        ))
    }
}

#[async_trait]
impl RouteEstimator for MockRouteEstimator {
    #[instrument(skip(self, trip), fields(trip_id = %trip.id, days = trip.days.len()))]
    async fn calculate_trip(&self, trip: &Trip) -> Result<TripEstimate> {
        if let Some(delay) = self.simulated_delay() {
            debug!("Simulating network delay of {:?}", delay);
            tokio::time::sleep(delay).await;
        }

        let estimate = self.estimate(trip).inspect_err(|e| {
            warn!("Trip calculation failed: {}", e);
        })?;

        info!(
            "Calculated trip: {} km, cost {}",
            estimate.total_distance, estimate.total_cost
        );
        Ok(estimate)
    }
}
