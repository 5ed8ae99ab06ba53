//! `TripPlanner` - multi-day trip itinerary planning
//!
//! This library provides the itinerary model and its day-chain logic,
//! a mocked route/cost estimator, map segment derivation, and mocked
//! place lookup and save collaborators.

pub mod config;
pub mod error;
pub mod estimator;
pub mod itinerary;
pub mod models;
pub mod places;
pub mod segments;
pub mod store;
pub mod summary;

// Re-export core types for public API
pub use config::TripPlannerConfig;
pub use error::TripPlannerError;
pub use estimator::{MockRouteEstimator, RouteEstimator, TripEstimate};
pub use itinerary::Itinerary;
pub use models::{Day, DayType, Location, RouteSegment, Stop, Trip};
pub use places::{LocationInput, LocationParser, LocationResolver, MockPlaceDirectory, PlaceProvider};
pub use segments::derive_segments;
pub use store::{MockTripStore, TripStore};
pub use summary::TripSummary;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Core result type used throughout the library
pub type Result<T> = std::result::Result<T, TripPlannerError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_is_set() {
        assert!(!VERSION.is_empty());
    }
}
