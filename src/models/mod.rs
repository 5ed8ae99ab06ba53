//! Data models for the trip planner
//!
//! This module contains the core domain models organized by concern:
//! - Location: Named geographic coordinates
//! - Stop: Orderable waypoint with an identity
//! - Day: Travel or stay unit of an itinerary
//! - Trip: The aggregate the planner edits
//! - Segment: Map-drawable projection of a day

pub mod day;
pub mod location;
pub mod segment;
pub mod stop;
pub mod trip;

// Re-export all public types for convenient access
pub use day::{Day, DayType, MAX_STOPS_PER_DAY};
pub use location::Location;
pub use segment::{MappedPoint, PinColors, PointKind, RouteSegment};
pub use stop::Stop;
pub use trip::{MAX_MEMBERS, Trip};
