//! Segment and point derivation for map display
//!
//! The output is a projection of the trip for rendering and is never read
//! back into trip state.

use crate::itinerary::Itinerary;
use crate::models::{MappedPoint, PointKind, RouteSegment, Trip};

/// Cyclic palette indexed by day position
pub const SEGMENT_PALETTE: [&str; 6] = [
    "#3B82F6", // blue
    "#10B981", // emerald
    "#F59E0B", // amber
    "#EF4444", // red
    "#8B5CF6", // violet
    "#EC4899", // pink
];

#[must_use]
pub fn segment_color(day_index: usize) -> &'static str {
    SEGMENT_PALETTE[day_index % SEGMENT_PALETTE.len()]
}

/// One segment per day, in day order
#[must_use]
pub fn derive_segments(trip: &Trip) -> Vec<RouteSegment> {
    let starts = Itinerary::effective_starts(&trip.days);

    trip.days
        .iter()
        .zip(starts)
        .enumerate()
        .map(|(index, (day, start))| {
            let mut points = Vec::with_capacity(day.stops.len() + 2);

            if let Some(location) = start {
                let kind = if index == 0 {
                    PointKind::Start
                } else {
                    PointKind::Stop
                };
                points.push(MappedPoint { location, kind });
            }

            points.extend(day.stops.iter().map(|stop| MappedPoint {
                location: stop.location.clone(),
                kind: PointKind::Stop,
            }));

            if day.is_travel() {
                if let Some(location) = &day.end_location {
                    points.push(MappedPoint {
                        location: location.clone(),
                        kind: PointKind::End,
                    });
                }
            }

            RouteSegment {
                points,
                color: segment_color(index).to_string(),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{DayType, Location, Stop};

    fn place(name: &str) -> Location {
        Location::new(name, 7.0, 80.0)
    }

    fn kinds(segment: &RouteSegment) -> Vec<PointKind> {
        segment.points.iter().map(|p| p.kind).collect()
    }

    #[test]
    fn test_first_day_starts_with_start_point() {
        let mut trip = Trip::new(1);
        trip.days[0].start_location = Some(place("Colombo"));
        trip.days[0].stops.push(Stop::new(place("Negombo")));
        trip.days[0].end_location = Some(place("Kandy"));

        let segments = derive_segments(&trip);
        assert_eq!(segments.len(), 1);
        assert_eq!(
            kinds(&segments[0]),
            [PointKind::Start, PointKind::Stop, PointKind::End]
        );
        assert_eq!(segments[0].color, SEGMENT_PALETTE[0]);
    }

    #[test]
    fn test_later_days_start_with_inherited_stop_point() {
        let mut trip = Trip::new(1);
        trip.days[0].start_location = Some(place("Colombo"));
        trip.days[0].end_location = Some(place("Kandy"));
        let mut trip = Itinerary::append_day(trip, DayType::Travel);
        trip.days[1].end_location = Some(place("Ella"));

        let segments = derive_segments(&trip);
        assert_eq!(kinds(&segments[1]), [PointKind::Stop, PointKind::End]);
        assert_eq!(segments[1].points[0].location.name, "Kandy");
        assert_eq!(segments[1].color, SEGMENT_PALETTE[1]);
    }

    #[test]
    fn test_stay_day_has_no_end_point() {
        let mut trip = Trip::new(1);
        trip.days[0].end_location = Some(place("Kandy"));
        let mut trip = Itinerary::append_day(trip, DayType::Stay);
        trip.days[1].end_location = Some(place("Ignored"));

        let segments = derive_segments(&trip);
        assert_eq!(kinds(&segments[1]), [PointKind::Stop]);
        assert!(!segments[1].is_routable());
    }

    #[test]
    fn test_missing_start_is_skipped() {
        let mut trip = Trip::new(1);
        trip.days[0].end_location = Some(place("Kandy"));
        let segments = derive_segments(&trip);
        assert_eq!(kinds(&segments[0]), [PointKind::End]);
    }

    #[test]
    fn test_palette_cycles() {
        let mut trip = Trip::new(1);
        for _ in 0..SEGMENT_PALETTE.len() {
            trip = Itinerary::append_day(trip, DayType::Travel);
        }
        let segments = derive_segments(&trip);
        assert_eq!(segments.len(), SEGMENT_PALETTE.len() + 1);
        assert_eq!(segments[SEGMENT_PALETTE.len()].color, segments[0].color);
        assert_ne!(segments[1].color, segments[0].color);
    }
}
