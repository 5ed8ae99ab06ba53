//! Map-drawable projection of a day

use serde::{Deserialize, Serialize};

use super::Location;

/// Role of a point on a drawn route
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "UPPERCASE")]
pub enum PointKind {
    Start,
    Stop,
    End,
}

/// Marker colors for a point kind
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PinColors {
    pub background: &'static str,
    pub border: &'static str,
}

impl PointKind {
    #[must_use]
    pub fn pin_colors(self) -> PinColors {
        match self {
            PointKind::Start => PinColors {
                background: "#10B981",
                border: "#059669",
            },
            PointKind::End => PinColors {
                background: "#EF4444",
                border: "#B91C1C",
            },
            PointKind::Stop => PinColors {
                background: "#F59E0B",
                border: "#D97706",
            },
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct MappedPoint {
    pub location: Location,
    #[serde(rename = "type")]
    pub kind: PointKind,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct RouteSegment {
    pub points: Vec<MappedPoint>,
    pub color: String,
}

impl RouteSegment {
    /// A route needs an origin and a destination
    #[must_use]
    pub fn is_routable(&self) -> bool {
        self.points.len() >= 2
    }

    #[must_use]
    pub fn origin(&self) -> Option<&Location> {
        self.points.first().map(|p| &p.location)
    }

    #[must_use]
    pub fn destination(&self) -> Option<&Location> {
        if self.is_routable() {
            self.points.last().map(|p| &p.location)
        } else {
            None
        }
    }

    /// Points strictly between origin and destination
    #[must_use]
    pub fn waypoints(&self) -> Vec<&Location> {
        if !self.is_routable() {
            return Vec::new();
        }
        self.points[1..self.points.len() - 1]
            .iter()
            .map(|p| &p.location)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn point(name: &str, kind: PointKind) -> MappedPoint {
        MappedPoint {
            location: Location::new(name, 7.0, 80.0),
            kind,
        }
    }

    #[test]
    fn test_pin_colors() {
        assert_eq!(PointKind::Start.pin_colors().background, "#10B981");
        assert_eq!(PointKind::End.pin_colors().border, "#B91C1C");
        assert_eq!(PointKind::Stop.pin_colors().background, "#F59E0B");
    }

    #[test]
    fn test_single_point_is_not_routable() {
        let segment = RouteSegment {
            points: vec![point("a", PointKind::Start)],
            color: "#3B82F6".to_string(),
        };
        assert!(!segment.is_routable());
        assert_eq!(segment.origin().map(|l| l.name.as_str()), Some("a"));
        assert!(segment.destination().is_none());
        assert!(segment.waypoints().is_empty());
    }

    #[test]
    fn test_waypoints_exclude_endpoints() {
        let segment = RouteSegment {
            points: vec![
                point("a", PointKind::Start),
                point("b", PointKind::Stop),
                point("c", PointKind::Stop),
                point("d", PointKind::End),
            ],
            color: "#3B82F6".to_string(),
        };
        let names: Vec<_> = segment
            .waypoints()
            .into_iter()
            .map(|l| l.name.as_str())
            .collect();
        assert_eq!(names, ["b", "c"]);
        assert_eq!(segment.destination().map(|l| l.name.as_str()), Some("d"));
    }

    #[test]
    fn test_point_kind_json() {
        let json = serde_json::to_value(point("a", PointKind::End)).unwrap();
        assert_eq!(json["type"], "END");
    }
}
