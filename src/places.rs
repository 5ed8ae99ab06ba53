//! Place lookup
//!
//! Turns user input (coordinates or place names) into [`Location`]s. The
//! only provider is an in-memory gazetteer standing in for a real
//! geocoding service.

use async_trait::async_trait;
use tracing::{debug, instrument, warn};

use crate::config::PlacesConfig;
use crate::models::Location;
use crate::{Result, TripPlannerError};

/// Types of location input
#[derive(Debug, Clone, PartialEq)]
pub enum LocationInput {
    /// Coordinates (latitude, longitude)
    Coordinates(f64, f64),
    /// Place name to search for
    Name(String),
}

/// Location parsing utilities
pub struct LocationParser;

impl LocationParser {
    /// Parse location input (coordinates or a place name)
    pub fn parse(input: &str) -> Result<LocationInput> {
        let input = input.trim();
        if input.is_empty() {
            return Err(TripPlannerError::validation("Location cannot be empty"));
        }

        if let Ok((lat, lon)) = Self::parse_coordinates(input) {
            return Ok(LocationInput::Coordinates(lat, lon));
        }

        Ok(LocationInput::Name(input.to_string()))
    }

    /// Parse coordinates from string like "6.9271,79.8612" or "6.9271 79.8612"
    fn parse_coordinates(input: &str) -> Result<(f64, f64)> {
        let parts: Vec<&str> = input
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|s| !s.is_empty())
            .collect();

        if parts.len() != 2 {
            return Err(TripPlannerError::validation(
                "Coordinates must be in format 'lat,lng'",
            ));
        }

        let lat = parts[0].parse::<f64>().map_err(|_| {
            TripPlannerError::validation(format!("Invalid latitude: {}", parts[0]))
        })?;
        let lon = parts[1].parse::<f64>().map_err(|_| {
            TripPlannerError::validation(format!("Invalid longitude: {}", parts[1]))
        })?;

        Location::unnamed(lat, lon).validate()?;
        Ok((lat, lon))
    }
}

/// Geocoding collaborator
#[async_trait]
pub trait PlaceProvider: Send + Sync {
    /// Places matching a free-text query, best match first
    async fn search(&self, query: &str) -> Result<Vec<Location>>;

    /// Places at or near a clicked point, nearest first
    async fn reverse_geocode(&self, latitude: f64, longitude: f64) -> Result<Vec<Location>>;
}

/// In-memory gazetteer
pub struct MockPlaceDirectory {
    places: Vec<Location>,
    reverse_radius_km: f64,
}

impl Default for MockPlaceDirectory {
    fn default() -> Self {
        Self::new(PlacesConfig::default())
    }
}

impl MockPlaceDirectory {
    /// Directory seeded with common Sri Lanka destinations
    #[must_use]
    pub fn new(config: PlacesConfig) -> Self {
        let places = vec![
            Location::new("Colombo", 6.9271, 79.8612),
            Location::new("Negombo", 7.2008, 79.8737),
            Location::new("Kandy", 7.2906, 80.6337),
            Location::new("Sigiriya", 7.9570, 80.7603),
            Location::new("Dambulla", 7.8731, 80.7718),
            Location::new("Anuradhapura", 8.3114, 80.4037),
            Location::new("Trincomalee", 8.5874, 81.2152),
            Location::new("Jaffna", 9.6615, 80.0255),
            Location::new("Nuwara Eliya", 6.9497, 80.7891),
            Location::new("Ella", 6.8667, 81.0466),
            Location::new("Yala", 6.3728, 81.5016),
            Location::new("Mirissa", 5.9483, 80.4716),
            Location::new("Galle", 6.0535, 80.2210),
        ];
        Self::with_places(places, config)
    }

    #[must_use]
    pub fn with_places(places: Vec<Location>, config: PlacesConfig) -> Self {
        Self {
            places,
            reverse_radius_km: config.reverse_geocode_radius_km,
        }
    }
}

#[async_trait]
impl PlaceProvider for MockPlaceDirectory {
    async fn search(&self, query: &str) -> Result<Vec<Location>> {
        let needle = query.trim().to_lowercase();
        if needle.is_empty() {
            return Ok(Vec::new());
        }

        let mut hits: Vec<&Location> = self
            .places
            .iter()
            .filter(|place| place.name.to_lowercase().contains(&needle))
            .collect();
        // Exact and prefix matches first
        hits.sort_by_key(|place| {
            let name = place.name.to_lowercase();
            (name != needle, !name.starts_with(&needle))
        });

        Ok(hits.into_iter().cloned().collect())
    }

    async fn reverse_geocode(&self, latitude: f64, longitude: f64) -> Result<Vec<Location>> {
        let clicked = Location::unnamed(latitude, longitude);
        let mut nearby: Vec<(f64, &Location)> = self
            .places
            .iter()
            .map(|place| (clicked.distance_km(place), place))
            .filter(|(distance, _)| *distance <= self.reverse_radius_km)
            .collect();
        nearby.sort_by(|a, b| a.0.total_cmp(&b.0));

        // The clicked point keeps its own coordinates, only the name is borrowed
        Ok(nearby
            .into_iter()
            .map(|(_, place)| Location::new(place.name.clone(), latitude, longitude))
            .collect())
    }
}

/// Service for resolving location inputs
pub struct LocationResolver;

impl LocationResolver {
    /// Resolve raw user input into a Location
    pub async fn resolve_str(provider: &dyn PlaceProvider, input: &str) -> Result<Location> {
        let location_input = LocationParser::parse(input)?;
        Self::resolve_location(provider, location_input).await
    }

    /// Resolve a location input into a structured Location
    #[instrument(skip(provider))]
    pub async fn resolve_location(
        provider: &dyn PlaceProvider,
        location_input: LocationInput,
    ) -> Result<Location> {
        let location = match location_input {
            LocationInput::Coordinates(lat, lon) => {
                Self::resolve_coordinates(provider, lat, lon).await
            }
            LocationInput::Name(name) => Self::resolve_name(provider, &name).await?,
        };

        debug!(
            "Resolved location: {} at ({}, {})",
            location.name, location.latitude, location.longitude
        );

        Ok(location)
    }

    /// Name a clicked point; falls back to its coordinates
    async fn resolve_coordinates(provider: &dyn PlaceProvider, lat: f64, lon: f64) -> Location {
        match provider.reverse_geocode(lat, lon).await {
            Ok(results) => results.into_iter().next().unwrap_or_else(|| {
                debug!("No reverse geocoding results found, using coordinates as name");
                Location::unnamed(lat, lon)
            }),
            Err(e) => {
                debug!("Reverse geocoding failed: {}, using coordinates as name", e);
                Location::unnamed(lat, lon)
            }
        }
    }

    async fn resolve_name(provider: &dyn PlaceProvider, name: &str) -> Result<Location> {
        let results = provider.search(name).await?;
        results.into_iter().next().ok_or_else(|| {
            warn!("No results found for location '{}'", name);
            TripPlannerError::place_not_found(name)
        })
    }
}
