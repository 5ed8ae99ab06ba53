//! Configuration management for the trip planner
//!
//! Handles loading configuration from files, environment variables,
//! and provides validation for all configuration settings.

use crate::TripPlannerError;
use anyhow::{Context, Result};
use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Root configuration structure for the trip planner
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TripPlannerConfig {
    /// Mock route/cost estimator settings
    #[serde(default)]
    pub estimator: EstimatorConfig,
    /// Mock place directory settings
    #[serde(default)]
    pub places: PlacesConfig,
    /// Mock trip store settings
    #[serde(default)]
    pub store: StoreConfig,
    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Rates and factors of the simulated estimate
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EstimatorConfig {
    /// Multiplier from air distance to driving distance
    #[serde(default = "default_road_factor")]
    pub road_factor: f64,
    /// Flat fee per travel day
    #[serde(default = "default_travel_base_fee")]
    pub travel_base_fee: f64,
    /// Fee per kilometer and traveler on travel days
    #[serde(default = "default_per_km_fee")]
    pub per_km_fee: f64,
    /// Accommodation charge per traveler on stay days
    #[serde(default = "default_stay_fee")]
    pub stay_fee: f64,
    /// Simulated network delay in milliseconds (0 disables)
    #[serde(default = "default_estimator_delay")]
    pub simulated_delay_ms: u64,
}

/// Place lookup settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlacesConfig {
    /// How far a clicked point may be from a known place to take its name
    #[serde(default = "default_reverse_geocode_radius")]
    pub reverse_geocode_radius_km: f64,
}

/// Trip store settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Simulated save delay in milliseconds (0 disables)
    #[serde(default = "default_store_delay")]
    pub simulated_delay_ms: u64,
}

/// Logging configuration settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level (error, warn, info, debug, trace)
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Log format (pretty or json)
    #[serde(default = "default_log_format")]
    pub format: String,
}

// Default value functions
fn default_road_factor() -> f64 {
    1.3
}

fn default_travel_base_fee() -> f64 {
    50.0
}

fn default_per_km_fee() -> f64 {
    0.5
}

fn default_stay_fee() -> f64 {
    100.0
}

fn default_estimator_delay() -> u64 {
    800
}

fn default_reverse_geocode_radius() -> f64 {
    25.0
}

fn default_store_delay() -> u64 {
    500
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

impl Default for EstimatorConfig {
    fn default() -> Self {
        Self {
            road_factor: default_road_factor(),
            travel_base_fee: default_travel_base_fee(),
            per_km_fee: default_per_km_fee(),
            stay_fee: default_stay_fee(),
            simulated_delay_ms: default_estimator_delay(),
        }
    }
}

impl Default for PlacesConfig {
    fn default() -> Self {
        Self {
            reverse_geocode_radius_km: default_reverse_geocode_radius(),
        }
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            simulated_delay_ms: default_store_delay(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

impl TripPlannerConfig {
    /// Load configuration from file and environment variables
    pub fn load() -> Result<Self> {
        Self::load_from_path(None)
    }

    /// Load configuration from specified path
    pub fn load_from_path(config_path: Option<PathBuf>) -> Result<Self> {
        let mut builder = Config::builder();

        // Load from file if path is provided or use default location
        let config_file = config_path.unwrap_or_else(|| {
            Self::get_config_path().unwrap_or_else(|| PathBuf::from("config.toml"))
        });

        if config_file.exists() {
            builder = builder.add_source(
                File::from(config_file.clone())
                    .required(false)
                    .format(config::FileFormat::Toml),
            );
        }

        // TRIPPLANNER_ESTIMATOR__ROAD_FACTOR=1.5 overrides estimator.road_factor
        builder = builder.add_source(
            Environment::with_prefix("TRIPPLANNER")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        let settings = builder
            .build()
            .with_context(|| "Failed to build configuration")?;

        let mut config: TripPlannerConfig = settings
            .try_deserialize()
            .with_context(|| "Failed to deserialize configuration")?;

        config.apply_defaults();
        config.validate()?;

        Ok(config)
    }

    /// Get the default configuration file path
    #[must_use]
    pub fn get_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("tripplanner").join("config.toml"))
    }

    /// Apply default values to empty string fields
    pub fn apply_defaults(&mut self) {
        if self.logging.level.is_empty() {
            self.logging.level = default_log_level();
        }
        if self.logging.format.is_empty() {
            self.logging.format = default_log_format();
        }
    }

    /// Validate all configuration settings
    pub fn validate(&self) -> Result<()> {
        self.validate_numeric_ranges()?;
        self.validate_string_values()?;
        Ok(())
    }

    /// Validate numeric configuration ranges
    fn validate_numeric_ranges(&self) -> Result<()> {
        let estimator = &self.estimator;
        if !(1.0..=3.0).contains(&estimator.road_factor) {
            return Err(
                TripPlannerError::config("Road factor must be between 1.0 and 3.0").into(),
            );
        }

        for (name, fee) in [
            ("Travel base fee", estimator.travel_base_fee),
            ("Per-km fee", estimator.per_km_fee),
            ("Stay fee", estimator.stay_fee),
        ] {
            if !fee.is_finite() || fee < 0.0 {
                return Err(TripPlannerError::config(format!(
                    "{name} must be a non-negative number"
                ))
                .into());
            }
        }

        if estimator.simulated_delay_ms > 10_000 || self.store.simulated_delay_ms > 10_000 {
            return Err(
                TripPlannerError::config("Simulated delays cannot exceed 10000 ms").into(),
            );
        }

        if !(0.0..=500.0).contains(&self.places.reverse_geocode_radius_km) {
            return Err(TripPlannerError::config(
                "Reverse geocode radius must be between 0 and 500 km",
            )
            .into());
        }

        Ok(())
    }

    /// Validate string configuration values
    fn validate_string_values(&self) -> Result<()> {
        let valid_log_levels = ["error", "warn", "info", "debug", "trace"];
        if !valid_log_levels.contains(&self.logging.level.as_str()) {
            return Err(TripPlannerError::config(format!(
                "Invalid log level '{}'. Must be one of: {}",
                self.logging.level,
                valid_log_levels.join(", ")
            ))
            .into());
        }

        let valid_log_formats = ["pretty", "json"];
        if !valid_log_formats.contains(&self.logging.format.as_str()) {
            return Err(TripPlannerError::config(format!(
                "Invalid log format '{}'. Must be one of: {}",
                self.logging.format,
                valid_log_formats.join(", ")
            ))
            .into());
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config() {
        let config = TripPlannerConfig::default();
        assert_eq!(config.estimator.road_factor, 1.3);
        assert_eq!(config.estimator.travel_base_fee, 50.0);
        assert_eq!(config.estimator.per_km_fee, 0.5);
        assert_eq!(config.estimator.stay_fee, 100.0);
        assert_eq!(config.estimator.simulated_delay_ms, 800);
        assert_eq!(config.store.simulated_delay_ms, 500);
        assert_eq!(config.logging.level, "info");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_validation_invalid_log_level() {
        let mut config = TripPlannerConfig::default();
        config.logging.level = "invalid".to_string();
        let result = config.validate();
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("Invalid log level"));
    }

    #[test]
    fn test_config_validation_numeric_ranges() {
        let mut config = TripPlannerConfig::default();
        config.estimator.road_factor = 0.5;
        let result = config.validate();
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("Road factor"));

        let mut config = TripPlannerConfig::default();
        config.estimator.stay_fee = -1.0;
        assert!(config.validate().is_err());

        let mut config = TripPlannerConfig::default();
        config.store.simulated_delay_ms = 60_000;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_apply_defaults_fills_empty_strings() {
        let mut config = TripPlannerConfig::default();
        config.logging.level.clear();
        config.logging.format.clear();
        config.apply_defaults();
        assert_eq!(config.logging.level, "info");
        assert_eq!(config.logging.format, "pretty");
    }

    #[test]
    fn test_load_from_toml_file() {
        let path = std::env::temp_dir().join(format!(
            "tripplanner-config-{}.toml",
            uuid::Uuid::new_v4()
        ));
        let mut file = std::fs::File::create(&path).unwrap();
        writeln!(file, "[estimator]\nstay_fee = 80.0\nsimulated_delay_ms = 0").unwrap();
        writeln!(file, "[logging]\nformat = \"json\"").unwrap();
        drop(file);

        let config = TripPlannerConfig::load_from_path(Some(path.clone())).unwrap();
        std::fs::remove_file(&path).unwrap();

        assert_eq!(config.estimator.stay_fee, 80.0);
        assert_eq!(config.estimator.simulated_delay_ms, 0);
        assert_eq!(config.estimator.road_factor, 1.3);
        assert_eq!(config.logging.format, "json");
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_config_path_generation() {
        if let Some(path) = TripPlannerConfig::get_config_path() {
            assert!(path.to_string_lossy().contains("tripplanner"));
            assert!(path.to_string_lossy().contains("config.toml"));
        }
    }
}
