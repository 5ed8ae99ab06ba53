//! Trip save endpoint
//!
//! Nothing is persisted: the mock store waits, logs and hands the trip back.

use std::time::Duration;

use async_trait::async_trait;
use tracing::{info, instrument};

use crate::config::StoreConfig;
use crate::models::Trip;
use crate::Result;

#[async_trait]
pub trait TripStore: Send + Sync {
    async fn save_trip(&self, trip: &Trip) -> Result<Trip>;
}

pub struct MockTripStore {
    delay: Duration,
}

impl Default for MockTripStore {
    fn default() -> Self {
        Self::new(StoreConfig::default())
    }
}

impl MockTripStore {
    #[must_use]
    pub fn new(config: StoreConfig) -> Self {
        Self {
            delay: Duration::from_millis(config.simulated_delay_ms),
        }
    }
}

#[async_trait]
impl TripStore for MockTripStore {
    #[instrument(name = "save_trip", skip(self, trip), fields(trip_id = %trip.id))]
    async fn save_trip(&self, trip: &Trip) -> Result<Trip> {
        trip.validate()?;
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
        info!(
            "Trip saved: {} days, {} travelers",
            trip.days.len(),
            trip.members
        );
        Ok(trip.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_save_returns_trip_unchanged() {
        let store = MockTripStore::new(StoreConfig {
            simulated_delay_ms: 1,
        });
        let trip = Trip::new(4);
        let saved = store.save_trip(&trip).await.unwrap();
        assert_eq!(saved, trip);
    }

    #[tokio::test]
    async fn test_save_rejects_invalid_trip() {
        let store = MockTripStore::new(StoreConfig {
            simulated_delay_ms: 0,
        });
        let mut trip = Trip::new(1);
        trip.days.clear();
        assert!(store.save_trip(&trip).await.is_err());
    }
}
