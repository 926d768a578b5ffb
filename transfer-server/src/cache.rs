//! Caching layer for MBTA API responses.
//!
//! Stop records are effectively static, so they get a long TTL.
//! Predictions are real-time and clients poll on a 15-second cadence; the
//! prediction TTL matches that cadence so a burst of what-if queries
//! against the same stop hits the API at most once per refresh interval.

use std::sync::Arc;
use std::time::Duration;

use moka::future::Cache as MokaCache;

use crate::domain::{Stop, StopId};
use crate::mbta::{MbtaClient, MbtaError, Prediction};

/// Cache key for a stop list: the route filter, or "*" for all stops.
type StopListKey = String;

/// Cache key for predictions: (stop, route filter, direction filter).
type PredictionKey = (String, Option<String>, Option<u8>);

/// Configuration for the cache.
#[derive(Debug, Clone)]
pub struct CacheConfig {
    /// TTL for individual stops and stop lists.
    pub stop_ttl: Duration,

    /// TTL for prediction lists.
    pub prediction_ttl: Duration,

    /// Maximum number of cached entries per cache.
    pub max_capacity: u64,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            stop_ttl: Duration::from_secs(24 * 60 * 60),
            prediction_ttl: Duration::from_secs(15),
            max_capacity: 1000,
        }
    }
}

/// MBTA client with caching.
///
/// Wraps an [`MbtaClient`] and caches stop and prediction lookups.
pub struct CachedMbtaClient {
    client: MbtaClient,
    stops: MokaCache<String, Arc<Stop>>,
    stop_lists: MokaCache<StopListKey, Arc<Vec<Stop>>>,
    predictions: MokaCache<PredictionKey, Arc<Vec<Prediction>>>,
}

impl CachedMbtaClient {
    /// Create a new cached client.
    pub fn new(client: MbtaClient, config: &CacheConfig) -> Self {
        let stops = MokaCache::builder()
            .time_to_live(config.stop_ttl)
            .max_capacity(config.max_capacity)
            .build();

        let stop_lists = MokaCache::builder()
            .time_to_live(config.stop_ttl)
            .max_capacity(config.max_capacity)
            .build();

        let predictions = MokaCache::builder()
            .time_to_live(config.prediction_ttl)
            .max_capacity(config.max_capacity)
            .build();

        Self {
            client,
            stops,
            stop_lists,
            predictions,
        }
    }

    /// Get a stop by ID, using the cache if possible.
    pub async fn get_stop(&self, id: &StopId) -> Result<Arc<Stop>, MbtaError> {
        if let Some(stop) = self.stops.get(id.as_str()).await {
            return Ok(stop);
        }

        let stop = Arc::new(self.client.get_stop(id).await?);
        self.stops.insert(id.to_string(), stop.clone()).await;
        Ok(stop)
    }

    /// Get stops, optionally filtered to a route, using the cache.
    pub async fn get_stops(&self, route: Option<&str>) -> Result<Arc<Vec<Stop>>, MbtaError> {
        let key: StopListKey = route.unwrap_or("*").to_string();

        if let Some(stops) = self.stop_lists.get(&key).await {
            return Ok(stops);
        }

        let stops = Arc::new(self.client.get_stops(route).await?);
        self.stop_lists.insert(key, stops.clone()).await;

        // Individual stops from the list are also useful by ID.
        for stop in stops.iter() {
            self.stops
                .insert(stop.id.to_string(), Arc::new(stop.clone()))
                .await;
        }

        Ok(stops)
    }

    /// Get stops near a location.
    ///
    /// Not cached: the coordinate space is continuous, so keys would
    /// almost never repeat.
    pub async fn get_stops_near(
        &self,
        latitude: f64,
        longitude: f64,
        radius_deg: f64,
    ) -> Result<Vec<Stop>, MbtaError> {
        self.client
            .get_stops_near(latitude, longitude, radius_deg)
            .await
    }

    /// Get predictions for a stop, using the cache.
    pub async fn get_predictions(
        &self,
        stop: &StopId,
        route: Option<&str>,
        direction: Option<u8>,
    ) -> Result<Arc<Vec<Prediction>>, MbtaError> {
        let key: PredictionKey = (stop.to_string(), route.map(str::to_string), direction);

        if let Some(predictions) = self.predictions.get(&key).await {
            return Ok(predictions);
        }

        let predictions = Arc::new(self.client.get_predictions(stop, route, direction).await?);
        self.predictions.insert(key, predictions.clone()).await;
        Ok(predictions)
    }

    /// Number of cached stop entries (for monitoring).
    pub fn stop_entry_count(&self) -> u64 {
        self.stops.entry_count()
    }

    /// Invalidate all cached entries.
    pub fn invalidate_all(&self) {
        self.stops.invalidate_all();
        self.stop_lists.invalidate_all();
        self.predictions.invalidate_all();
    }
}
