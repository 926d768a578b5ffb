//! MBTA V3 API HTTP client.
//!
//! Provides async methods for querying stops and real-time predictions.
//! Handles the optional API key header, rate-limit responses, and
//! conversion to domain types.

use std::sync::Arc;

use reqwest::header::{HeaderMap, HeaderValue};
use tokio::sync::Semaphore;
use tracing::debug;

use crate::domain::{Stop, StopId};

use super::convert::{Prediction, convert_predictions, convert_stop, convert_stops};
use super::error::MbtaError;
use super::types::{Document, PredictionResource, SingleDocument, StopResource};

/// Default base URL for the MBTA V3 API.
const DEFAULT_BASE_URL: &str = "https://api-v3.mbta.com";

/// Default maximum concurrent requests.
///
/// The API allows 20 requests/minute without a key, so we keep in-flight
/// concurrency modest.
const DEFAULT_MAX_CONCURRENT: usize = 5;

/// Configuration for the MBTA client.
#[derive(Debug, Clone)]
pub struct MbtaConfig {
    /// API key. Optional; raises the rate limit from 20 to 1000 req/min.
    pub api_key: Option<String>,
    /// Base URL for the API (defaults to production).
    pub base_url: String,
    /// Maximum concurrent requests.
    pub max_concurrent: usize,
    /// Request timeout in seconds.
    pub timeout_secs: u64,
}

impl MbtaConfig {
    /// Create a config with defaults and no API key.
    pub fn new() -> Self {
        Self {
            api_key: None,
            base_url: DEFAULT_BASE_URL.to_string(),
            max_concurrent: DEFAULT_MAX_CONCURRENT,
            timeout_secs: 30,
        }
    }

    /// Set the API key.
    pub fn with_api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }

    /// Set a custom base URL (for testing).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set maximum concurrent requests.
    pub fn with_max_concurrent(mut self, n: usize) -> Self {
        self.max_concurrent = n;
        self
    }

    /// Set request timeout.
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }
}

impl Default for MbtaConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// MBTA V3 API client.
///
/// Uses a semaphore to limit concurrent requests and stay under the API's
/// rate limits.
#[derive(Debug, Clone)]
pub struct MbtaClient {
    http: reqwest::Client,
    base_url: String,
    semaphore: Arc<Semaphore>,
}

impl MbtaClient {
    /// Create a new client with the given configuration.
    pub fn new(config: MbtaConfig) -> Result<Self, MbtaError> {
        let mut headers = HeaderMap::new();
        headers.insert(
            reqwest::header::ACCEPT,
            HeaderValue::from_static("application/vnd.api+json"),
        );

        if let Some(key) = &config.api_key {
            let value = HeaderValue::from_str(key).map_err(|_| MbtaError::Api {
                status: 0,
                message: "Invalid API key format".to_string(),
            })?;
            headers.insert("x-api-key", value);
        }

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url,
            semaphore: Arc::new(Semaphore::new(config.max_concurrent)),
        })
    }

    /// Get stops, optionally filtered to a route.
    pub async fn get_stops(&self, route: Option<&str>) -> Result<Vec<Stop>, MbtaError> {
        let mut query: Vec<(&str, String)> = Vec::new();
        if let Some(route) = route {
            query.push(("filter[route]", route.to_string()));
        }

        let body = self.get("/stops", &query).await?;
        let doc: Document<StopResource> = parse_json(&body)?;
        convert_stops(&doc.data).map_err(|e| MbtaError::Json {
            message: e.to_string(),
            body: None,
        })
    }

    /// Get a single stop by ID.
    pub async fn get_stop(&self, id: &StopId) -> Result<Stop, MbtaError> {
        let _permit = self.acquire().await?;

        let url = format!("{}/stops/{}", self.base_url, id);
        debug!(stop = %id, "fetching stop");

        let response = self.http.get(&url).send().await?;
        let status = response.status();

        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(MbtaError::StopNotFound {
                id: id.to_string(),
            });
        }
        if let Err(e) = check_status(status) {
            return Err(augment_api_error(e, response).await);
        }

        let body = response.text().await?;
        let doc: SingleDocument<StopResource> = parse_json(&body)?;

        convert_stop(&doc.data)
            .map_err(|e| MbtaError::Json {
                message: e.to_string(),
                body: None,
            })?
            .ok_or_else(|| MbtaError::StopNotFound {
                id: id.to_string(),
            })
    }

    /// Get stops near a location.
    ///
    /// `radius_deg` is in degrees of latitude (the API's convention);
    /// 0.01 is roughly one kilometer.
    pub async fn get_stops_near(
        &self,
        latitude: f64,
        longitude: f64,
        radius_deg: f64,
    ) -> Result<Vec<Stop>, MbtaError> {
        let query = [
            ("filter[latitude]", latitude.to_string()),
            ("filter[longitude]", longitude.to_string()),
            ("filter[radius]", radius_deg.to_string()),
        ];

        let body = self.get("/stops", &query).await?;
        let doc: Document<StopResource> = parse_json(&body)?;
        convert_stops(&doc.data).map_err(|e| MbtaError::Json {
            message: e.to_string(),
            body: None,
        })
    }

    /// Get real-time predictions for a stop, sorted by arrival time.
    pub async fn get_predictions(
        &self,
        stop: &StopId,
        route: Option<&str>,
        direction: Option<u8>,
    ) -> Result<Vec<Prediction>, MbtaError> {
        let mut query: Vec<(&str, String)> = vec![
            ("filter[stop]", stop.to_string()),
            ("sort", "arrival_time".to_string()),
        ];
        if let Some(route) = route {
            query.push(("filter[route]", route.to_string()));
        }
        if let Some(direction) = direction {
            query.push(("filter[direction_id]", direction.to_string()));
        }

        let body = self.get("/predictions", &query).await?;
        let doc: Document<PredictionResource> = parse_json(&body)?;
        convert_predictions(&doc.data).map_err(|e| MbtaError::Json {
            message: e.to_string(),
            body: None,
        })
    }

    /// Perform a GET against the API and return the response body.
    async fn get(&self, path: &str, query: &[(&str, String)]) -> Result<String, MbtaError> {
        let _permit = self.acquire().await?;

        let url = format!("{}{}", self.base_url, path);
        debug!(%url, "MBTA request");

        let response = self.http.get(&url).query(query).send().await?;
        let status = response.status();

        if let Err(e) = check_status(status) {
            return Err(augment_api_error(e, response).await);
        }

        Ok(response.text().await?)
    }

    async fn acquire(&self) -> Result<tokio::sync::SemaphorePermit<'_>, MbtaError> {
        self.semaphore.acquire().await.map_err(|_| MbtaError::Api {
            status: 0,
            message: "Semaphore closed".to_string(),
        })
    }
}

/// Map a non-success status to a typed error.
fn check_status(status: reqwest::StatusCode) -> Result<(), MbtaError> {
    if status == reqwest::StatusCode::UNAUTHORIZED || status == reqwest::StatusCode::FORBIDDEN {
        return Err(MbtaError::Unauthorized);
    }
    if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
        return Err(MbtaError::RateLimited);
    }
    if !status.is_success() {
        return Err(MbtaError::Api {
            status: status.as_u16(),
            message: String::new(),
        });
    }
    Ok(())
}

/// Attach the response body to a generic API error for diagnostics.
async fn augment_api_error(error: MbtaError, response: reqwest::Response) -> MbtaError {
    match error {
        MbtaError::Api { status, .. } => {
            let message = response.text().await.unwrap_or_default();
            MbtaError::Api { status, message }
        }
        other => other,
    }
}

fn parse_json<T: serde::de::DeserializeOwned>(body: &str) -> Result<T, MbtaError> {
    serde_json::from_str(body).map_err(|e| MbtaError::Json {
        message: e.to_string(),
        body: Some(body.chars().take(500).collect()),
    })
}
