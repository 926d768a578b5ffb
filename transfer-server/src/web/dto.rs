//! Data transfer objects for web requests and responses.

use serde::{Deserialize, Serialize};

use crate::domain::{Confidence, Stop, WalkingSpeed};
use crate::transfer::{
    DelayOutcome, TransferResult, format_countdown, format_distance, format_walking_time,
    is_feasible,
};

/// Query for listing stops.
#[derive(Debug, Deserialize)]
pub struct StopsQuery {
    /// Optional route ID to filter by (e.g. "Red").
    pub route: Option<String>,
}

/// Query for stops near a location.
#[derive(Debug, Deserialize)]
pub struct NearbyQuery {
    /// Latitude in degrees.
    pub lat: f64,

    /// Longitude in degrees.
    pub lon: f64,

    /// Search radius in degrees of latitude (defaults to ~1 km).
    pub radius: Option<f64>,
}

/// Query for evaluating a transfer.
#[derive(Debug, Deserialize)]
pub struct TransferQuery {
    /// Origin stop ID.
    pub from: String,

    /// Destination stop ID (where the connecting vehicle is caught).
    pub to: String,

    /// Walking speed preset (defaults to normal).
    pub speed: Option<WalkingSpeed>,

    /// Explicit available time in seconds. When absent, the next upcoming
    /// prediction at the destination stop is used.
    pub available_secs: Option<i64>,

    /// Optional route filter for the connecting vehicle.
    pub route: Option<String>,

    /// Optional direction filter for the connecting vehicle (0 or 1).
    pub direction: Option<u8>,
}

/// Query for the what-if delay simulation.
#[derive(Debug, Deserialize)]
pub struct SimulateQuery {
    /// The original buffer in seconds.
    pub buffer_secs: i64,

    /// Hypothetical extra delay in seconds.
    pub delay_secs: i64,
}

/// A stop in API responses.
#[derive(Debug, Serialize)]
pub struct StopResult {
    pub id: String,
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
    pub municipality: Option<String>,
}

impl StopResult {
    /// Build from a domain stop.
    pub fn from_stop(stop: &Stop) -> Self {
        Self {
            id: stop.id.to_string(),
            name: stop.name.clone(),
            latitude: stop.position.latitude,
            longitude: stop.position.longitude,
            municipality: stop.municipality.clone(),
        }
    }
}

/// Response for stop listings.
#[derive(Debug, Serialize)]
pub struct StopsResponse {
    pub stops: Vec<StopResult>,
}

/// Badge presentation data for a confidence tier.
#[derive(Debug, Serialize)]
pub struct Badge {
    pub label: &'static str,
    pub icon: &'static str,
    pub color: &'static str,
}

impl Badge {
    /// Build from a confidence tier.
    pub fn from_confidence(confidence: Confidence) -> Self {
        Self {
            label: confidence.label(),
            icon: confidence.icon(),
            color: confidence.color(),
        }
    }
}

/// Response for a transfer evaluation.
#[derive(Debug, Serialize)]
pub struct TransferResponse {
    pub from: StopResult,
    pub to: StopResult,

    /// Speed preset the evaluation used.
    pub speed: WalkingSpeed,
    pub speed_description: &'static str,

    pub walking_time_secs: u32,
    /// Formatted walking time ("7 min").
    pub walking_time: String,

    pub walking_distance_meters: u32,
    /// Formatted distance ("500m" / "1.2 mi").
    pub walking_distance: String,

    /// Time until the connecting vehicle, in seconds.
    pub available_secs: i64,
    /// Countdown to the connecting vehicle ("10:50").
    pub countdown: String,

    pub buffer_secs: i64,
    pub confidence: Confidence,
    pub badge: Badge,
    pub advice: &'static str,

    /// Whether the transfer is still worth attempting (advisory; a
    /// transfer up to 30 seconds short might be made at a run).
    pub feasible: bool,
}

impl TransferResponse {
    /// Build from an evaluated transfer.
    pub fn from_result(result: &TransferResult, available_secs: i64, speed: WalkingSpeed) -> Self {
        Self {
            from: StopResult::from_stop(&result.from),
            to: StopResult::from_stop(&result.to),
            speed,
            speed_description: speed.description(),
            walking_time_secs: result.walking_time_secs,
            walking_time: format_walking_time(result.walking_time_secs),
            walking_distance_meters: result.walking_distance_meters,
            walking_distance: format_distance(result.walking_distance_meters),
            available_secs,
            countdown: format_countdown(available_secs),
            buffer_secs: result.buffer_secs,
            confidence: result.confidence,
            badge: Badge::from_confidence(result.confidence),
            advice: result.confidence.advice(),
            feasible: is_feasible(result.walking_time_secs, available_secs),
        }
    }
}

/// Response for the what-if delay simulation.
#[derive(Debug, Serialize)]
pub struct SimulateResponse {
    pub buffer_secs: i64,
    pub confidence: Confidence,
    pub badge: Badge,
    pub advice: &'static str,
}

impl SimulateResponse {
    /// Build from a simulation outcome.
    pub fn from_outcome(outcome: DelayOutcome) -> Self {
        Self {
            buffer_secs: outcome.buffer_secs,
            confidence: outcome.confidence,
            badge: Badge::from_confidence(outcome.confidence),
            advice: outcome.confidence.advice(),
        }
    }
}

/// Error response body.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{GeoPoint, StopId};
    use crate::transfer::evaluate;

    fn stop(id: &str, name: &str, lat: f64, lon: f64) -> Stop {
        Stop::new(StopId::parse(id).unwrap(), name, GeoPoint::new(lat, lon))
    }

    #[test]
    fn transfer_response_formats_fields() {
        let from = stop("a", "Origin", 42.0, -71.0);
        let to = stop("b", "Destination", 42.0 + 500.0 / 111_194.93, -71.0);

        let result = evaluate(from, to, WalkingSpeed::Normal, 650);
        let response = TransferResponse::from_result(&result, 650, WalkingSpeed::Normal);

        assert_eq!(response.walking_time_secs, 447);
        assert_eq!(response.walking_time, "7 min");
        assert_eq!(response.walking_distance, "500m");
        assert_eq!(response.countdown, "10:50");
        assert_eq!(response.buffer_secs, 203);
        assert_eq!(response.badge.label, "Likely");
        assert!(response.feasible);
    }

    #[test]
    fn simulate_response_carries_badge() {
        let outcome = crate::transfer::simulate_delay(200, 150);
        let response = SimulateResponse::from_outcome(outcome);

        assert_eq!(response.buffer_secs, 50);
        assert_eq!(response.confidence, Confidence::Unlikely);
        assert_eq!(response.badge.icon, "✗");
    }

    #[test]
    fn stop_result_from_stop() {
        let s = stop("place-pktrm", "Park Street", 42.35639, -71.06250).with_municipality("Boston");
        let result = StopResult::from_stop(&s);

        assert_eq!(result.id, "place-pktrm");
        assert_eq!(result.name, "Park Street");
        assert_eq!(result.municipality.as_deref(), Some("Boston"));
    }
}
