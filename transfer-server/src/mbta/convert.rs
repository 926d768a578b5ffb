//! Conversion from MBTA wire types to domain types.

use chrono::{DateTime, FixedOffset, Utc};

use crate::domain::{GeoPoint, Stop, StopId};

use super::types::{PredictionResource, StopResource};

/// Error converting a wire resource to a domain type.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConversionError {
    /// A timestamp was not valid RFC 3339.
    #[error("invalid timestamp {value:?}: {message}")]
    InvalidTimestamp { value: String, message: String },

    /// A stop ID failed validation.
    #[error("invalid stop id {value:?}")]
    InvalidStopId { value: String },
}

/// A real-time prediction for a vehicle at a stop.
///
/// The decision engine only consumes the effective time (to derive the
/// available transfer window); the rest is carried for display.
#[derive(Debug, Clone, PartialEq)]
pub struct Prediction {
    /// Prediction resource ID (ephemeral).
    pub id: String,

    /// Route the vehicle serves, when known.
    pub route_id: Option<String>,

    /// Direction along the route (0 or 1).
    pub direction_id: u8,

    /// Predicted arrival at the stop.
    pub arrival: Option<DateTime<FixedOffset>>,

    /// Predicted departure from the stop.
    pub departure: Option<DateTime<FixedOffset>>,

    /// Status text when no precise time is available.
    pub status: Option<String>,
}

impl Prediction {
    /// The time that matters for a connecting rider: departure when the
    /// vehicle will leave again, otherwise arrival.
    pub fn effective_time(&self) -> Option<DateTime<FixedOffset>> {
        self.departure.or(self.arrival)
    }

    /// Whole seconds from `now` until the effective time.
    ///
    /// Negative when the prediction is already in the past. `None` when the
    /// prediction carries no time at all.
    pub fn available_seconds(&self, now: DateTime<Utc>) -> Option<i64> {
        let t = self.effective_time()?;
        Some(t.signed_duration_since(now).num_seconds())
    }
}

/// Convert a stop resource to a domain stop.
///
/// Returns `Ok(None)` for resources without coordinates (entrance and
/// parent records): they are skipped rather than treated as errors.
pub fn convert_stop(resource: &StopResource) -> Result<Option<Stop>, ConversionError> {
    let (Some(lat), Some(lon)) = (resource.attributes.latitude, resource.attributes.longitude)
    else {
        return Ok(None);
    };

    let id = StopId::parse(&resource.id).map_err(|_| ConversionError::InvalidStopId {
        value: resource.id.clone(),
    })?;

    let mut stop = Stop::new(id, resource.attributes.name.clone(), GeoPoint::new(lat, lon));
    if let Some(municipality) = &resource.attributes.municipality {
        stop = stop.with_municipality(municipality.clone());
    }

    Ok(Some(stop))
}

/// Convert a list of stop resources, skipping coordinate-less records.
pub fn convert_stops(resources: &[StopResource]) -> Result<Vec<Stop>, ConversionError> {
    let mut stops = Vec::with_capacity(resources.len());
    for resource in resources {
        if let Some(stop) = convert_stop(resource)? {
            stops.push(stop);
        }
    }
    Ok(stops)
}

/// Convert a prediction resource to a domain prediction.
///
/// Returns `Ok(None)` for predictions with neither arrival nor departure:
/// they carry no usable time and are dropped.
pub fn convert_prediction(
    resource: &PredictionResource,
) -> Result<Option<Prediction>, ConversionError> {
    let arrival = parse_time(resource.attributes.arrival_time.as_deref())?;
    let departure = parse_time(resource.attributes.departure_time.as_deref())?;

    if arrival.is_none() && departure.is_none() {
        return Ok(None);
    }

    Ok(Some(Prediction {
        id: resource.id.clone(),
        route_id: resource.route_id().map(str::to_string),
        direction_id: resource.attributes.direction_id,
        arrival,
        departure,
        status: resource.attributes.status.clone(),
    }))
}

/// Convert a list of prediction resources, dropping timeless ones.
pub fn convert_predictions(
    resources: &[PredictionResource],
) -> Result<Vec<Prediction>, ConversionError> {
    let mut predictions = Vec::with_capacity(resources.len());
    for resource in resources {
        if let Some(prediction) = convert_prediction(resource)? {
            predictions.push(prediction);
        }
    }
    Ok(predictions)
}

fn parse_time(value: Option<&str>) -> Result<Option<DateTime<FixedOffset>>, ConversionError> {
    match value {
        None => Ok(None),
        Some(s) => DateTime::parse_from_rfc3339(s).map(Some).map_err(|e| {
            ConversionError::InvalidTimestamp {
                value: s.to_string(),
                message: e.to_string(),
            }
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mbta::types::{Document, PredictionResource, StopResource};
    use chrono::TimeZone;

    fn stop_resources() -> Vec<StopResource> {
        let json = r#"{
            "data": [
                {
                    "id": "place-pktrm",
                    "attributes": {
                        "name": "Park Street",
                        "latitude": 42.35639457,
                        "longitude": -71.0624242,
                        "municipality": "Boston"
                    }
                },
                {
                    "id": "door-pktrm-winter",
                    "attributes": {
                        "name": "Park Street - Winter St",
                        "latitude": null,
                        "longitude": null,
                        "municipality": "Boston"
                    }
                }
            ]
        }"#;
        serde_json::from_str::<Document<StopResource>>(json)
            .unwrap()
            .data
    }

    #[test]
    fn converts_stops_and_skips_coordinate_less_records() {
        let stops = convert_stops(&stop_resources()).unwrap();
        assert_eq!(stops.len(), 1);
        assert_eq!(stops[0].id.as_str(), "place-pktrm");
        assert_eq!(stops[0].name, "Park Street");
        assert_eq!(stops[0].municipality.as_deref(), Some("Boston"));
    }

    fn prediction_resource(arrival: Option<&str>, departure: Option<&str>) -> PredictionResource {
        let json = format!(
            r#"{{
                "id": "prediction-1",
                "attributes": {{
                    "arrival_time": {},
                    "departure_time": {},
                    "direction_id": 0,
                    "status": null
                }},
                "relationships": {{
                    "route": {{ "data": {{ "id": "Red" }} }}
                }}
            }}"#,
            arrival.map_or("null".to_string(), |s| format!("{s:?}")),
            departure.map_or("null".to_string(), |s| format!("{s:?}")),
        );
        serde_json::from_str(&json).unwrap()
    }

    #[test]
    fn departure_wins_over_arrival() {
        let resource = prediction_resource(
            Some("2026-08-23T14:32:00-04:00"),
            Some("2026-08-23T14:33:30-04:00"),
        );
        let prediction = convert_prediction(&resource).unwrap().unwrap();
        assert_eq!(
            prediction.effective_time().unwrap().to_rfc3339(),
            "2026-08-23T14:33:30-04:00"
        );
        assert_eq!(prediction.route_id.as_deref(), Some("Red"));
    }

    #[test]
    fn arrival_only_prediction_uses_arrival() {
        let resource = prediction_resource(Some("2026-08-23T14:32:00-04:00"), None);
        let prediction = convert_prediction(&resource).unwrap().unwrap();
        assert_eq!(
            prediction.effective_time().unwrap().to_rfc3339(),
            "2026-08-23T14:32:00-04:00"
        );
    }

    #[test]
    fn timeless_prediction_is_dropped() {
        let resource = prediction_resource(None, None);
        assert_eq!(convert_prediction(&resource).unwrap(), None);
    }

    #[test]
    fn invalid_timestamp_is_an_error() {
        let resource = prediction_resource(Some("yesterday-ish"), None);
        assert!(matches!(
            convert_prediction(&resource),
            Err(ConversionError::InvalidTimestamp { .. })
        ));
    }

    #[test]
    fn available_seconds_counts_down_to_the_effective_time() {
        let resource = prediction_resource(None, Some("2026-08-23T14:30:00-04:00"));
        let prediction = convert_prediction(&resource).unwrap().unwrap();

        // 14:30 EDT is 18:30 UTC.
        let now = Utc.with_ymd_and_hms(2026, 8, 23, 18, 25, 0).unwrap();
        assert_eq!(prediction.available_seconds(now), Some(300));

        let later = Utc.with_ymd_and_hms(2026, 8, 23, 18, 31, 0).unwrap();
        assert_eq!(prediction.available_seconds(later), Some(-60));
    }
}
