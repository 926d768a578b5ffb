//! MBTA V3 API response DTOs.
//!
//! The MBTA API speaks JSON:API: every response wraps resources in a
//! `data` envelope, with the interesting fields under `attributes` and
//! cross-references under `relationships`. These types map that structure
//! directly. `Option` is used liberally because the API sends `null` for
//! missing fields (parent-station records have no coordinates, predictions
//! without real-time data have no times).

use serde::Deserialize;

/// A JSON:API document holding a list of resources.
#[derive(Debug, Clone, Deserialize)]
pub struct Document<T> {
    pub data: Vec<T>,
}

/// A JSON:API document holding a single resource.
#[derive(Debug, Clone, Deserialize)]
pub struct SingleDocument<T> {
    pub data: T,
}

/// A stop resource.
#[derive(Debug, Clone, Deserialize)]
pub struct StopResource {
    pub id: String,
    pub attributes: StopAttributes,
}

/// Attributes of a stop.
#[derive(Debug, Clone, Deserialize)]
pub struct StopAttributes {
    /// Rider-facing stop name.
    pub name: String,

    /// Latitude in degrees. Absent on some aggregate records.
    pub latitude: Option<f64>,

    /// Longitude in degrees.
    pub longitude: Option<f64>,

    /// Municipality (e.g. "Boston").
    pub municipality: Option<String>,
}

/// A prediction resource.
#[derive(Debug, Clone, Deserialize)]
pub struct PredictionResource {
    pub id: String,
    pub attributes: PredictionAttributes,
    pub relationships: Option<PredictionRelationships>,
}

/// Attributes of a prediction.
///
/// Either time may be null: the first stop of a trip has no arrival, the
/// last has no departure, and a vehicle without real-time data has neither.
#[derive(Debug, Clone, Deserialize)]
pub struct PredictionAttributes {
    /// Predicted arrival time (RFC 3339 with offset).
    pub arrival_time: Option<String>,

    /// Predicted departure time (RFC 3339 with offset).
    pub departure_time: Option<String>,

    /// Direction of travel along the route (0 or 1).
    pub direction_id: u8,

    /// Status text when no precise time is available ("Stopped 5 stops away").
    pub status: Option<String>,
}

/// Relationships of a prediction to other resources.
#[derive(Debug, Clone, Deserialize)]
pub struct PredictionRelationships {
    pub route: Option<Relationship>,
    pub stop: Option<Relationship>,
}

/// A JSON:API relationship entry.
#[derive(Debug, Clone, Deserialize)]
pub struct Relationship {
    pub data: Option<RelationshipData>,
}

/// The identifier half of a relationship.
#[derive(Debug, Clone, Deserialize)]
pub struct RelationshipData {
    pub id: String,
}

impl PredictionResource {
    /// ID of the related route, if present.
    pub fn route_id(&self) -> Option<&str> {
        self.relationships
            .as_ref()?
            .route
            .as_ref()?
            .data
            .as_ref()
            .map(|d| d.id.as_str())
    }
}
