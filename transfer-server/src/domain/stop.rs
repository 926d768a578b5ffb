//! Transit stop types.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::GeoPoint;

/// Error returned when parsing an invalid stop ID.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid stop id: {reason}")]
pub struct InvalidStopId {
    reason: &'static str,
}

/// An MBTA stop identifier.
///
/// MBTA stop IDs are opaque non-empty strings ("place-pktrm", "70075",
/// "Back Bay"). This type guarantees the ID is non-empty and free of
/// whitespace padding by construction.
///
/// # Examples
///
/// ```
/// use transfer_server::domain::StopId;
///
/// let id = StopId::parse("place-pktrm").unwrap();
/// assert_eq!(id.as_str(), "place-pktrm");
///
/// assert!(StopId::parse("").is_err());
/// assert!(StopId::parse("   ").is_err());
/// ```
#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StopId(String);

impl StopId {
    /// Parse a stop ID from a string.
    ///
    /// The input is trimmed; an empty result is rejected.
    pub fn parse(s: &str) -> Result<Self, InvalidStopId> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(InvalidStopId {
                reason: "must be non-empty",
            });
        }
        Ok(StopId(trimmed.to_string()))
    }

    /// Returns the ID as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for StopId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "StopId({})", self.0)
    }
}

impl fmt::Display for StopId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A transit stop: an identified location with a display name.
///
/// Stops are provided by the MBTA API and are immutable once fetched.
/// The decision engine only reads the coordinates; the rest is carried
/// through for display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stop {
    /// Stop identifier.
    pub id: StopId,

    /// Rider-facing name (e.g. "Park Street").
    pub name: String,

    /// Stop location.
    pub position: GeoPoint,

    /// Municipality, when the API provides one.
    pub municipality: Option<String>,
}

impl Stop {
    /// Create a stop.
    pub fn new(id: StopId, name: impl Into<String>, position: GeoPoint) -> Self {
        Self {
            id,
            name: name.into(),
            position,
            municipality: None,
        }
    }

    /// Set the municipality.
    pub fn with_municipality(mut self, municipality: impl Into<String>) -> Self {
        self.municipality = Some(municipality.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_valid_ids() {
        assert!(StopId::parse("place-pktrm").is_ok());
        assert!(StopId::parse("70075").is_ok());
        assert!(StopId::parse("Back Bay").is_ok());
    }

    #[test]
    fn parse_trims_whitespace() {
        let id = StopId::parse("  place-north  ").unwrap();
        assert_eq!(id.as_str(), "place-north");
    }

    #[test]
    fn reject_empty() {
        assert!(StopId::parse("").is_err());
        assert!(StopId::parse("   ").is_err());
    }

    #[test]
    fn display_round_trips() {
        let id = StopId::parse("place-dwnxg").unwrap();
        assert_eq!(id.to_string(), "place-dwnxg");
    }

    #[test]
    fn stop_builder() {
        let stop = Stop::new(
            StopId::parse("place-pktrm").unwrap(),
            "Park Street",
            GeoPoint::new(42.35639, -71.06250),
        )
        .with_municipality("Boston");

        assert_eq!(stop.name, "Park Street");
        assert_eq!(stop.municipality.as_deref(), Some("Boston"));
    }
}
