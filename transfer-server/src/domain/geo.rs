//! Geographic coordinates and distance.

use serde::{Deserialize, Serialize};

/// Mean Earth radius in meters, as used by the haversine formula.
const EARTH_RADIUS_METERS: f64 = 6_371_000.0;

/// A WGS84 coordinate pair in degrees.
///
/// This is a plain value type with no identity. Coordinates are taken on
/// trust from the upstream transit API; out-of-range latitudes or longitudes
/// are the caller's responsibility.
///
/// # Examples
///
/// ```
/// use transfer_server::domain::GeoPoint;
///
/// let park_st = GeoPoint::new(42.35639, -71.06250);
/// let downtown = GeoPoint::new(42.35573, -71.06029);
/// let d = park_st.distance_meters(&downtown);
/// assert!(d > 100.0 && d < 300.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    /// Latitude in degrees (positive north).
    pub latitude: f64,
    /// Longitude in degrees (positive east).
    pub longitude: f64,
}

impl GeoPoint {
    /// Create a point from latitude and longitude in degrees.
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Great-circle distance to another point in meters.
    ///
    /// Uses the haversine formula. Symmetric, zero for coincident points,
    /// and monotonically increasing in angular separation.
    pub fn distance_meters(&self, other: &GeoPoint) -> f64 {
        let d_lat = (other.latitude - self.latitude).to_radians();
        let d_lon = (other.longitude - self.longitude).to_radians();

        let a = (d_lat / 2.0).sin().powi(2)
            + self.latitude.to_radians().cos()
                * other.latitude.to_radians().cos()
                * (d_lon / 2.0).sin().powi(2);
        let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

        EARTH_RADIUS_METERS * c
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn coincident_points_are_zero_distance() {
        let p = GeoPoint::new(42.3601, -71.0589);
        assert_eq!(p.distance_meters(&p), 0.0);
    }

    #[test]
    fn distance_is_symmetric() {
        let a = GeoPoint::new(42.35639, -71.06250);
        let b = GeoPoint::new(42.36528, -71.06417);
        assert_eq!(a.distance_meters(&b), b.distance_meters(&a));
    }

    #[test]
    fn park_st_to_haymarket_is_about_a_kilometer() {
        // Park Street and Haymarket stations in Boston.
        let park = GeoPoint::new(42.35639, -71.06250);
        let haymarket = GeoPoint::new(42.36528, -71.06417);
        let d = park.distance_meters(&haymarket);
        assert!(d > 900.0 && d < 1100.0, "got {d}");
    }

    #[test]
    fn one_degree_of_latitude_is_about_111_km() {
        let a = GeoPoint::new(42.0, -71.0);
        let b = GeoPoint::new(43.0, -71.0);
        let d = a.distance_meters(&b);
        assert!((d - 111_195.0).abs() < 200.0, "got {d}");
    }

    #[test]
    fn monotonic_in_angular_separation() {
        let origin = GeoPoint::new(42.0, -71.0);
        let near = GeoPoint::new(42.001, -71.0);
        let far = GeoPoint::new(42.002, -71.0);
        assert!(origin.distance_meters(&near) < origin.distance_meters(&far));
    }
}
