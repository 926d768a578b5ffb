//! Walking time estimation between stops.

use serde::Serialize;

use crate::domain::{GeoPoint, WalkingSpeed};

/// Fixed overhead added to every walk, in seconds.
///
/// Covers stairs, fare gates, and platform navigation that straight-line
/// distance does not capture.
pub const PLATFORM_BUFFER_SECS: u32 = 30;

/// A walking estimate between two points.
///
/// Derived and ephemeral: recomputed on every query, never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TransferEstimate {
    /// Straight-line distance, rounded to whole meters.
    pub distance_meters: u32,

    /// Estimated walking time in seconds, including the platform buffer.
    /// Always at least [`PLATFORM_BUFFER_SECS`].
    pub walking_time_secs: u32,
}

impl TransferEstimate {
    /// Estimate the walk between two points at the given speed.
    ///
    /// The walking time is `ceil(distance / speed)` plus the platform
    /// buffer. Time is always rounded up: the estimator never promises a
    /// shorter walk than the geometry supports.
    ///
    /// # Examples
    ///
    /// ```
    /// use transfer_server::domain::{GeoPoint, WalkingSpeed};
    /// use transfer_server::transfer::TransferEstimate;
    ///
    /// let a = GeoPoint::new(42.35639, -71.06250);
    /// let estimate = TransferEstimate::between(&a, &a, WalkingSpeed::Normal);
    /// assert_eq!(estimate.distance_meters, 0);
    /// assert_eq!(estimate.walking_time_secs, 30); // platform buffer floor
    /// ```
    pub fn between(from: &GeoPoint, to: &GeoPoint, speed: WalkingSpeed) -> Self {
        let distance = from.distance_meters(to);
        let walk_secs = (distance / speed.meters_per_second()).ceil() as u32;

        Self {
            distance_meters: distance.round() as u32,
            walking_time_secs: walk_secs + PLATFORM_BUFFER_SECS,
        }
    }
}

/// Estimated walking time between two points in seconds.
///
/// Convenience wrapper around [`TransferEstimate::between`] for callers
/// that only need the time.
pub fn walking_time_secs(from: &GeoPoint, to: &GeoPoint, speed: WalkingSpeed) -> u32 {
    TransferEstimate::between(from, to, speed).walking_time_secs
}
