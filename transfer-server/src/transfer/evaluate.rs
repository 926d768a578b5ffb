//! Transfer evaluation and what-if delay simulation.

use serde::Serialize;

use crate::domain::{Confidence, Stop, WalkingSpeed};

use super::estimate::TransferEstimate;

/// How many seconds short a transfer may be while still being considered
/// attemptable (a rider might run).
pub const FEASIBILITY_SLACK_SECS: i64 = 30;

/// The full outcome of evaluating one candidate transfer.
///
/// Built once per query and immutable afterwards. The invariant
/// `buffer_secs == available_secs - walking_time_secs` holds exactly.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TransferResult {
    /// Stop the rider transfers from.
    pub from: Stop,

    /// Stop the rider transfers to.
    pub to: Stop,

    /// Estimated walking time in seconds, including the platform buffer.
    pub walking_time_secs: u32,

    /// Straight-line walking distance in whole meters.
    pub walking_distance_meters: u32,

    /// Available time minus walking time. Negative when the walk alone
    /// exceeds the time available.
    pub buffer_secs: i64,

    /// Classification of the buffer.
    pub confidence: Confidence,
}

/// Result of reclassifying a buffer under a hypothetical delay.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DelayOutcome {
    /// Classification of the adjusted buffer.
    pub confidence: Confidence,

    /// The adjusted buffer in seconds.
    pub buffer_secs: i64,
}

/// Evaluate a transfer between two stops.
///
/// Computes the walking estimate, derives the buffer from the available
/// time, and classifies it. This is the single composed entry point the
/// rest of the application calls.
///
/// # Examples
///
/// ```
/// use transfer_server::domain::{Confidence, GeoPoint, Stop, StopId, WalkingSpeed};
/// use transfer_server::transfer::evaluate;
///
/// let from = Stop::new(
///     StopId::parse("place-pktrm").unwrap(),
///     "Park Street",
///     GeoPoint::new(42.35639, -71.06250),
/// );
/// let to = Stop::new(
///     StopId::parse("place-dwnxg").unwrap(),
///     "Downtown Crossing",
///     GeoPoint::new(42.35573, -71.06029),
/// );
///
/// let result = evaluate(from, to, WalkingSpeed::Normal, 600);
/// assert_eq!(
///     result.buffer_secs,
///     600 - i64::from(result.walking_time_secs),
/// );
/// assert_eq!(result.confidence, Confidence::from_buffer(result.buffer_secs));
/// ```
pub fn evaluate(
    from: Stop,
    to: Stop,
    speed: WalkingSpeed,
    available_secs: i64,
) -> TransferResult {
    let estimate = TransferEstimate::between(&from.position, &to.position, speed);
    let buffer_secs = available_secs - i64::from(estimate.walking_time_secs);

    TransferResult {
        from,
        to,
        walking_time_secs: estimate.walking_time_secs,
        walking_distance_meters: estimate.distance_meters,
        buffer_secs,
        confidence: Confidence::from_buffer(buffer_secs),
    }
}

/// Reclassify a buffer under a hypothetical extra delay.
///
/// Pure arithmetic over the original buffer; the geometry is not
/// recomputed. A delay of zero returns the original classification.
pub fn simulate_delay(original_buffer_secs: i64, delay_secs: i64) -> DelayOutcome {
    let buffer_secs = original_buffer_secs - delay_secs;
    DelayOutcome {
        confidence: Confidence::from_buffer(buffer_secs),
        buffer_secs,
    }
}

/// Whether a transfer is still worth attempting.
///
/// A transfer up to [`FEASIBILITY_SLACK_SECS`] short is considered
/// attemptable (the rider might run). This is an advisory flag, softer
/// than the unlikely classification; it never suppresses a result.
pub fn is_feasible(walking_time_secs: u32, available_secs: i64) -> bool {
    available_secs - i64::from(walking_time_secs) >= -FEASIBILITY_SLACK_SECS
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{GeoPoint, StopId};

    fn stop(id: &str, name: &str, lat: f64, lon: f64) -> Stop {
        Stop::new(StopId::parse(id).unwrap(), name, GeoPoint::new(lat, lon))
    }

    /// Origin and a destination almost exactly 500 m due north.
    fn stops_500m_apart() -> (Stop, Stop) {
        (
            stop("a", "Origin", 42.0, -71.0),
            stop("b", "Destination", 42.0 + 500.0 / 111_194.93, -71.0),
        )
    }

    #[test]
    fn comfortable_margin_is_likely() {
        let (from, to) = stops_500m_apart();
        let result = evaluate(from, to, WalkingSpeed::Normal, 650);

        // Walking time is 447s (ceil(500/1.2) + 30), so buffer is 203.
        assert_eq!(result.walking_time_secs, 447);
        assert_eq!(result.buffer_secs, 203);
        assert_eq!(result.confidence, Confidence::Likely);
    }

    #[test]
    fn tight_margin_is_unlikely_but_feasible() {
        let (from, to) = stops_500m_apart();
        let result = evaluate(from, to, WalkingSpeed::Normal, 480);

        assert_eq!(result.buffer_secs, 33);
        assert_eq!(result.confidence, Confidence::Unlikely);
        assert!(is_feasible(result.walking_time_secs, 480));
    }

    #[test]
    fn buffer_invariant_holds() {
        let (from, to) = stops_500m_apart();
        for available in [-300, 0, 447, 480, 650, 10_000] {
            let result = evaluate(from.clone(), to.clone(), WalkingSpeed::Slow, available);
            assert_eq!(
                result.buffer_secs,
                available - i64::from(result.walking_time_secs)
            );
        }
    }

    #[test]
    fn speed_changes_shift_the_buffer() {
        let (from, to) = stops_500m_apart();
        let slow = evaluate(from.clone(), to.clone(), WalkingSpeed::Slow, 650);
        let fast = evaluate(from, to, WalkingSpeed::Fast, 650);
        assert!(slow.buffer_secs < fast.buffer_secs);
    }

    #[test]
    fn zero_delay_is_a_noop() {
        for buffer in [-500, 0, 59, 60, 179, 180, 1000] {
            let outcome = simulate_delay(buffer, 0);
            assert_eq!(outcome.buffer_secs, buffer);
            assert_eq!(outcome.confidence, Confidence::from_buffer(buffer));
        }
    }

    #[test]
    fn delay_can_demote_a_likely_transfer() {
        // 200s buffer is likely; a 150s delay leaves 50s, which is unlikely.
        let outcome = simulate_delay(200, 150);
        assert_eq!(outcome.buffer_secs, 50);
        assert_eq!(outcome.confidence, Confidence::Unlikely);
    }

    #[test]
    fn feasibility_allows_running_up_to_thirty_seconds_short() {
        assert!(is_feasible(447, 480));
        assert!(is_feasible(447, 447));
        assert!(is_feasible(447, 417)); // exactly 30s short
        assert!(!is_feasible(447, 416));
    }
}
