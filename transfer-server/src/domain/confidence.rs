//! Transfer confidence classification.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Buffer at or above this is classified [`Confidence::Likely`] (seconds).
pub const LIKELY_THRESHOLD_SECS: i64 = 180;

/// Buffer at or above this (but below the likely threshold) is classified
/// [`Confidence::Risky`] (seconds).
pub const RISKY_THRESHOLD_SECS: i64 = 60;

/// Rider-facing classification of a transfer's time buffer.
///
/// Ordered by safety for display purposes only: the classifier hands out
/// discrete tiers, never a numeric score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Confidence {
    /// At least three minutes of slack. Comfortable.
    Likely,
    /// Between one and three minutes of slack. Doable, but tight.
    Risky,
    /// Under a minute of slack, possibly negative.
    Unlikely,
}

impl Confidence {
    /// Classify a signed time buffer in seconds.
    ///
    /// Total over all integers; lower bounds are inclusive, so a buffer of
    /// exactly 180 is likely and exactly 60 is risky.
    ///
    /// # Examples
    ///
    /// ```
    /// use transfer_server::domain::Confidence;
    ///
    /// assert_eq!(Confidence::from_buffer(180), Confidence::Likely);
    /// assert_eq!(Confidence::from_buffer(179), Confidence::Risky);
    /// assert_eq!(Confidence::from_buffer(60), Confidence::Risky);
    /// assert_eq!(Confidence::from_buffer(59), Confidence::Unlikely);
    /// ```
    pub fn from_buffer(buffer_secs: i64) -> Self {
        if buffer_secs >= LIKELY_THRESHOLD_SECS {
            Confidence::Likely
        } else if buffer_secs >= RISKY_THRESHOLD_SECS {
            Confidence::Risky
        } else {
            Confidence::Unlikely
        }
    }

    /// Badge label.
    pub fn label(self) -> &'static str {
        match self {
            Confidence::Likely => "Likely",
            Confidence::Risky => "Risky",
            Confidence::Unlikely => "Unlikely",
        }
    }

    /// Badge icon.
    pub fn icon(self) -> &'static str {
        match self {
            Confidence::Likely => "✓",
            Confidence::Risky => "!",
            Confidence::Unlikely => "✗",
        }
    }

    /// Badge background color as a hex string.
    pub fn color(self) -> &'static str {
        match self {
            Confidence::Likely => "#22C55E",
            Confidence::Risky => "#F59E0B",
            Confidence::Unlikely => "#EF4444",
        }
    }

    /// One-line advice for the rider.
    ///
    /// Static text per tier; intentionally not generated.
    pub fn advice(self) -> &'static str {
        match self {
            Confidence::Likely => "You should make this transfer at a comfortable pace.",
            Confidence::Risky => "This transfer is tight. Head to the platform right away.",
            Confidence::Unlikely => {
                "You are unlikely to make this transfer. Consider the next departure."
            }
        }
    }
}

impl fmt::Display for Confidence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn boundary_behavior() {
        assert_eq!(Confidence::from_buffer(180), Confidence::Likely);
        assert_eq!(Confidence::from_buffer(179), Confidence::Risky);
        assert_eq!(Confidence::from_buffer(60), Confidence::Risky);
        assert_eq!(Confidence::from_buffer(59), Confidence::Unlikely);
    }

    #[test]
    fn extreme_buffers() {
        assert_eq!(Confidence::from_buffer(-1000), Confidence::Unlikely);
        assert_eq!(Confidence::from_buffer(100_000), Confidence::Likely);
        assert_eq!(Confidence::from_buffer(i64::MIN), Confidence::Unlikely);
        assert_eq!(Confidence::from_buffer(i64::MAX), Confidence::Likely);
    }

    #[test]
    fn zero_buffer_is_unlikely() {
        assert_eq!(Confidence::from_buffer(0), Confidence::Unlikely);
    }

    #[test]
    fn badge_data_per_tier() {
        assert_eq!(Confidence::Likely.label(), "Likely");
        assert_eq!(Confidence::Likely.icon(), "✓");
        assert_eq!(Confidence::Likely.color(), "#22C55E");
        assert_eq!(Confidence::Risky.icon(), "!");
        assert_eq!(Confidence::Unlikely.icon(), "✗");
    }

    #[test]
    fn serde_uses_lowercase_names() {
        assert_eq!(
            serde_json::to_string(&Confidence::Unlikely).unwrap(),
            "\"unlikely\""
        );
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn classification_is_total_and_consistent(buffer in any::<i64>()) {
            let tier = Confidence::from_buffer(buffer);
            match tier {
                Confidence::Likely => prop_assert!(buffer >= LIKELY_THRESHOLD_SECS),
                Confidence::Risky => {
                    prop_assert!(buffer >= RISKY_THRESHOLD_SECS);
                    prop_assert!(buffer < LIKELY_THRESHOLD_SECS);
                }
                Confidence::Unlikely => prop_assert!(buffer < RISKY_THRESHOLD_SECS),
            }
        }

        #[test]
        fn classification_is_monotone(a in any::<i64>(), b in any::<i64>()) {
            // A larger buffer never yields a less safe tier.
            fn rank(c: Confidence) -> u8 {
                match c {
                    Confidence::Unlikely => 0,
                    Confidence::Risky => 1,
                    Confidence::Likely => 2,
                }
            }
            let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
            prop_assert!(rank(Confidence::from_buffer(lo)) <= rank(Confidence::from_buffer(hi)));
        }
    }
}
