//! Walking speed presets.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A rider-selectable walking speed preset.
///
/// The presets map to fixed speeds in meters per second. They are the only
/// speeds the estimator accepts; there is no free-form speed input.
///
/// # Examples
///
/// ```
/// use transfer_server::domain::WalkingSpeed;
///
/// assert_eq!(WalkingSpeed::Normal.meters_per_second(), 1.2);
/// assert!(WalkingSpeed::Slow.meters_per_second() < WalkingSpeed::Fast.meters_per_second());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WalkingSpeed {
    /// ~1.8 mph. Elderly or mobility-impaired riders.
    Slow,
    /// ~2.7 mph. Average walking pace.
    Normal,
    /// ~3.6 mph. Brisk walking.
    Fast,
}

impl WalkingSpeed {
    /// The speed in meters per second.
    pub fn meters_per_second(self) -> f64 {
        match self {
            WalkingSpeed::Slow => 0.8,
            WalkingSpeed::Normal => 1.2,
            WalkingSpeed::Fast => 1.6,
        }
    }

    /// Rider-facing description of the preset.
    pub fn description(self) -> &'static str {
        match self {
            WalkingSpeed::Slow => "Slow (~1.8 mph)",
            WalkingSpeed::Normal => "Normal (~2.7 mph)",
            WalkingSpeed::Fast => "Fast (~3.6 mph)",
        }
    }

    /// All presets, slowest first.
    pub fn all() -> [WalkingSpeed; 3] {
        [WalkingSpeed::Slow, WalkingSpeed::Normal, WalkingSpeed::Fast]
    }
}

impl Default for WalkingSpeed {
    fn default() -> Self {
        WalkingSpeed::Normal
    }
}

impl fmt::Display for WalkingSpeed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            WalkingSpeed::Slow => "slow",
            WalkingSpeed::Normal => "normal",
            WalkingSpeed::Fast => "fast",
        };
        f.write_str(s)
    }
}
