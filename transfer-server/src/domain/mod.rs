//! Domain types for the transfer confidence engine.
//!
//! This module contains the core value types the decision engine operates
//! on. All types enforce their invariants at construction time, so code
//! that receives these types can trust their validity.

mod confidence;
mod geo;
mod speed;
mod stop;

pub use confidence::{Confidence, LIKELY_THRESHOLD_SECS, RISKY_THRESHOLD_SECS};
pub use geo::GeoPoint;
pub use speed::WalkingSpeed;
pub use stop::{InvalidStopId, Stop, StopId};
