//! The transfer decision engine.
//!
//! Given two stops, a walking speed, and the time until the connecting
//! vehicle, this module answers: will the rider make the transfer? The
//! answer is a discrete confidence tier plus the timing breakdown behind
//! it. Everything here is pure, synchronous computation; the engine can be
//! called concurrently from any number of request handlers without
//! coordination.

mod estimate;
mod evaluate;
mod format;

pub use estimate::{PLATFORM_BUFFER_SECS, TransferEstimate, walking_time_secs};
pub use evaluate::{
    DelayOutcome, FEASIBILITY_SLACK_SECS, TransferResult, evaluate, is_feasible, simulate_delay,
};
pub use format::{format_countdown, format_distance, format_minutes_until, format_walking_time};
