//! Transit transfer confidence server.
//!
//! Answers the question a rider changing vehicles actually has: "will I
//! make this connection?" Given two stops, a walking speed, and the time
//! until the connecting vehicle, the engine classifies the transfer as
//! likely, risky, or unlikely, and supports what-if re-simulation as the
//! inputs change.

pub mod cache;
pub mod domain;
pub mod mbta;
pub mod transfer;
pub mod web;
