//! Web layer for the transfer confidence server.
//!
//! Provides JSON endpoints for listing stops, evaluating transfers, and
//! running what-if delay simulations.

mod dto;
mod routes;
mod state;

pub use dto::*;
pub use routes::{AppError, create_router};
pub use state::AppState;
