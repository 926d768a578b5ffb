//! MBTA V3 API client.
//!
//! This module provides an HTTP client for the MBTA's public V3 API, the
//! source of stop locations and real-time vehicle predictions.
//!
//! Key characteristics of the API:
//! - JSON:API envelope (`data` / `attributes` / `relationships`)
//! - An API key is optional but raises the rate limit from 20 to
//!   1000 requests per minute (`x-api-key` header)
//! - Prediction times are RFC 3339 with a local UTC offset; either the
//!   arrival or departure time may be null

mod client;
mod convert;
mod error;
mod types;

pub use client::{MbtaClient, MbtaConfig};
pub use convert::{
    ConversionError, Prediction, convert_prediction, convert_predictions, convert_stop,
    convert_stops,
};
pub use error::MbtaError;
pub use types::{
    Document, PredictionAttributes, PredictionResource, SingleDocument, StopAttributes,
    StopResource,
};
