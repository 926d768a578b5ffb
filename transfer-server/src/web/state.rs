//! Application state for the web layer.

use std::sync::Arc;

use crate::cache::CachedMbtaClient;

/// Shared application state.
///
/// The decision engine itself is stateless; the only shared service is
/// the cached MBTA client.
#[derive(Clone)]
pub struct AppState {
    /// Cached MBTA API client
    pub mbta: Arc<CachedMbtaClient>,
}

impl AppState {
    /// Create a new app state.
    pub fn new(mbta: CachedMbtaClient) -> Self {
        Self {
            mbta: Arc::new(mbta),
        }
    }
}
