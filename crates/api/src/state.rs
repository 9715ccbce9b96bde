//! Application state shared across handlers.

use ad_store::AdStore;

/// Shared application state.
///
/// Holds the process-wide datastore handle; sessions are opened from it
/// per request by the session middleware.
#[derive(Clone)]
pub struct AppState {
    pub store: AdStore,
}

impl AppState {
    pub fn new(store: AdStore) -> Self {
        Self { store }
    }
}
