//! Application state for the web layer.

use crate::store::WeatherStore;

/// Shared application state.
///
/// Holds no per-request data; each handler draws its own connections from
/// the store's pool.
#[derive(Clone)]
pub struct AppState {
    /// Read-only observation store
    pub store: WeatherStore,
}

impl AppState {
    /// Create a new app state.
    pub fn new(store: WeatherStore) -> Self {
        Self { store }
    }
}
