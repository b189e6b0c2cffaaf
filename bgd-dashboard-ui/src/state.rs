//! Application state managed via Dioxus context.
//!
//! `AppState` bundles the engine handle and load status into a single struct
//! provided via `use_context_provider`. Child components retrieve it with
//! `use_context::<AppState>()` and dispatch interactions through the
//! `dashboard` signal.

use bgd_engine::Dashboard;
use dioxus::prelude::*;

/// Shared application state for the dashboard apps.
#[derive(Clone, Copy)]
pub struct AppState {
    /// The engine instance owning rows and view state.
    pub dashboard: Signal<Dashboard>,
    /// Whether the initial dataset is still loading.
    pub loading: Signal<bool>,
    /// Error message if the dataset could not be loaded.
    pub error_msg: Signal<Option<String>>,
}

impl AppState {
    /// Create a new AppState with default signal values.
    pub fn new() -> Self {
        Self {
            dashboard: Signal::new(Dashboard::new()),
            loading: Signal::new(true),
            error_msg: Signal::new(None),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
