//! Application state managed via Dioxus context.
//!
//! `AppState` holds the loaded snapshot and load status, provided once with
//! `use_context_provider`. Panel-local selections (such as the coverage
//! window) live in the panel's own `use_signal`, not here.

use dioxus::prelude::*;
use satdash_model::DashboardData;

/// Shared application state for the dashboard.
#[derive(Clone, Copy)]
pub struct AppState {
    /// Loaded snapshot (None until parsed). Written once.
    pub data: Signal<Option<DashboardData>>,
    /// Whether the app is still loading
    pub loading: Signal<bool>,
    /// Error message if something went wrong
    pub error_msg: Signal<Option<String>>,
}

impl AppState {
    /// Create a new AppState with default signal values.
    pub fn new() -> Self {
        Self {
            data: Signal::new(None),
            loading: Signal::new(true),
            error_msg: Signal::new(None),
        }
    }

    /// Record a parsed snapshot and finish loading.
    pub fn finish_loading(&mut self, data: DashboardData) {
        self.data.set(Some(data));
        self.error_msg.set(None);
        self.loading.set(false);
    }

    /// Record a load failure and finish loading.
    pub fn fail_loading(&mut self, message: String) {
        self.error_msg.set(Some(message));
        self.loading.set(false);
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
