//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use leptos::prelude::*;
use query_state::{ToastKind, ToastSlot};
use reactive_stores::Store;

use crate::models::FilterOptions;

/// Cross-screen state: the notification slot and the cached destination
/// filter options (countries/regions) reused by the destination form.
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    pub toast: ToastSlot,
    pub filter_options: FilterOptions,
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Show a toast, returning its dismiss token
pub fn store_show_toast(store: &AppStore, kind: ToastKind, message: impl Into<String>) -> u64 {
    store.toast().write().show(kind, message)
}

/// Dismiss by token; a stale token leaves a newer toast alone
pub fn store_dismiss_toast(store: &AppStore, token: u64) {
    store.toast().write().dismiss(token);
}

/// Cache the filter options returned by the destination list endpoint
pub fn store_set_filter_options(store: &AppStore, options: FilterOptions) {
    *store.filter_options().write() = options;
}
