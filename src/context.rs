//! Application Context
//!
//! Shared state provided via Leptos Context API.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use query_state::ToastKind;

use crate::store::{store_dismiss_toast, store_show_toast, AppStore};

/// Toasts hold the slot for this long unless a newer one replaces them
const TOAST_DISMISS_MS: u32 = 4000;

/// App-wide helpers provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    store: AppStore,
}

impl AppContext {
    pub fn new(store: AppStore) -> Self {
        Self { store }
    }

    pub fn toast_success(&self, message: impl Into<String>) {
        self.show(ToastKind::Success, message.into());
    }

    pub fn toast_error(&self, message: impl Into<String>) {
        self.show(ToastKind::Error, message.into());
    }

    pub fn toast_info(&self, message: impl Into<String>) {
        self.show(ToastKind::Info, message.into());
    }

    fn show(&self, kind: ToastKind, message: String) {
        let token = store_show_toast(&self.store, kind, message);
        let store = self.store;
        spawn_local(async move {
            TimeoutFuture::new(TOAST_DISMISS_MS).await;
            // no-op if a newer toast already took the slot
            store_dismiss_toast(&store, token);
        });
    }
}

/// Get the app context
pub fn use_app_context() -> AppContext {
    use_context::<AppContext>().expect("AppContext should be provided")
}
