//! Toast Host Component
//!
//! Renders the single notification slot. The slot itself lives in the
//! store; this component only displays whatever toast currently owns it.

use leptos::prelude::*;
use query_state::ToastKind;

use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn ToastHost() -> impl IntoView {
    let store = use_app_store();

    view! {
        {move || {
            let slot = store.toast().get();
            slot.current().cloned().map(|toast| {
                let class = match toast.kind {
                    ToastKind::Success => "toast toast-success",
                    ToastKind::Error => "toast toast-error",
                    ToastKind::Info => "toast toast-info",
                };
                view! {
                    <div class=class>
                        <span class="toast-message">{toast.message.clone()}</span>
                        <button
                            class="toast-close"
                            on:click=move |_| store.toast().write().clear()
                        >
                            "×"
                        </button>
                    </div>
                }
            })
        }}
    }
}
