//! Error Panel Component
//!
//! Inline blocking-error panel with a manual retry affordance. Failed
//! fetches never retry on their own.

use leptos::prelude::*;

#[component]
pub fn ErrorPanel(
    #[prop(into)] message: Signal<Option<String>>,
    #[prop(into)] on_retry: Callback<()>,
) -> impl IntoView {
    view! {
        {move || message.get().map(|text| view! {
            <div class="error-panel">
                <span class="error-message">{text}</span>
                <button class="btn retry-btn" on:click=move |_| on_retry.run(())>
                    "Try Again"
                </button>
            </div>
        })}
    }
}
