//! Confirm Dialog Component
//!
//! Blocking confirmation overlay. Bulk and destructive actions dispatch
//! nothing until the user confirms here.

use leptos::prelude::*;

#[component]
pub fn ConfirmDialog(
    /// `None` keeps the dialog closed; `Some(text)` opens it
    #[prop(into)] prompt: Signal<Option<String>>,
    #[prop(into)] on_confirm: Callback<()>,
    #[prop(into)] on_cancel: Callback<()>,
) -> impl IntoView {
    view! {
        {move || prompt.get().map(|text| view! {
            <div class="modal-overlay">
                <div class="modal confirm-dialog">
                    <p class="confirm-text">{text}</p>
                    <div class="confirm-actions">
                        <button class="btn danger" on:click=move |_| on_confirm.run(())>
                            "Confirm"
                        </button>
                        <button class="btn" on:click=move |_| on_cancel.run(())>
                            "Cancel"
                        </button>
                    </div>
                </div>
            </div>
        })}
    }
}
