//! Email Preview Overlay
//!
//! Renders the quote email inside an iframe. Fetches its own data keyed
//! by the quote id; closing discards everything.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;

#[component]
pub fn EmailPreviewOverlay(
    quote_id: ReadSignal<Option<String>>,
    set_quote_id: WriteSignal<Option<String>>,
) -> impl IntoView {
    let (subject, set_subject) = signal(String::new());
    let (html, set_html) = signal(None::<String>);
    let (error, set_error) = signal(None::<String>);

    Effect::new(move |_| {
        // transient state never survives a close or a target change
        set_subject.set(String::new());
        set_html.set(None);
        set_error.set(None);
        if let Some(id) = quote_id.get() {
            spawn_local(async move {
                match api::quote_email_preview(&id).await {
                    Ok(preview) => {
                        set_subject.set(preview.subject);
                        set_html.set(Some(preview.html));
                    }
                    Err(err) => set_error.set(Some(err.to_string())),
                }
            });
        }
    });

    view! {
        {move || quote_id.get().map(|_| view! {
            <div class="modal-overlay">
                <div class="modal preview-modal">
                    <div class="modal-header">
                        <span class="modal-title">
                            {move || {
                                let s = subject.get();
                                if s.is_empty() { "Email Preview".to_string() } else { s }
                            }}
                        </span>
                        <button class="close-btn" on:click=move |_| set_quote_id.set(None)>
                            "×"
                        </button>
                    </div>
                    {move || match (html.get(), error.get()) {
                        (Some(body), _) => view! {
                            <iframe class="email-frame" srcdoc=body></iframe>
                        }
                        .into_any(),
                        (None, Some(message)) => view! {
                            <div class="error-panel">
                                <span class="error-message">{message}</span>
                            </div>
                        }
                        .into_any(),
                        (None, None) => view! { <div class="loading">"Loading..."</div> }.into_any(),
                    }}
                </div>
            </div>
        })}
    }
}
