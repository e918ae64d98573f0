//! Quote Search
//!
//! Search-and-filter screen for quotes with CSV/JSON export downloads
//! and a per-row email preview overlay.

use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::{JsCast, JsValue};

use crate::api;
use crate::components::email_preview::EmailPreviewOverlay;
use crate::components::error_panel::ErrorPanel;
use crate::components::pagination::PaginationBar;
use crate::context::use_app_context;
use crate::models::Quote;
use crate::query::use_query_controller;

const PAGE_SIZE: u32 = 10;

const STATUS_OPTIONS: &[(&str, &str)] = &[
    ("", "All statuses"),
    ("draft", "Draft"),
    ("sent", "Sent"),
    ("accepted", "Accepted"),
    ("rejected", "Rejected"),
    ("expired", "Expired"),
];

/// Hand the export body to the browser as a file download
fn trigger_download(filename: &str, mime: &str, data: &str) {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    let parts = js_sys::Array::of1(&JsValue::from_str(data));
    let options = web_sys::BlobPropertyBag::new();
    options.set_type(mime);
    let Ok(blob) = web_sys::Blob::new_with_str_sequence_and_options(&parts, &options) else {
        return;
    };
    let Ok(url) = web_sys::Url::create_object_url_with_blob(&blob) else {
        return;
    };
    if let Ok(element) = document.create_element("a") {
        if let Ok(anchor) = element.dyn_into::<web_sys::HtmlAnchorElement>() {
            anchor.set_href(&url);
            anchor.set_download(filename);
            anchor.click();
        }
    }
    let _ = web_sys::Url::revoke_object_url(&url);
}

#[component]
pub fn QuoteSearch() -> impl IntoView {
    let ctx = use_app_context();
    let ctrl = use_query_controller(PAGE_SIZE);

    let (rows, set_rows) = signal(Vec::<Quote>::new());
    let (loading, set_loading) = signal(false);
    let (error, set_error) = signal(None::<String>);
    let (exporting, set_exporting) = signal(false);
    let (preview_id, set_preview_id) = signal(None::<String>);

    Effect::new(move |_| {
        let _ = ctrl.version();
        let query = ctrl.query_untracked();
        let seq = ctrl.begin_request();
        set_loading.set(true);
        spawn_local(async move {
            let result = api::search_quotes(&query.query_string()).await;
            if !ctrl.try_apply(seq) {
                return;
            }
            match result {
                Ok(resp) => {
                    ctrl.set_total(resp.total);
                    set_rows.set(resp.quotes);
                    set_error.set(None);
                }
                Err(err) => set_error.set(Some(err.to_string())),
            }
            set_loading.set(false);
        });
    });

    let export = move |format: &'static str| {
        if exporting.get_untracked() {
            return;
        }
        let query = ctrl.query_untracked().query_string();
        set_exporting.set(true);
        spawn_local(async move {
            match api::export_quotes(format, &query).await {
                Ok(body) => {
                    let (filename, mime) = match format {
                        "csv" => ("quotes-export.csv", "text/csv"),
                        _ => ("quotes-export.json", "application/json"),
                    };
                    trigger_download(filename, mime, &body);
                    ctx.toast_success(format!("Export ready ({})", format.to_uppercase()));
                }
                Err(err) => ctx.toast_error(format!("Export failed: {}", err)),
            }
            set_exporting.set(false);
        });
    };

    view! {
        <section class="manager quote-search">
            <header class="manager-header">
                <h2>"Quotes"</h2>
                <div class="header-actions">
                    <button class="btn" disabled=move || exporting.get() on:click=move |_| export("csv")>
                        "Export CSV"
                    </button>
                    <button class="btn" disabled=move || exporting.get() on:click=move |_| export("json")>
                        "Export JSON"
                    </button>
                </div>
            </header>

            <div class="filter-row">
                <input
                    type="search"
                    placeholder="Search reference or customer..."
                    prop:value=move || ctrl.search()
                    on:input=move |ev| ctrl.set_search(event_target_value(&ev))
                />
                <select
                    prop:value=move || ctrl.query().filter("status").to_string()
                    on:change=move |ev| ctrl.set_filter("status", &event_target_value(&ev))
                >
                    {STATUS_OPTIONS
                        .iter()
                        .map(|(value, label)| view! { <option value=*value>{*label}</option> })
                        .collect_view()}
                </select>
                <input
                    type="date"
                    title="Created from"
                    prop:value=move || ctrl.query().filter("dateFrom").to_string()
                    on:change=move |ev| ctrl.set_filter("dateFrom", &event_target_value(&ev))
                />
                <input
                    type="date"
                    title="Created to"
                    prop:value=move || ctrl.query().filter("dateTo").to_string()
                    on:change=move |ev| ctrl.set_filter("dateTo", &event_target_value(&ev))
                />
            </div>

            <ErrorPanel message=error on_retry=move |_: ()| ctrl.refetch() />

            <Show when=move || loading.get()>
                <div class="loading">"Loading..."</div>
            </Show>

            <table class="data-table">
                <thead>
                    <tr>
                        <th>"Reference"</th>
                        <th>"Customer"</th>
                        <th>"Destination"</th>
                        <th>"Status"</th>
                        <th>"Amount"</th>
                        <th>"Created"</th>
                        <th>"Actions"</th>
                    </tr>
                </thead>
                <tbody>
                    <For
                        each=move || rows.get()
                        key=|quote| quote.id.clone()
                        children=move |quote| {
                            let preview_target = quote.id.clone();
                            let created = quote
                                .created_at
                                .map(|d| d.format("%Y-%m-%d").to_string())
                                .unwrap_or_default();
                            view! {
                                <tr>
                                    <td>{quote.reference.clone()}</td>
                                    <td>{quote.customer_name.clone()}</td>
                                    <td>{quote.destination.clone()}</td>
                                    <td>
                                        <span class=format!("status-badge {}", quote.status)>
                                            {quote.status.clone()}
                                        </span>
                                    </td>
                                    <td>{format!("{} {:.2}", quote.currency, quote.total_amount)}</td>
                                    <td>{created}</td>
                                    <td class="row-actions">
                                        <button
                                            class="btn small"
                                            on:click=move |_| set_preview_id.set(Some(preview_target.clone()))
                                        >
                                            "Email Preview"
                                        </button>
                                    </td>
                                </tr>
                            }
                        }
                    />
                </tbody>
            </table>

            <PaginationBar
                query=Signal::derive(move || ctrl.query())
                on_page=move |page: u32| ctrl.set_page(page)
            />

            <EmailPreviewOverlay quote_id=preview_id set_quote_id=set_preview_id />
        </section>
    }
}
