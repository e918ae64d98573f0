//! Enquiries Manager
//!
//! List screen for customer enquiries: status and has-quotes filters,
//! debounced search, inline status transitions and a create-quote overlay.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::components::error_panel::ErrorPanel;
use crate::components::pagination::PaginationBar;
use crate::context::use_app_context;
use crate::models::{Enquiry, QuoteDraft};
use crate::query::use_query_controller;

const PAGE_SIZE: u32 = 10;

const STATUS_OPTIONS: &[(&str, &str)] = &[
    ("", "All statuses"),
    ("new", "New"),
    ("in-progress", "In progress"),
    ("quoted", "Quoted"),
    ("closed", "Closed"),
];

#[component]
pub fn EnquiriesManager() -> impl IntoView {
    let ctx = use_app_context();
    let ctrl = use_query_controller(PAGE_SIZE);

    let (rows, set_rows) = signal(Vec::<Enquiry>::new());
    let (loading, set_loading) = signal(false);
    let (error, set_error) = signal(None::<String>);
    let (quoting, set_quoting) = signal(None::<Enquiry>);

    Effect::new(move |_| {
        let _ = ctrl.version();
        let query = ctrl.query_untracked();
        let seq = ctrl.begin_request();
        set_loading.set(true);
        spawn_local(async move {
            let result = api::list_enquiries(&query.query_string()).await;
            if !ctrl.try_apply(seq) {
                return;
            }
            match result {
                Ok(resp) => {
                    ctrl.set_total(resp.total);
                    set_rows.set(resp.enquiries);
                    set_error.set(None);
                }
                Err(err) => set_error.set(Some(err.to_string())),
            }
            set_loading.set(false);
        });
    });

    let change_status = move |id: String, status: String| {
        spawn_local(async move {
            match api::update_enquiry_status(&id, &status).await {
                Ok(_) => {
                    ctx.toast_success(format!("Enquiry marked {}", status));
                    ctrl.refetch();
                }
                Err(err) => ctx.toast_error(format!("Status update failed: {}", err)),
            }
        });
    };

    view! {
        <section class="manager enquiries-manager">
            <header class="manager-header">
                <h2>"Enquiries"</h2>
            </header>

            <div class="filter-row">
                <input
                    type="search"
                    placeholder="Search name or email..."
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
                <select
                    prop:value=move || ctrl.query().filter("hasQuotes").to_string()
                    on:change=move |ev| ctrl.set_filter("hasQuotes", &event_target_value(&ev))
                >
                    <option value="">"With or without quotes"</option>
                    <option value="true">"Has quotes"</option>
                    <option value="false">"No quotes yet"</option>
                </select>
            </div>

            <ErrorPanel message=error on_retry=move |_: ()| ctrl.refetch() />

            <Show when=move || loading.get()>
                <div class="loading">"Loading..."</div>
            </Show>

            <table class="data-table">
                <thead>
                    <tr>
                        <th>"Name"</th>
                        <th>"Email"</th>
                        <th>"Status"</th>
                        <th>"Quotes"</th>
                        <th>"Received"</th>
                        <th>"Actions"</th>
                    </tr>
                </thead>
                <tbody>
                    <For
                        each=move || rows.get()
                        key=|enquiry| enquiry.id.clone()
                        children=move |enquiry| {
                            let status_id = enquiry.id.clone();
                            let quote_target = enquiry.clone();
                            let received = enquiry
                                .created_at
                                .map(|d| d.format("%Y-%m-%d %H:%M").to_string())
                                .unwrap_or_default();
                            view! {
                                <tr>
                                    <td>{enquiry.name.clone()}</td>
                                    <td>{enquiry.email.clone()}</td>
                                    <td>
                                        <select
                                            prop:value=enquiry.status.clone()
                                            on:change=move |ev| {
                                                change_status(status_id.clone(), event_target_value(&ev))
                                            }
                                        >
                                            <option value="new">"New"</option>
                                            <option value="in-progress">"In progress"</option>
                                            <option value="quoted">"Quoted"</option>
                                            <option value="closed">"Closed"</option>
                                        </select>
                                    </td>
                                    <td>
                                        {if enquiry.has_quotes {
                                            format!("{}", enquiry.quote_count)
                                        } else {
                                            "-".to_string()
                                        }}
                                    </td>
                                    <td>{received}</td>
                                    <td class="row-actions">
                                        <button
                                            class="btn small"
                                            on:click=move |_| set_quoting.set(Some(quote_target.clone()))
                                        >
                                            "Create Quote"
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

            <QuoteForm
                enquiry=quoting
                set_enquiry=set_quoting
                on_created=move |_: ()| ctrl.refetch()
            />
        </section>
    }
}

/// Overlay for creating a quote against an enquiry
#[component]
fn QuoteForm(
    enquiry: ReadSignal<Option<Enquiry>>,
    set_enquiry: WriteSignal<Option<Enquiry>>,
    #[prop(into)] on_created: Callback<()>,
) -> impl IntoView {
    let ctx = use_app_context();

    let (amount, set_amount) = signal(String::new());
    let (currency, set_currency) = signal(String::from("EUR"));
    let (notes, set_notes) = signal(String::new());
    let (amount_error, set_amount_error) = signal(None::<String>);
    let (saving, set_saving) = signal(false);

    // Reset the draft each time a new enquiry opens the overlay
    Effect::new(move |_| {
        if enquiry.get().is_some() {
            set_amount.set(String::new());
            set_currency.set("EUR".to_string());
            set_notes.set(String::new());
            set_amount_error.set(None);
        }
    });

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let Some(target) = enquiry.get_untracked() else {
            return;
        };
        let parsed = amount.get_untracked().trim().parse::<f64>().ok();
        let total = match parsed {
            Some(value) if value > 0.0 => value,
            _ => {
                set_amount_error.set(Some("Enter an amount greater than zero".to_string()));
                return;
            }
        };
        set_amount_error.set(None);

        let draft = QuoteDraft {
            total_amount: total,
            currency: currency.get_untracked(),
            notes: notes.get_untracked(),
        };
        set_saving.set(true);
        spawn_local(async move {
            match api::create_enquiry_quote(&target.id, &draft).await {
                Ok(quote) => {
                    ctx.toast_success(format!("Quote {} created", quote.reference));
                    set_enquiry.set(None);
                    on_created.run(());
                }
                Err(err) => ctx.toast_error(format!("Quote creation failed: {}", err)),
            }
            set_saving.set(false);
        });
    };

    view! {
        {move || enquiry.get().map(|target| view! {
            <div class="modal-overlay">
                <div class="modal form-modal">
                    <div class="modal-header">
                        <span class="modal-title">{format!("Quote for {}", target.name)}</span>
                        <button class="close-btn" on:click=move |_| set_enquiry.set(None)>
                            "×"
                        </button>
                    </div>
                    <form class="entity-form" on:submit=on_submit>
                        <div class="form-field">
                            <label>"Total amount"</label>
                            <input
                                type="number"
                                step="0.01"
                                min="0"
                                prop:value=move || amount.get()
                                on:input=move |ev| set_amount.set(event_target_value(&ev))
                            />
                            {move || {
                                amount_error
                                    .get()
                                    .map(|message| view! { <span class="field-error">{message}</span> })
                            }}
                        </div>
                        <div class="form-field">
                            <label>"Currency"</label>
                            <select
                                prop:value=move || currency.get()
                                on:change=move |ev| set_currency.set(event_target_value(&ev))
                            >
                                <option value="EUR">"EUR"</option>
                                <option value="GBP">"GBP"</option>
                                <option value="USD">"USD"</option>
                            </select>
                        </div>
                        <div class="form-field">
                            <label>"Notes"</label>
                            <textarea
                                prop:value=move || notes.get()
                                on:input=move |ev| set_notes.set(event_target_value(&ev))
                            ></textarea>
                        </div>
                        <div class="form-actions">
                            <button type="submit" class="btn primary" disabled=move || saving.get()>
                                {move || if saving.get() { "Creating..." } else { "Create Quote" }}
                            </button>
                        </div>
                    </form>
                </div>
            </div>
        })}
    }
}
