//! Destination Manager
//!
//! List screen for destinations: filters, debounced search, sortable
//! columns, pagination, row actions and confirmed bulk actions.

use leptos::prelude::*;
use leptos::task::spawn_local;
use query_state::{Direction, Selection};

use crate::api;
use crate::components::confirm_dialog::ConfirmDialog;
use crate::components::destination_form::{DestinationEdit, DestinationForm};
use crate::components::error_panel::ErrorPanel;
use crate::components::pagination::PaginationBar;
use crate::context::use_app_context;
use crate::models::Destination;
use crate::query::use_query_controller;
use crate::store::{store_set_filter_options, use_app_store, AppStateStoreFields};

const PAGE_SIZE: u32 = 10;

const STATUS_OPTIONS: &[(&str, &str)] = &[
    ("", "All statuses"),
    ("draft", "Draft"),
    ("published", "Published"),
    ("archived", "Archived"),
];

#[derive(Clone, PartialEq)]
enum PendingAction {
    Bulk(String),
    Delete(String),
}

#[component]
pub fn DestinationManager() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();
    let ctrl = use_query_controller(PAGE_SIZE);

    let (rows, set_rows) = signal(Vec::<Destination>::new());
    let (loading, set_loading) = signal(false);
    let (error, set_error) = signal(None::<String>);
    let (selection, set_selection) = signal(Selection::default());
    let (pending, set_pending) = signal(None::<(PendingAction, String)>);
    let (editing, set_editing) = signal(None::<DestinationEdit>);

    // Refetch whenever the controller version changes; stale responses
    // are dropped by the sequence check, and every applied response
    // clears the selection wholesale.
    Effect::new(move |_| {
        let _ = ctrl.version();
        let query = ctrl.query_untracked();
        let seq = ctrl.begin_request();
        set_loading.set(true);
        spawn_local(async move {
            let result = api::list_destinations(&query.query_string()).await;
            if !ctrl.try_apply(seq) {
                return;
            }
            match result {
                Ok(resp) => {
                    ctrl.set_total(resp.total);
                    if let Some(options) = resp.filter_options {
                        store_set_filter_options(&store, options);
                    }
                    set_rows.set(resp.destinations);
                    set_selection.update(|s| s.clear());
                    set_error.set(None);
                }
                Err(err) => {
                    web_sys::console::error_1(
                        &format!("[DestinationManager] list failed: {}", err).into(),
                    );
                    set_error.set(Some(err.to_string()));
                }
            }
            set_loading.set(false);
        });
    });

    let request_bulk = move |action: &'static str, label: &'static str| {
        let count = selection.get_untracked().len();
        if count == 0 {
            return;
        }
        set_pending.set(Some((
            PendingAction::Bulk(action.to_string()),
            format!("{} {} selected destination(s)?", label, count),
        )));
    };

    let on_confirm = move |_: ()| {
        let Some((action, _)) = pending.get_untracked() else {
            return;
        };
        set_pending.set(None);
        match action {
            PendingAction::Bulk(action) => {
                let ids = selection.get_untracked().ids();
                spawn_local(async move {
                    match api::bulk_destinations(&action, &ids).await {
                        Ok(resp) => {
                            ctx.toast_success(format!("{} destination(s) updated", resp.count));
                            // refetch replaces the list and clears selection
                            ctrl.refetch();
                        }
                        // selection stays intact so the user can retry
                        Err(err) => ctx.toast_error(format!("Bulk action failed: {}", err)),
                    }
                });
            }
            PendingAction::Delete(id) => {
                spawn_local(async move {
                    match api::delete_destination(&id, true).await {
                        Ok(_) => {
                            ctx.toast_success("Destination deleted");
                            ctrl.refetch();
                        }
                        Err(err) => ctx.toast_error(format!("Delete failed: {}", err)),
                    }
                });
            }
        }
    };

    let sort_marker = move |field: &str| match ctrl.query().sort {
        Some(sort) if sort.field == field => match sort.direction {
            Direction::Asc => " ▲",
            Direction::Desc => " ▼",
        },
        _ => "",
    };

    view! {
        <section class="manager destination-manager">
            <header class="manager-header">
                <h2>"Destinations"</h2>
                <button class="btn primary" on:click=move |_| set_editing.set(Some(DestinationEdit::New))>
                    "New Destination"
                </button>
            </header>

            <div class="filter-row">
                <input
                    type="search"
                    placeholder="Search destinations..."
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
                    prop:value=move || ctrl.query().filter("country").to_string()
                    on:change=move |ev| ctrl.set_filter("country", &event_target_value(&ev))
                >
                    <option value="">"All countries"</option>
                    {move || {
                        store
                            .filter_options()
                            .get()
                            .countries
                            .into_iter()
                            .map(|c| view! { <option value=c.clone()>{c.clone()}</option> })
                            .collect_view()
                    }}
                </select>
                <select
                    prop:value=move || ctrl.query().filter("region").to_string()
                    on:change=move |ev| ctrl.set_filter("region", &event_target_value(&ev))
                >
                    <option value="">"All regions"</option>
                    {move || {
                        store
                            .filter_options()
                            .get()
                            .regions
                            .into_iter()
                            .map(|r| view! { <option value=r.clone()>{r.clone()}</option> })
                            .collect_view()
                    }}
                </select>
            </div>

            <ErrorPanel message=error on_retry=move |_: ()| ctrl.refetch() />

            <Show when=move || loading.get()>
                <div class="loading">"Loading..."</div>
            </Show>

            <Show when=move || !selection.get().is_empty()>
                <div class="bulk-bar">
                    <span>{move || format!("{} selected", selection.get().len())}</span>
                    <button class="btn" on:click=move |_| request_bulk("publish", "Publish")>
                        "Publish"
                    </button>
                    <button class="btn" on:click=move |_| request_bulk("unpublish", "Unpublish")>
                        "Unpublish"
                    </button>
                    <button class="btn danger" on:click=move |_| request_bulk("delete", "Delete")>
                        "Delete"
                    </button>
                </div>
            </Show>

            <table class="data-table">
                <thead>
                    <tr>
                        <th class="select-col">
                            <input
                                type="checkbox"
                                prop:checked=move || {
                                    let current = selection.get();
                                    let count = rows.get().len();
                                    count > 0 && current.len() == count
                                }
                                on:change=move |ev| {
                                    if event_target_checked(&ev) {
                                        set_selection.update(|s| {
                                            s.select_all(
                                                rows.get_untracked().iter().map(|d| d.id.as_str()),
                                            )
                                        });
                                    } else {
                                        set_selection.update(|s| s.clear());
                                    }
                                }
                            />
                        </th>
                        <th class="sortable" on:click=move |_| ctrl.toggle_sort("name")>
                            "Name" {move || sort_marker("name")}
                        </th>
                        <th class="sortable" on:click=move |_| ctrl.toggle_sort("country")>
                            "Country" {move || sort_marker("country")}
                        </th>
                        <th>"Region"</th>
                        <th>"Status"</th>
                        <th class="sortable" on:click=move |_| ctrl.toggle_sort("updatedAt")>
                            "Updated" {move || sort_marker("updatedAt")}
                        </th>
                        <th>"Actions"</th>
                    </tr>
                </thead>
                <tbody>
                    <For
                        each=move || rows.get()
                        key=|dest| dest.id.clone()
                        children=move |dest| {
                            let row_id = dest.id.clone();
                            let toggle_id = dest.id.clone();
                            let delete_id = dest.id.clone();
                            let delete_name = dest.name.clone();
                            let edit_dest = dest.clone();
                            let updated = dest
                                .updated_at
                                .map(|d| d.format("%Y-%m-%d").to_string())
                                .unwrap_or_default();
                            view! {
                                <tr>
                                    <td class="select-col">
                                        <input
                                            type="checkbox"
                                            prop:checked=move || selection.get().contains(&row_id)
                                            on:change=move |_| {
                                                set_selection.update(|s| s.toggle(&toggle_id))
                                            }
                                        />
                                    </td>
                                    <td>{dest.name.clone()}</td>
                                    <td>{dest.country.clone()}</td>
                                    <td>{dest.region.clone()}</td>
                                    <td>
                                        <span class=format!("status-badge {}", dest.status)>
                                            {dest.status.clone()}
                                        </span>
                                    </td>
                                    <td>{updated}</td>
                                    <td class="row-actions">
                                        <button
                                            class="btn small"
                                            on:click=move |_| {
                                                set_editing
                                                    .set(Some(DestinationEdit::Existing(edit_dest.clone())))
                                            }
                                        >
                                            "Edit"
                                        </button>
                                        <button
                                            class="btn small danger"
                                            on:click=move |_| {
                                                set_pending
                                                    .set(
                                                        Some((
                                                            PendingAction::Delete(delete_id.clone()),
                                                            format!("Permanently delete \"{}\"?", delete_name),
                                                        )),
                                                    )
                                            }
                                        >
                                            "Delete"
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

            <ConfirmDialog
                prompt=Signal::derive(move || pending.get().map(|(_, text)| text))
                on_confirm=on_confirm
                on_cancel=move |_: ()| set_pending.set(None)
            />

            <DestinationForm
                editing=editing
                set_editing=set_editing
                on_saved=move |_: ()| ctrl.refetch()
            />
        </section>
    }
}
