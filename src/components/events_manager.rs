//! Events Manager
//!
//! Event categories and events side by side: inline category CRUD on the
//! left, the event list with a create/edit overlay on the right.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::components::confirm_dialog::ConfirmDialog;
use crate::components::error_panel::ErrorPanel;
use crate::context::use_app_context;
use crate::models::{EventCategory, EventDraft, EventItem};

#[derive(Clone, PartialEq)]
pub enum EventEdit {
    New,
    Existing(EventItem),
}

#[component]
pub fn EventsManager() -> impl IntoView {
    let ctx = use_app_context();

    let (categories, set_categories) = signal(Vec::<EventCategory>::new());
    let (events, set_events) = signal(Vec::<EventItem>::new());
    let (reload, set_reload) = signal(0u32);
    let (error, set_error) = signal(None::<String>);

    // Category editing state
    let (new_name, set_new_name) = signal(String::new());
    let (new_description, set_new_description) = signal(String::new());
    let (editing_category, set_editing_category) = signal(None::<EventCategory>);
    let (deleting_category, set_deleting_category) = signal(None::<EventCategory>);

    // Event editing state
    let (editing_event, set_editing_event) = signal(None::<EventEdit>);

    Effect::new(move |_| {
        let _ = reload.get();
        spawn_local(async move {
            match api::list_event_categories().await {
                Ok(loaded) => {
                    set_categories.set(loaded);
                    set_error.set(None);
                }
                Err(err) => set_error.set(Some(err.to_string())),
            }
            if let Ok(loaded) = api::list_events().await {
                set_events.set(loaded);
            }
        });
    });

    let add_category = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let name = new_name.get_untracked().trim().to_string();
        if name.is_empty() {
            return;
        }
        let description = new_description.get_untracked();
        spawn_local(async move {
            match api::create_event_category(&name, &description).await {
                Ok(_) => {
                    ctx.toast_success(format!("Category \"{}\" created", name));
                    set_new_name.set(String::new());
                    set_new_description.set(String::new());
                    set_reload.update(|r| *r += 1);
                }
                Err(err) => ctx.toast_error(format!("Create failed: {}", err)),
            }
        });
    };

    let save_category = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let Some(category) = editing_category.get_untracked() else {
            return;
        };
        if category.name.trim().is_empty() {
            return;
        }
        spawn_local(async move {
            match api::update_event_category(&category.id, &category.name, &category.description)
                .await
            {
                Ok(_) => {
                    ctx.toast_success("Category updated");
                    set_editing_category.set(None);
                    set_reload.update(|r| *r += 1);
                }
                Err(err) => ctx.toast_error(format!("Update failed: {}", err)),
            }
        });
    };

    let delete_category = move |_: ()| {
        let Some(category) = deleting_category.get_untracked() else {
            return;
        };
        set_deleting_category.set(None);
        spawn_local(async move {
            match api::delete_event_category(&category.id).await {
                Ok(_) => {
                    ctx.toast_success(format!("Category \"{}\" deleted", category.name));
                    set_reload.update(|r| *r += 1);
                }
                Err(err) => ctx.toast_error(format!("Delete failed: {}", err)),
            }
        });
    };

    let category_name = move |id: &Option<String>| {
        let categories = categories.get();
        id.as_ref()
            .and_then(|id| categories.iter().find(|c| &c.id == id))
            .map(|c| c.name.clone())
            .unwrap_or_else(|| "-".to_string())
    };

    view! {
        <section class="manager events-manager">
            <header class="manager-header">
                <h2>"Events"</h2>
                <button class="btn primary" on:click=move |_| set_editing_event.set(Some(EventEdit::New))>
                    "New Event"
                </button>
            </header>

            <ErrorPanel message=error on_retry=move |_: ()| set_reload.update(|r| *r += 1) />

            <div class="events-layout">
                <aside class="category-panel">
                    <h3>"Categories"</h3>
                    <form class="category-add-form" on:submit=add_category>
                        <input
                            type="text"
                            placeholder="New category..."
                            prop:value=move || new_name.get()
                            on:input=move |ev| set_new_name.set(event_target_value(&ev))
                        />
                        <input
                            type="text"
                            placeholder="Description (optional)"
                            prop:value=move || new_description.get()
                            on:input=move |ev| set_new_description.set(event_target_value(&ev))
                        />
                        <button type="submit" class="btn small">"Add"</button>
                    </form>

                    <For
                        each=move || categories.get()
                        key=|category| category.id.clone()
                        children=move |category| {
                            let edit_target = category.clone();
                            let delete_target = category.clone();
                            let is_editing = move || {
                                editing_category.get().map(|c| c.id.clone())
                                    == Some(edit_target.id.clone())
                            };
                            let edit_for_open = category.clone();
                            view! {
                                <div class="category-row">
                                    {move || {
                                        if is_editing() {
                                            let current = editing_category.get().unwrap_or_else(|| edit_for_open.clone());
                                            view! {
                                                <form class="category-edit-form" on:submit=save_category>
                                                    <input
                                                        type="text"
                                                        prop:value=current.name.clone()
                                                        on:input=move |ev| {
                                                            set_editing_category
                                                                .update(|c| {
                                                                    if let Some(c) = c {
                                                                        c.name = event_target_value(&ev);
                                                                    }
                                                                })
                                                        }
                                                    />
                                                    <button type="submit" class="btn small">"Save"</button>
                                                    <button
                                                        type="button"
                                                        class="btn small"
                                                        on:click=move |_| set_editing_category.set(None)
                                                    >
                                                        "Cancel"
                                                    </button>
                                                </form>
                                            }
                                                .into_any()
                                        } else {
                                            let open_target = edit_for_open.clone();
                                            let remove_target = delete_target.clone();
                                            view! {
                                                <div class="category-line">
                                                    <span class="category-name">
                                                        {open_target.name.clone()}
                                                        <span class="category-count">
                                                            {format!(" ({})", open_target.event_count)}
                                                        </span>
                                                    </span>
                                                    <button
                                                        class="btn small"
                                                        on:click=move |_| {
                                                            set_editing_category.set(Some(open_target.clone()))
                                                        }
                                                    >
                                                        "Edit"
                                                    </button>
                                                    <button
                                                        class="btn small danger"
                                                        on:click=move |_| {
                                                            set_deleting_category.set(Some(remove_target.clone()))
                                                        }
                                                    >
                                                        "×"
                                                    </button>
                                                </div>
                                            }
                                                .into_any()
                                        }
                                    }}
                                </div>
                            }
                        }
                    />
                </aside>

                <div class="events-list">
                    <table class="data-table">
                        <thead>
                            <tr>
                                <th>"Title"</th>
                                <th>"Category"</th>
                                <th>"Location"</th>
                                <th>"Date"</th>
                                <th>"Status"</th>
                                <th>"Actions"</th>
                            </tr>
                        </thead>
                        <tbody>
                            <For
                                each=move || events.get()
                                key=|event| event.id.clone()
                                children=move |event| {
                                    let edit_target = event.clone();
                                    let category = category_name(&event.category_id);
                                    view! {
                                        <tr>
                                            <td>{event.title.clone()}</td>
                                            <td>{category}</td>
                                            <td>{event.location.clone()}</td>
                                            <td>{event.start_date.clone().unwrap_or_default()}</td>
                                            <td>
                                                <span class=format!("status-badge {}", event.status)>
                                                    {event.status.clone()}
                                                </span>
                                            </td>
                                            <td class="row-actions">
                                                <button
                                                    class="btn small"
                                                    on:click=move |_| {
                                                        set_editing_event
                                                            .set(Some(EventEdit::Existing(edit_target.clone())))
                                                    }
                                                >
                                                    "Edit"
                                                </button>
                                            </td>
                                        </tr>
                                    }
                                }
                            />
                        </tbody>
                    </table>
                </div>
            </div>

            <ConfirmDialog
                prompt=Signal::derive(move || {
                    deleting_category.get().map(|c| format!("Delete category \"{}\"?", c.name))
                })
                on_confirm=delete_category
                on_cancel=move |_: ()| set_deleting_category.set(None)
            />

            <EventForm
                editing=editing_event
                set_editing=set_editing_event
                categories=categories
                on_saved=move |_: ()| set_reload.update(|r| *r += 1)
            />
        </section>
    }
}

/// Create/edit overlay for a single event
#[component]
fn EventForm(
    editing: ReadSignal<Option<EventEdit>>,
    set_editing: WriteSignal<Option<EventEdit>>,
    categories: ReadSignal<Vec<EventCategory>>,
    #[prop(into)] on_saved: Callback<()>,
) -> impl IntoView {
    let ctx = use_app_context();

    let (title, set_title) = signal(String::new());
    let (category_id, set_category_id) = signal(String::new());
    let (location, set_location) = signal(String::new());
    let (start_date, set_start_date) = signal(String::new());
    let (status, set_status) = signal(String::from("draft"));
    let (title_error, set_title_error) = signal(None::<String>);
    let (saving, set_saving) = signal(false);

    Effect::new(move |_| {
        if let Some(edit) = editing.get() {
            match edit {
                EventEdit::New => {
                    set_title.set(String::new());
                    set_category_id.set(String::new());
                    set_location.set(String::new());
                    set_start_date.set(String::new());
                    set_status.set("draft".to_string());
                }
                EventEdit::Existing(event) => {
                    set_title.set(event.title);
                    set_category_id.set(event.category_id.unwrap_or_default());
                    set_location.set(event.location);
                    set_start_date.set(event.start_date.unwrap_or_default());
                    set_status.set(event.status);
                }
            }
            set_title_error.set(None);
        }
    });

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if title.get_untracked().trim().is_empty() {
            set_title_error.set(Some("Title is required".to_string()));
            return;
        }
        set_title_error.set(None);

        let category = category_id.get_untracked();
        let draft = EventDraft {
            title: title.get_untracked().trim().to_string(),
            category_id: (!category.is_empty()).then_some(category),
            location: location.get_untracked(),
            start_date: start_date.get_untracked(),
            status: status.get_untracked(),
        };
        let target = editing.get_untracked();
        set_saving.set(true);
        spawn_local(async move {
            let result = match &target {
                Some(EventEdit::Existing(event)) => api::update_event(&event.id, &draft).await,
                _ => api::create_event(&draft).await,
            };
            match result {
                Ok(saved) => {
                    ctx.toast_success(format!("\"{}\" saved", saved.title));
                    set_editing.set(None);
                    on_saved.run(());
                }
                Err(err) => ctx.toast_error(format!("Save failed: {}", err)),
            }
            set_saving.set(false);
        });
    };

    view! {
        {move || editing.get().map(|edit| {
            let heading = match edit {
                EventEdit::New => "New Event",
                EventEdit::Existing(_) => "Edit Event",
            };
            view! {
                <div class="modal-overlay">
                    <div class="modal form-modal">
                        <div class="modal-header">
                            <span class="modal-title">{heading}</span>
                            <button class="close-btn" on:click=move |_| set_editing.set(None)>
                                "×"
                            </button>
                        </div>
                        <form class="entity-form" on:submit=on_submit>
                            <div class="form-field">
                                <label>"Title"</label>
                                <input
                                    type="text"
                                    prop:value=move || title.get()
                                    on:input=move |ev| set_title.set(event_target_value(&ev))
                                />
                                {move || {
                                    title_error
                                        .get()
                                        .map(|message| view! { <span class="field-error">{message}</span> })
                                }}
                            </div>
                            <div class="form-field">
                                <label>"Category"</label>
                                <select
                                    prop:value=move || category_id.get()
                                    on:change=move |ev| set_category_id.set(event_target_value(&ev))
                                >
                                    <option value="">"No category"</option>
                                    {move || {
                                        categories
                                            .get()
                                            .into_iter()
                                            .map(|c| {
                                                view! { <option value=c.id.clone()>{c.name.clone()}</option> }
                                            })
                                            .collect_view()
                                    }}
                                </select>
                            </div>
                            <div class="form-field">
                                <label>"Location"</label>
                                <input
                                    type="text"
                                    prop:value=move || location.get()
                                    on:input=move |ev| set_location.set(event_target_value(&ev))
                                />
                            </div>
                            <div class="form-field">
                                <label>"Date"</label>
                                <input
                                    type="date"
                                    prop:value=move || start_date.get()
                                    on:change=move |ev| set_start_date.set(event_target_value(&ev))
                                />
                            </div>
                            <div class="form-field">
                                <label>"Status"</label>
                                <select
                                    prop:value=move || status.get()
                                    on:change=move |ev| set_status.set(event_target_value(&ev))
                                >
                                    <option value="draft">"Draft"</option>
                                    <option value="published">"Published"</option>
                                </select>
                            </div>
                            <div class="form-actions">
                                <button type="submit" class="btn primary" disabled=move || saving.get()>
                                    {move || if saving.get() { "Saving..." } else { "Save" }}
                                </button>
                            </div>
                        </form>
                    </div>
                </div>
            }
        })}
    }
}
