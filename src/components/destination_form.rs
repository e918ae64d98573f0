//! Destination Form
//!
//! Create/edit overlay with field-level validation. Validators run on
//! blur and again on submit; the request is blocked while any error is
//! present, and server-side field errors merge into the same map.

use leptos::prelude::*;
use leptos::task::spawn_local;
use query_state::FieldErrors;

use crate::api;
use crate::context::use_app_context;
use crate::models::{Destination, DestinationDraft};

#[derive(Clone, PartialEq)]
pub enum DestinationEdit {
    New,
    Existing(Destination),
}

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub(crate) enum Field {
    Name,
    Country,
    Status,
}

impl Field {
    pub(crate) const ALL: &'static [Field] = &[Field::Name, Field::Country, Field::Status];

    /// Maps server validation detail keys onto form fields
    pub(crate) fn from_name(name: &str) -> Option<Field> {
        match name {
            "name" => Some(Field::Name),
            "country" => Some(Field::Country),
            "status" => Some(Field::Status),
            _ => None,
        }
    }
}

const STATUSES: &[&str] = &["draft", "published", "archived"];

pub(crate) fn validate(field: Field, value: &str) -> Option<String> {
    match field {
        Field::Name => {
            let value = value.trim();
            if value.is_empty() {
                Some("Name is required".to_string())
            } else if value.len() > 120 {
                Some("Name must be 120 characters or fewer".to_string())
            } else {
                None
            }
        }
        Field::Country => {
            if value.trim().is_empty() {
                Some("Country is required".to_string())
            } else {
                None
            }
        }
        Field::Status => {
            if STATUSES.contains(&value) {
                None
            } else {
                Some("Status must be draft, published or archived".to_string())
            }
        }
    }
}

#[component]
pub fn DestinationForm(
    editing: ReadSignal<Option<DestinationEdit>>,
    set_editing: WriteSignal<Option<DestinationEdit>>,
    #[prop(into)] on_saved: Callback<()>,
) -> impl IntoView {
    let ctx = use_app_context();

    let (name, set_name) = signal(String::new());
    let (country, set_country) = signal(String::new());
    let (region, set_region) = signal(String::new());
    let (status, set_status) = signal(String::from("draft"));
    let (description, set_description) = signal(String::new());
    let (featured, set_featured) = signal(false);
    let (errors, set_errors) = signal(FieldErrors::<Field>::new());
    let (saving, set_saving) = signal(false);

    // Populate fields whenever an edit target opens
    Effect::new(move |_| {
        if let Some(edit) = editing.get() {
            match edit {
                DestinationEdit::New => {
                    set_name.set(String::new());
                    set_country.set(String::new());
                    set_region.set(String::new());
                    set_status.set("draft".to_string());
                    set_description.set(String::new());
                    set_featured.set(false);
                }
                DestinationEdit::Existing(dest) => {
                    set_name.set(dest.name);
                    set_country.set(dest.country);
                    set_region.set(dest.region);
                    set_status.set(dest.status);
                    set_description.set(dest.description);
                    set_featured.set(dest.featured);
                }
            }
            set_errors.set(FieldErrors::new());
        }
    });

    let value_of = move |field: Field| match field {
        Field::Name => name.get_untracked(),
        Field::Country => country.get_untracked(),
        Field::Status => status.get_untracked(),
    };

    let validate_field = move |field: Field| {
        let error = validate(field, &value_of(field));
        set_errors.update(|errors| errors.set(field, error));
    };

    let error_for = move |field: Field| errors.get().get(field).map(str::to_string);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let mut all = FieldErrors::new();
        for field in Field::ALL {
            all.set(*field, validate(*field, &value_of(*field)));
        }
        let blocked = !all.is_empty();
        set_errors.set(all);
        if blocked {
            return;
        }

        let draft = DestinationDraft {
            name: name.get_untracked().trim().to_string(),
            country: country.get_untracked().trim().to_string(),
            region: region.get_untracked().trim().to_string(),
            status: status.get_untracked(),
            description: description.get_untracked(),
            featured: featured.get_untracked(),
        };
        let target = editing.get_untracked();
        set_saving.set(true);
        spawn_local(async move {
            let result = match &target {
                Some(DestinationEdit::Existing(dest)) => {
                    api::update_destination(&dest.id, &draft).await
                }
                _ => api::create_destination(&draft).await,
            };
            match result {
                Ok(saved) => {
                    ctx.toast_success(format!("\"{}\" saved", saved.name));
                    set_editing.set(None);
                    on_saved.run(());
                }
                Err(err) => {
                    // server field errors render exactly like local ones
                    if let Some(details) = err.field_details() {
                        set_errors.update(|errors| {
                            for (key, value) in details {
                                if let (Some(field), Some(message)) =
                                    (Field::from_name(key), value.as_str())
                                {
                                    errors.set(field, Some(message.to_string()));
                                }
                            }
                        });
                    }
                    ctx.toast_error(format!("Save failed: {}", err));
                }
            }
            set_saving.set(false);
        });
    };

    let field_error = move |field: Field| {
        error_for(field).map(|message| view! { <span class="field-error">{message}</span> })
    };

    view! {
        {move || editing.get().map(|edit| {
            let title = match edit {
                DestinationEdit::New => "New Destination",
                DestinationEdit::Existing(_) => "Edit Destination",
            };
            view! {
                <div class="modal-overlay">
                    <div class="modal form-modal">
                        <div class="modal-header">
                            <span class="modal-title">{title}</span>
                            <button class="close-btn" on:click=move |_| set_editing.set(None)>
                                "×"
                            </button>
                        </div>
                        <form class="entity-form" on:submit=on_submit>
                            <div class="form-field">
                                <label>"Name"</label>
                                <input
                                    type="text"
                                    prop:value=move || name.get()
                                    on:input=move |ev| set_name.set(event_target_value(&ev))
                                    on:blur=move |_| validate_field(Field::Name)
                                />
                                {move || field_error(Field::Name)}
                            </div>
                            <div class="form-field">
                                <label>"Country"</label>
                                <input
                                    type="text"
                                    prop:value=move || country.get()
                                    on:input=move |ev| set_country.set(event_target_value(&ev))
                                    on:blur=move |_| validate_field(Field::Country)
                                />
                                {move || field_error(Field::Country)}
                            </div>
                            <div class="form-field">
                                <label>"Region"</label>
                                <input
                                    type="text"
                                    prop:value=move || region.get()
                                    on:input=move |ev| set_region.set(event_target_value(&ev))
                                />
                            </div>
                            <div class="form-field">
                                <label>"Status"</label>
                                <select
                                    prop:value=move || status.get()
                                    on:change=move |ev| {
                                        set_status.set(event_target_value(&ev));
                                        validate_field(Field::Status);
                                    }
                                >
                                    <option value="draft">"Draft"</option>
                                    <option value="published">"Published"</option>
                                    <option value="archived">"Archived"</option>
                                </select>
                                {move || field_error(Field::Status)}
                            </div>
                            <div class="form-field">
                                <label>"Description"</label>
                                <textarea
                                    prop:value=move || description.get()
                                    on:input=move |ev| set_description.set(event_target_value(&ev))
                                ></textarea>
                            </div>
                            <div class="form-field inline">
                                <label>
                                    <input
                                        type="checkbox"
                                        prop:checked=move || featured.get()
                                        on:change=move |ev| set_featured.set(event_target_checked(&ev))
                                    />
                                    "Featured destination"
                                </label>
                            </div>
                            <div class="form-actions">
                                <button type="submit" class="btn primary" disabled=move || saving.get()>
                                    {move || if saving.get() { "Saving..." } else { "Save" }}
                                </button>
                                <button type="button" class="btn" on:click=move |_| set_editing.set(None)>
                                    "Cancel"
                                </button>
                            </div>
                        </form>
                    </div>
                </div>
            }
        })}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn required_fields() {
        assert_eq!(
            validate(Field::Name, ""),
            Some("Name is required".to_string())
        );
        assert_eq!(
            validate(Field::Name, "   "),
            Some("Name is required".to_string())
        );
        assert_eq!(validate(Field::Name, "Lisbon"), None);
        assert_eq!(
            validate(Field::Country, ""),
            Some("Country is required".to_string())
        );
        assert_eq!(validate(Field::Country, "Portugal"), None);
    }

    #[test]
    fn name_length_cap() {
        let long = "x".repeat(121);
        assert!(validate(Field::Name, &long).is_some());
        let ok = "x".repeat(120);
        assert!(validate(Field::Name, &ok).is_none());
    }

    #[test]
    fn status_must_be_known() {
        assert_eq!(validate(Field::Status, "published"), None);
        assert!(validate(Field::Status, "live").is_some());
    }

    #[test]
    fn server_keys_map_to_fields() {
        assert_eq!(Field::from_name("country"), Some(Field::Country));
        assert_eq!(Field::from_name("unknown"), None);
    }
}
