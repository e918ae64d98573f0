//! AI Content Generator
//!
//! Form for AI-assisted destination content: pick sections, audience,
//! tone, length and provider, then render the generated sections —
//! including the ones that failed when a batch partially succeeds.

use std::collections::HashSet;

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::context::use_app_context;
use crate::models::{GenerateContentRequest, GenerateContentResponse};

const SECTIONS: &[(&str, &str)] = &[
    ("overview", "Overview"),
    ("attractions", "Top attractions"),
    ("activities", "Activities"),
    ("dining", "Food & dining"),
    ("travel-tips", "Travel tips"),
    ("best-time-to-visit", "Best time to visit"),
];

const AUDIENCES: &[(&str, &str)] = &[
    ("families", "Families"),
    ("couples", "Couples"),
    ("solo", "Solo travellers"),
    ("luxury", "Luxury travellers"),
];

const TONES: &[(&str, &str)] = &[
    ("informative", "Informative"),
    ("inspirational", "Inspirational"),
    ("casual", "Casual"),
];

const LENGTHS: &[(&str, &str)] = &[
    ("short", "Short"),
    ("medium", "Medium"),
    ("long", "Long"),
];

const PROVIDERS: &[(&str, &str)] = &[("openai", "OpenAI"), ("claude", "Claude")];

#[component]
pub fn ContentGenerator() -> impl IntoView {
    let ctx = use_app_context();

    let (destination_name, set_destination_name) = signal(String::new());
    let (country, set_country) = signal(String::new());
    let (region, set_region) = signal(String::new());
    let (sections, set_sections) = signal(HashSet::<String>::new());
    let (audience, set_audience) = signal(String::from("families"));
    let (tone, set_tone) = signal(String::from("informative"));
    let (length, set_length) = signal(String::from("medium"));
    let (provider, set_provider) = signal(String::from("openai"));
    let (custom_prompt, set_custom_prompt) = signal(String::new());
    let (batch_mode, set_batch_mode) = signal(false);
    let (form_error, set_form_error) = signal(None::<String>);
    let (generating, set_generating) = signal(false);
    let (result, set_result) = signal(None::<GenerateContentResponse>);

    let toggle_section = move |key: String| {
        set_sections.update(|sections| {
            if !sections.remove(&key) {
                sections.insert(key);
            }
        });
    };

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if destination_name.get_untracked().trim().is_empty() {
            set_form_error.set(Some("Destination name is required".to_string()));
            return;
        }
        if sections.get_untracked().is_empty() {
            set_form_error.set(Some("Pick at least one section".to_string()));
            return;
        }
        set_form_error.set(None);

        let mut selected: Vec<String> = sections.get_untracked().into_iter().collect();
        selected.sort();
        let prompt = custom_prompt.get_untracked();
        let request = GenerateContentRequest {
            destination_name: destination_name.get_untracked().trim().to_string(),
            country: country.get_untracked(),
            region: region.get_untracked(),
            sections: selected,
            target_audience: audience.get_untracked(),
            content_tone: tone.get_untracked(),
            content_length: length.get_untracked(),
            provider: provider.get_untracked(),
            custom_prompt: (!prompt.trim().is_empty()).then_some(prompt),
            batch_mode: batch_mode.get_untracked(),
        };
        set_generating.set(true);
        set_result.set(None);
        spawn_local(async move {
            match api::generate_content(&request).await {
                Ok(resp) => {
                    let generated = resp.content.len();
                    let failed = resp.errors.len();
                    if failed == 0 {
                        ctx.toast_success(format!("{} section(s) generated", generated));
                    } else {
                        // partial success still shows what came back
                        ctx.toast_info(format!(
                            "{} section(s) generated, {} failed",
                            generated, failed
                        ));
                    }
                    set_result.set(Some(resp));
                }
                Err(err) => ctx.toast_error(format!("Generation failed: {}", err)),
            }
            set_generating.set(false);
        });
    };

    view! {
        <section class="manager content-generator">
            <header class="manager-header">
                <h2>"Content Generator"</h2>
            </header>

            <form class="entity-form generator-form" on:submit=on_submit>
                <div class="form-row">
                    <div class="form-field">
                        <label>"Destination name"</label>
                        <input
                            type="text"
                            prop:value=move || destination_name.get()
                            on:input=move |ev| set_destination_name.set(event_target_value(&ev))
                        />
                    </div>
                    <div class="form-field">
                        <label>"Country"</label>
                        <input
                            type="text"
                            prop:value=move || country.get()
                            on:input=move |ev| set_country.set(event_target_value(&ev))
                        />
                    </div>
                    <div class="form-field">
                        <label>"Region"</label>
                        <input
                            type="text"
                            prop:value=move || region.get()
                            on:input=move |ev| set_region.set(event_target_value(&ev))
                        />
                    </div>
                </div>

                <div class="form-field">
                    <label>"Sections"</label>
                    <div class="section-checkboxes">
                        {SECTIONS
                            .iter()
                            .map(|(key, label)| {
                                let key_for_check = key.to_string();
                                let key_for_toggle = key.to_string();
                                view! {
                                    <label class="checkbox-label">
                                        <input
                                            type="checkbox"
                                            prop:checked=move || sections.get().contains(&key_for_check)
                                            on:change=move |_| toggle_section(key_for_toggle.clone())
                                        />
                                        {*label}
                                    </label>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>

                <div class="form-row">
                    <div class="form-field">
                        <label>"Audience"</label>
                        <select
                            prop:value=move || audience.get()
                            on:change=move |ev| set_audience.set(event_target_value(&ev))
                        >
                            {AUDIENCES
                                .iter()
                                .map(|(value, label)| view! { <option value=*value>{*label}</option> })
                                .collect_view()}
                        </select>
                    </div>
                    <div class="form-field">
                        <label>"Tone"</label>
                        <select
                            prop:value=move || tone.get()
                            on:change=move |ev| set_tone.set(event_target_value(&ev))
                        >
                            {TONES
                                .iter()
                                .map(|(value, label)| view! { <option value=*value>{*label}</option> })
                                .collect_view()}
                        </select>
                    </div>
                    <div class="form-field">
                        <label>"Length"</label>
                        <select
                            prop:value=move || length.get()
                            on:change=move |ev| set_length.set(event_target_value(&ev))
                        >
                            {LENGTHS
                                .iter()
                                .map(|(value, label)| view! { <option value=*value>{*label}</option> })
                                .collect_view()}
                        </select>
                    </div>
                    <div class="form-field">
                        <label>"Provider"</label>
                        <select
                            prop:value=move || provider.get()
                            on:change=move |ev| set_provider.set(event_target_value(&ev))
                        >
                            {PROVIDERS
                                .iter()
                                .map(|(value, label)| view! { <option value=*value>{*label}</option> })
                                .collect_view()}
                        </select>
                    </div>
                </div>

                <div class="form-field">
                    <label>"Custom prompt (optional)"</label>
                    <textarea
                        prop:value=move || custom_prompt.get()
                        on:input=move |ev| set_custom_prompt.set(event_target_value(&ev))
                    ></textarea>
                </div>

                <div class="form-field inline">
                    <label>
                        <input
                            type="checkbox"
                            prop:checked=move || batch_mode.get()
                            on:change=move |ev| set_batch_mode.set(event_target_checked(&ev))
                        />
                        "Batch mode (all sections in one request)"
                    </label>
                </div>

                {move || {
                    form_error
                        .get()
                        .map(|message| view! { <span class="field-error">{message}</span> })
                }}

                <div class="form-actions">
                    <button type="submit" class="btn primary" disabled=move || generating.get()>
                        {move || if generating.get() { "Generating..." } else { "Generate" }}
                    </button>
                </div>
            </form>

            {move || result.get().map(|resp| view! {
                <div class="generated-content">
                    {resp
                        .content
                        .iter()
                        .map(|(key, section)| {
                            view! {
                                <article class="generated-section" id=format!("section-{}", key)>
                                    <h3>{section.title.clone()}</h3>
                                    <p>{section.content.clone()}</p>
                                    {(!section.highlights.is_empty())
                                        .then(|| {
                                            view! {
                                                <div class="section-list">
                                                    <h4>"Highlights"</h4>
                                                    <ul>
                                                        {section
                                                            .highlights
                                                            .iter()
                                                            .map(|item| view! { <li>{item.clone()}</li> })
                                                            .collect_view()}
                                                    </ul>
                                                </div>
                                            }
                                        })}
                                    {(!section.tips.is_empty())
                                        .then(|| {
                                            view! {
                                                <div class="section-list">
                                                    <h4>"Tips"</h4>
                                                    <ul>
                                                        {section
                                                            .tips
                                                            .iter()
                                                            .map(|item| view! { <li>{item.clone()}</li> })
                                                            .collect_view()}
                                                    </ul>
                                                </div>
                                            }
                                        })}
                                </article>
                            }
                        })
                        .collect_view()}
                    {(!resp.errors.is_empty())
                        .then(|| {
                            view! {
                                <div class="generation-errors">
                                    <h4>"Failed sections"</h4>
                                    {resp
                                        .errors
                                        .iter()
                                        .map(|(key, message)| {
                                            view! {
                                                <div class="generation-error-row">
                                                    <span class="section-key">{key.clone()}</span>
                                                    <span class="field-error">{message.clone()}</span>
                                                </div>
                                            }
                                        })
                                        .collect_view()}
                                </div>
                            }
                        })}
                </div>
            })}
        </section>
    }
}
