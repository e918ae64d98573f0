//! Activities CSV Upload
//!
//! Uploads an activity CSV, retrying a bounded number of times, then
//! shows the import summary and any per-row errors.

use leptos::html;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::components::error_panel::ErrorPanel;
use crate::context::use_app_context;
use crate::models::UploadData;

const UPLOAD_ATTEMPTS: u32 = 3;

#[component]
pub fn ActivitiesUpload() -> impl IntoView {
    let ctx = use_app_context();

    let file_input: NodeRef<html::Input> = NodeRef::new();
    let (filename, set_filename) = signal(String::new());
    let (uploading, set_uploading) = signal(false);
    let (error, set_error) = signal(None::<String>);
    let (result, set_result) = signal(None::<UploadData>);

    let do_upload = move || {
        let Some(input) = file_input.get_untracked() else {
            return;
        };
        let Some(file) = input.files().and_then(|files| files.get(0)) else {
            set_error.set(Some("Choose a CSV file first".to_string()));
            return;
        };
        set_error.set(None);
        set_result.set(None);
        set_uploading.set(true);
        spawn_local(async move {
            match api::upload_activities_with_retry(&file, UPLOAD_ATTEMPTS).await {
                Ok(resp) => {
                    let summary = &resp.data.summary;
                    ctx.toast_success(format!(
                        "{} created, {} updated",
                        summary.created, summary.updated
                    ));
                    set_result.set(Some(resp.data));
                }
                Err(err) => set_error.set(Some(err.to_string())),
            }
            set_uploading.set(false);
        });
    };

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        do_upload();
    };

    view! {
        <section class="manager activities-upload">
            <header class="manager-header">
                <h2>"Activity Import"</h2>
            </header>

            <form class="upload-form" on:submit=on_submit>
                <input
                    type="file"
                    accept=".csv"
                    node_ref=file_input
                    on:change=move |ev| set_filename.set(event_target_value(&ev))
                />
                <Show when=move || !filename.get().is_empty()>
                    <span class="upload-filename">{move || filename.get()}</span>
                </Show>
                <button type="submit" class="btn primary" disabled=move || uploading.get()>
                    {move || if uploading.get() { "Uploading..." } else { "Upload CSV" }}
                </button>
            </form>

            <ErrorPanel message=error on_retry=move |_: ()| do_upload() />

            {move || result.get().map(|data| view! {
                <div class="upload-result">
                    <div class="stats-grid">
                        <div class="stat-card">
                            <span class="stat-value">{data.summary.total_rows}</span>
                            <span class="stat-label">"Rows"</span>
                        </div>
                        <div class="stat-card">
                            <span class="stat-value">{data.summary.valid_rows}</span>
                            <span class="stat-label">"Valid"</span>
                        </div>
                        <div class="stat-card">
                            <span class="stat-value">{data.summary.error_rows}</span>
                            <span class="stat-label">"With errors"</span>
                        </div>
                        <div class="stat-card">
                            <span class="stat-value">{data.summary.created}</span>
                            <span class="stat-label">"Created"</span>
                        </div>
                        <div class="stat-card">
                            <span class="stat-value">{data.summary.updated}</span>
                            <span class="stat-label">"Updated"</span>
                        </div>
                    </div>

                    {(!data.errors.is_empty())
                        .then(|| {
                            view! {
                                <table class="data-table">
                                    <thead>
                                        <tr>
                                            <th>"Row"</th>
                                            <th>"Problem"</th>
                                        </tr>
                                    </thead>
                                    <tbody>
                                        {data
                                            .errors
                                            .iter()
                                            .map(|row_error| {
                                                view! {
                                                    <tr>
                                                        <td>{row_error.row}</td>
                                                        <td>{row_error.message.clone()}</td>
                                                    </tr>
                                                }
                                            })
                                            .collect_view()}
                                    </tbody>
                                </table>
                            }
                        })}
                </div>
            })}
        </section>
    }
}
