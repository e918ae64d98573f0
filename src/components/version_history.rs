//! Version History Overlay
//!
//! Version list and audit trail for a package, with restore. Fetches its
//! own data keyed by the package id and discards it on close.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::context::use_app_context;
use crate::models::{AuditEntry, VersionEntry};

#[derive(Clone, Copy, PartialEq, Eq)]
enum HistoryTab {
    Versions,
    Audit,
}

#[component]
pub fn VersionHistoryOverlay(
    package_id: ReadSignal<Option<String>>,
    set_package_id: WriteSignal<Option<String>>,
    #[prop(into)] on_restored: Callback<()>,
) -> impl IntoView {
    let ctx = use_app_context();

    let (tab, set_tab) = signal(HistoryTab::Versions);
    let (versions, set_versions) = signal(Vec::<VersionEntry>::new());
    let (audit, set_audit) = signal(Vec::<AuditEntry>::new());
    let (error, set_error) = signal(None::<String>);
    let (pending_restore, set_pending_restore) = signal(None::<u32>);

    Effect::new(move |_| {
        set_tab.set(HistoryTab::Versions);
        set_versions.set(Vec::new());
        set_audit.set(Vec::new());
        set_error.set(None);
        set_pending_restore.set(None);
        if let Some(id) = package_id.get() {
            spawn_local(async move {
                match api::package_version_history(&id).await {
                    Ok(loaded) => set_versions.set(loaded),
                    Err(err) => set_error.set(Some(err.to_string())),
                }
                match api::package_audit_trail(&id).await {
                    Ok(loaded) => set_audit.set(loaded),
                    Err(err) => {
                        web_sys::console::error_1(
                            &format!("[VersionHistory] audit trail failed: {}", err).into(),
                        );
                    }
                }
            });
        }
    });

    let restore = move |version: u32| {
        let Some(id) = package_id.get_untracked() else {
            return;
        };
        set_pending_restore.set(None);
        spawn_local(async move {
            match api::restore_package_version(&id, version).await {
                Ok(package) => {
                    ctx.toast_success(format!(
                        "Restored \"{}\" to v{}",
                        package.name, version
                    ));
                    set_package_id.set(None);
                    on_restored.run(());
                }
                Err(err) => ctx.toast_error(format!("Restore failed: {}", err)),
            }
        });
    };

    view! {
        {move || package_id.get().map(|_| view! {
            <div class="modal-overlay">
                <div class="modal history-modal">
                    <div class="modal-header">
                        <span class="modal-title">"Version History"</span>
                        <button class="close-btn" on:click=move |_| set_package_id.set(None)>
                            "×"
                        </button>
                    </div>

                    <div class="tab-bar">
                        <button
                            class=move || {
                                if tab.get() == HistoryTab::Versions { "tab active" } else { "tab" }
                            }
                            on:click=move |_| set_tab.set(HistoryTab::Versions)
                        >
                            "Versions"
                        </button>
                        <button
                            class=move || {
                                if tab.get() == HistoryTab::Audit { "tab active" } else { "tab" }
                            }
                            on:click=move |_| set_tab.set(HistoryTab::Audit)
                        >
                            "Audit trail"
                        </button>
                    </div>

                    {move || {
                        error
                            .get()
                            .map(|message| view! {
                                <div class="error-panel">
                                    <span class="error-message">{message}</span>
                                </div>
                            })
                    }}

                    {move || match tab.get() {
                        HistoryTab::Versions => view! {
                            <div class="version-list">
                                <For
                                    each=move || versions.get()
                                    key=|entry| entry.version
                                    children=move |entry| {
                                        let version = entry.version;
                                        let created = entry
                                            .created_at
                                            .map(|d| d.format("%Y-%m-%d %H:%M").to_string())
                                            .unwrap_or_default();
                                        let is_pending = move || {
                                            pending_restore.get() == Some(version)
                                        };
                                        view! {
                                            <div class="version-row">
                                                <span class="version-label">{format!("v{}", version)}</span>
                                                <span class="version-meta">
                                                    {entry.modified_by.clone().unwrap_or_default()}
                                                </span>
                                                <span class="version-meta">{created}</span>
                                                <span class="version-note">
                                                    {entry.change_note.clone().unwrap_or_default()}
                                                </span>
                                                <Show when=move || !is_pending()>
                                                    <button
                                                        class="btn small"
                                                        on:click=move |_| set_pending_restore.set(Some(version))
                                                    >
                                                        "Restore"
                                                    </button>
                                                </Show>
                                                <Show when=is_pending>
                                                    <span class="restore-confirm">
                                                        <span>"Restore?"</span>
                                                        <button
                                                            class="btn small danger"
                                                            on:click=move |_| restore(version)
                                                        >
                                                            "✓"
                                                        </button>
                                                        <button
                                                            class="btn small"
                                                            on:click=move |_| set_pending_restore.set(None)
                                                        >
                                                            "✗"
                                                        </button>
                                                    </span>
                                                </Show>
                                            </div>
                                        }
                                    }
                                />
                            </div>
                        }
                        .into_any(),
                        HistoryTab::Audit => view! {
                            <table class="data-table">
                                <thead>
                                    <tr>
                                        <th>"Action"</th>
                                        <th>"User"</th>
                                        <th>"Details"</th>
                                        <th>"When"</th>
                                    </tr>
                                </thead>
                                <tbody>
                                    {move || {
                                        audit
                                            .get()
                                            .iter()
                                            .map(|entry| {
                                                let when = entry
                                                    .timestamp
                                                    .map(|d| d.format("%Y-%m-%d %H:%M").to_string())
                                                    .unwrap_or_default();
                                                view! {
                                                    <tr>
                                                        <td>{entry.action.clone()}</td>
                                                        <td>{entry.user.clone().unwrap_or_default()}</td>
                                                        <td>{entry.details.clone().unwrap_or_default()}</td>
                                                        <td>{when}</td>
                                                    </tr>
                                                }
                                            })
                                            .collect_view()
                                    }}
                                </tbody>
                            </table>
                        }
                        .into_any(),
                    }}
                </div>
            </div>
        })}
    }
}
