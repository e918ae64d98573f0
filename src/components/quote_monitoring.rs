//! Quote Monitoring Dashboard
//!
//! Overview, email-delivery and error tabs over the monitoring endpoint,
//! plus the clear-cache action.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::components::confirm_dialog::ConfirmDialog;
use crate::components::error_panel::ErrorPanel;
use crate::context::use_app_context;
use crate::models::{EmailDeliveryStats, ErrorMonitoring, MonitoringOverview};

#[derive(Clone, Copy, PartialEq, Eq)]
enum MonitorTab {
    Overview,
    EmailDelivery,
    Errors,
}

const TABS: &[(MonitorTab, &str)] = &[
    (MonitorTab::Overview, "Overview"),
    (MonitorTab::EmailDelivery, "Email delivery"),
    (MonitorTab::Errors, "Errors"),
];

#[component]
pub fn QuoteMonitoring() -> impl IntoView {
    let ctx = use_app_context();

    let (tab, set_tab) = signal(MonitorTab::Overview);
    let (reload, set_reload) = signal(0u32);
    let (overview, set_overview) = signal(None::<MonitoringOverview>);
    let (email, set_email) = signal(None::<EmailDeliveryStats>);
    let (errors, set_errors) = signal(None::<ErrorMonitoring>);
    let (loading, set_loading) = signal(false);
    let (error, set_error) = signal(None::<String>);
    let (confirm_clear, set_confirm_clear) = signal(false);

    // Each tab fetches its own slice when it becomes active
    Effect::new(move |_| {
        let _ = reload.get();
        let active = tab.get();
        set_loading.set(true);
        spawn_local(async move {
            let result = match active {
                MonitorTab::Overview => api::monitoring_overview().await.map(|data| {
                    set_overview.set(Some(data));
                }),
                MonitorTab::EmailDelivery => api::monitoring_email_delivery().await.map(|data| {
                    set_email.set(Some(data));
                }),
                MonitorTab::Errors => api::monitoring_errors().await.map(|data| {
                    set_errors.set(Some(data));
                }),
            };
            match result {
                Ok(()) => set_error.set(None),
                Err(err) => set_error.set(Some(err.to_string())),
            }
            set_loading.set(false);
        });
    });

    let clear_cache = move |_: ()| {
        set_confirm_clear.set(false);
        spawn_local(async move {
            match api::clear_monitoring_cache().await {
                Ok(resp) => {
                    let message = resp
                        .message
                        .unwrap_or_else(|| "Monitoring cache cleared".to_string());
                    ctx.toast_success(message);
                    set_reload.update(|r| *r += 1);
                }
                Err(err) => ctx.toast_error(format!("Clear cache failed: {}", err)),
            }
        });
    };

    view! {
        <section class="manager quote-monitoring">
            <header class="manager-header">
                <h2>"Quote Monitoring"</h2>
                <div class="header-actions">
                    <button class="btn" on:click=move |_| set_reload.update(|r| *r += 1)>
                        "Refresh"
                    </button>
                    <button class="btn danger" on:click=move |_| set_confirm_clear.set(true)>
                        "Clear Cache"
                    </button>
                </div>
            </header>

            <div class="tab-bar">
                {TABS
                    .iter()
                    .map(|(value, label)| {
                        let value = *value;
                        view! {
                            <button
                                class=move || {
                                    if tab.get() == value { "tab active" } else { "tab" }
                                }
                                on:click=move |_| set_tab.set(value)
                            >
                                {*label}
                            </button>
                        }
                    })
                    .collect_view()}
            </div>

            <ErrorPanel message=error on_retry=move |_: ()| set_reload.update(|r| *r += 1) />

            <Show when=move || loading.get()>
                <div class="loading">"Loading..."</div>
            </Show>

            {move || match tab.get() {
                MonitorTab::Overview => overview
                    .get()
                    .map(|data| {
                        view! {
                            <div class="stats-grid">
                                <div class="stat-card">
                                    <span class="stat-value">{data.total_quotes}</span>
                                    <span class="stat-label">"Total quotes"</span>
                                </div>
                                <div class="stat-card">
                                    <span class="stat-value">{data.quotes_today}</span>
                                    <span class="stat-label">"Today"</span>
                                </div>
                                <div class="stat-card">
                                    <span class="stat-value">
                                        {format!("{:.1}%", data.conversion_rate * 100.0)}
                                    </span>
                                    <span class="stat-label">"Conversion"</span>
                                </div>
                                <div class="stat-card">
                                    <span class="stat-value">{format!("{:.2}", data.average_value)}</span>
                                    <span class="stat-label">"Average value"</span>
                                </div>
                                <div class="status-breakdown">
                                    {data
                                        .by_status
                                        .iter()
                                        .map(|entry| {
                                            view! {
                                                <div class="status-row">
                                                    <span class=format!("status-badge {}", entry.status)>
                                                        {entry.status.clone()}
                                                    </span>
                                                    <span>{entry.count}</span>
                                                </div>
                                            }
                                        })
                                        .collect_view()}
                                </div>
                            </div>
                        }
                        .into_any()
                    })
                    .unwrap_or_else(|| view! { <div></div> }.into_any()),
                MonitorTab::EmailDelivery => email
                    .get()
                    .map(|data| {
                        view! {
                            <div class="stats-grid">
                                <div class="stat-card">
                                    <span class="stat-value">{data.sent}</span>
                                    <span class="stat-label">"Sent"</span>
                                </div>
                                <div class="stat-card">
                                    <span class="stat-value">{data.delivered}</span>
                                    <span class="stat-label">"Delivered"</span>
                                </div>
                                <div class="stat-card">
                                    <span class="stat-value">{data.failed}</span>
                                    <span class="stat-label">"Failed"</span>
                                </div>
                                <div class="stat-card">
                                    <span class="stat-value">{data.pending}</span>
                                    <span class="stat-label">"Pending"</span>
                                </div>
                                <table class="data-table">
                                    <thead>
                                        <tr>
                                            <th>"Recipient"</th>
                                            <th>"Error"</th>
                                            <th>"When"</th>
                                        </tr>
                                    </thead>
                                    <tbody>
                                        {data
                                            .recent_failures
                                            .iter()
                                            .map(|failure| {
                                                let when = failure
                                                    .timestamp
                                                    .map(|d| d.format("%Y-%m-%d %H:%M").to_string())
                                                    .unwrap_or_default();
                                                view! {
                                                    <tr>
                                                        <td>{failure.recipient.clone()}</td>
                                                        <td>{failure.error.clone()}</td>
                                                        <td>{when}</td>
                                                    </tr>
                                                }
                                            })
                                            .collect_view()}
                                    </tbody>
                                </table>
                            </div>
                        }
                        .into_any()
                    })
                    .unwrap_or_else(|| view! { <div></div> }.into_any()),
                MonitorTab::Errors => errors
                    .get()
                    .map(|data| {
                        view! {
                            <div class="stats-grid">
                                <div class="stat-card">
                                    <span class="stat-value">{data.error_count_24h}</span>
                                    <span class="stat-label">"Errors (24h)"</span>
                                </div>
                                <table class="data-table">
                                    <thead>
                                        <tr>
                                            <th>"Code"</th>
                                            <th>"Message"</th>
                                            <th>"Count"</th>
                                            <th>"Last seen"</th>
                                        </tr>
                                    </thead>
                                    <tbody>
                                        {data
                                            .recent_errors
                                            .iter()
                                            .map(|entry| {
                                                let last = entry
                                                    .last_seen
                                                    .map(|d| d.format("%Y-%m-%d %H:%M").to_string())
                                                    .unwrap_or_default();
                                                view! {
                                                    <tr>
                                                        <td>{entry.code.clone()}</td>
                                                        <td>{entry.message.clone()}</td>
                                                        <td>{entry.count}</td>
                                                        <td>{last}</td>
                                                    </tr>
                                                }
                                            })
                                            .collect_view()}
                                    </tbody>
                                </table>
                            </div>
                        }
                        .into_any()
                    })
                    .unwrap_or_else(|| view! { <div></div> }.into_any()),
            }}

            <ConfirmDialog
                prompt=Signal::derive(move || {
                    confirm_clear.get().then(|| "Clear the monitoring cache?".to_string())
                })
                on_confirm=clear_cache
                on_cancel=move |_: ()| set_confirm_clear.set(false)
            />
        </section>
    }
}
