//! Super Offer Package Manager
//!
//! Package list with edit, price-calculator and version-history overlays.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::components::error_panel::ErrorPanel;
use crate::components::package_form::{PackageEdit, PackageForm};
use crate::components::price_calculator::PriceCalculator;
use crate::components::version_history::VersionHistoryOverlay;
use crate::models::SuperOfferPackage;

#[component]
pub fn PackageManager() -> impl IntoView {
    let (packages, set_packages) = signal(Vec::<SuperOfferPackage>::new());
    let (reload, set_reload) = signal(0u32);
    let (loading, set_loading) = signal(false);
    let (error, set_error) = signal(None::<String>);
    let (editing, set_editing) = signal(None::<PackageEdit>);
    let (calculating, set_calculating) = signal(None::<SuperOfferPackage>);
    let (history_id, set_history_id) = signal(None::<String>);

    Effect::new(move |_| {
        let _ = reload.get();
        set_loading.set(true);
        spawn_local(async move {
            match api::list_packages().await {
                Ok(loaded) => {
                    set_packages.set(loaded);
                    set_error.set(None);
                }
                Err(err) => set_error.set(Some(err.to_string())),
            }
            set_loading.set(false);
        });
    });

    view! {
        <section class="manager package-manager">
            <header class="manager-header">
                <h2>"Super Offer Packages"</h2>
                <button class="btn primary" on:click=move |_| set_editing.set(Some(PackageEdit::New))>
                    "New Package"
                </button>
            </header>

            <ErrorPanel message=error on_retry=move |_: ()| set_reload.update(|r| *r += 1) />

            <Show when=move || loading.get()>
                <div class="loading">"Loading..."</div>
            </Show>

            <table class="data-table">
                <thead>
                    <tr>
                        <th>"Name"</th>
                        <th>"Destinations"</th>
                        <th>"Status"</th>
                        <th>"Currency"</th>
                        <th>"Version"</th>
                        <th>"Actions"</th>
                    </tr>
                </thead>
                <tbody>
                    <For
                        each=move || packages.get()
                        key=|package| package.id.clone()
                        children=move |package| {
                            let edit_target = package.clone();
                            let calc_target = package.clone();
                            let history_target = package.id.clone();
                            view! {
                                <tr>
                                    <td>{package.name.clone()}</td>
                                    <td>{package.destinations.join(", ")}</td>
                                    <td>
                                        <span class=format!("status-badge {}", package.status)>
                                            {package.status.clone()}
                                        </span>
                                    </td>
                                    <td>{package.currency.clone()}</td>
                                    <td>{format!("v{}", package.version)}</td>
                                    <td class="row-actions">
                                        <button
                                            class="btn small"
                                            on:click=move |_| {
                                                set_editing
                                                    .set(Some(PackageEdit::Existing(edit_target.clone())))
                                            }
                                        >
                                            "Edit"
                                        </button>
                                        <button
                                            class="btn small"
                                            on:click=move |_| set_calculating.set(Some(calc_target.clone()))
                                        >
                                            "Price"
                                        </button>
                                        <button
                                            class="btn small"
                                            on:click=move |_| set_history_id.set(Some(history_target.clone()))
                                        >
                                            "History"
                                        </button>
                                    </td>
                                </tr>
                            }
                        }
                    />
                </tbody>
            </table>

            <PackageForm
                editing=editing
                set_editing=set_editing
                on_saved=move |_: ()| set_reload.update(|r| *r += 1)
            />

            <PriceCalculator package=calculating set_package=set_calculating />

            <VersionHistoryOverlay
                package_id=history_id
                set_package_id=set_history_id
                on_restored=move |_: ()| set_reload.update(|r| *r += 1)
            />
        </section>
    }
}
