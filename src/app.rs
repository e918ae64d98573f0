//! Admin App Shell
//!
//! Section tab bar plus the active screen. Every screen owns its data
//! for the lifetime of its mount; nothing is cached across sections.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::components::{
    ActivitiesUpload, ContentGenerator, DestinationManager, EnquiriesManager, EventsManager,
    PackageManager, QuoteMonitoring, QuoteSearch, ToastHost,
};
use crate::context::AppContext;
use crate::store::AppState;

#[derive(Clone, Copy, PartialEq, Eq)]
enum Section {
    Destinations,
    ContentGenerator,
    Events,
    Enquiries,
    Quotes,
    Monitoring,
    Packages,
    Activities,
}

const SECTIONS: &[(Section, &str)] = &[
    (Section::Destinations, "Destinations"),
    (Section::ContentGenerator, "Content"),
    (Section::Events, "Events"),
    (Section::Enquiries, "Enquiries"),
    (Section::Quotes, "Quotes"),
    (Section::Monitoring, "Monitoring"),
    (Section::Packages, "Packages"),
    (Section::Activities, "Activities"),
];

#[component]
pub fn App() -> impl IntoView {
    let store = Store::new(AppState::default());
    provide_context(store);
    provide_context(AppContext::new(store));

    let (section, set_section) = signal(Section::Destinations);

    view! {
        <div class="app-layout">
            <nav class="section-tab-bar">
                {SECTIONS
                    .iter()
                    .map(|(value, label)| {
                        let value = *value;
                        view! {
                            <button
                                class=move || {
                                    if section.get() == value { "section-tab active" } else { "section-tab" }
                                }
                                on:click=move |_| set_section.set(value)
                            >
                                {*label}
                            </button>
                        }
                    })
                    .collect_view()}
            </nav>

            <main class="main-content">
                {move || match section.get() {
                    Section::Destinations => view! { <DestinationManager /> }.into_any(),
                    Section::ContentGenerator => view! { <ContentGenerator /> }.into_any(),
                    Section::Events => view! { <EventsManager /> }.into_any(),
                    Section::Enquiries => view! { <EnquiriesManager /> }.into_any(),
                    Section::Quotes => view! { <QuoteSearch /> }.into_any(),
                    Section::Monitoring => view! { <QuoteMonitoring /> }.into_any(),
                    Section::Packages => view! { <PackageManager /> }.into_any(),
                    Section::Activities => view! { <ActivitiesUpload /> }.into_any(),
                }}
            </main>

            <ToastHost />
        </div>
    }
}
