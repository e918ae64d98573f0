//! Super Offer Package Form
//!
//! Multi-step create/edit overlay: basics, pricing tiers, inclusions,
//! review. Tiers and inclusions are edited in place by index; a package
//! always keeps at least one pricing tier.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::context::use_app_context;
use crate::models::{PackageDraft, PricePeriod, PricingTier, SuperOfferPackage};

#[derive(Clone, PartialEq)]
pub enum PackageEdit {
    New,
    Existing(SuperOfferPackage),
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum Step {
    Basics,
    Pricing,
    Inclusions,
    Review,
}

impl Step {
    fn next(self) -> Step {
        match self {
            Step::Basics => Step::Pricing,
            Step::Pricing => Step::Inclusions,
            Step::Inclusions => Step::Review,
            Step::Review => Step::Review,
        }
    }

    fn back(self) -> Step {
        match self {
            Step::Basics => Step::Basics,
            Step::Pricing => Step::Basics,
            Step::Inclusions => Step::Pricing,
            Step::Review => Step::Inclusions,
        }
    }

    fn title(self) -> &'static str {
        match self {
            Step::Basics => "Basics",
            Step::Pricing => "Pricing",
            Step::Inclusions => "Inclusions",
            Step::Review => "Review",
        }
    }
}

/// Floor of one tier: removal is refused on the last one
pub(crate) fn remove_tier(tiers: &mut Vec<PricingTier>, index: usize) -> bool {
    if tiers.len() <= 1 || index >= tiers.len() {
        return false;
    }
    tiers.remove(index);
    true
}

/// First problem in the tier table, if any
pub(crate) fn tiers_error(tiers: &[PricingTier]) -> Option<String> {
    for (index, tier) in tiers.iter().enumerate() {
        if tier.label.trim().is_empty() {
            return Some(format!("Tier {} needs a label", index + 1));
        }
        if tier.min_people == 0 || tier.min_people > tier.max_people {
            return Some(format!(
                "Tier \"{}\" has an invalid people range",
                tier.label
            ));
        }
    }
    None
}

#[component]
pub fn PackageForm(
    editing: ReadSignal<Option<PackageEdit>>,
    set_editing: WriteSignal<Option<PackageEdit>>,
    #[prop(into)] on_saved: Callback<()>,
) -> impl IntoView {
    let ctx = use_app_context();

    let (step, set_step) = signal(Step::Basics);
    let (name, set_name) = signal(String::new());
    let (status, set_status) = signal(String::from("draft"));
    let (currency, set_currency) = signal(String::from("EUR"));
    let (destinations, set_destinations) = signal(Vec::<String>::new());
    let (destination_input, set_destination_input) = signal(String::new());
    let (tiers, set_tiers) = signal(vec![PricingTier::default()]);
    let (inclusions, set_inclusions) = signal(Vec::<String>::new());
    let (inclusion_input, set_inclusion_input) = signal(String::new());
    let (step_error, set_step_error) = signal(None::<String>);
    let (saving, set_saving) = signal(false);

    Effect::new(move |_| {
        if let Some(edit) = editing.get() {
            match edit {
                PackageEdit::New => {
                    set_name.set(String::new());
                    set_status.set("draft".to_string());
                    set_currency.set("EUR".to_string());
                    set_destinations.set(Vec::new());
                    set_tiers.set(vec![PricingTier::default()]);
                    set_inclusions.set(Vec::new());
                }
                PackageEdit::Existing(package) => {
                    set_name.set(package.name);
                    set_status.set(package.status);
                    set_currency.set(package.currency);
                    set_destinations.set(package.destinations);
                    set_tiers.set(if package.pricing_tiers.is_empty() {
                        vec![PricingTier::default()]
                    } else {
                        package.pricing_tiers
                    });
                    set_inclusions.set(package.inclusions);
                }
            }
            set_step.set(Step::Basics);
            set_step_error.set(None);
            set_destination_input.set(String::new());
            set_inclusion_input.set(String::new());
        }
    });

    // Per-step gate before advancing
    let advance = move |_| {
        let current = step.get_untracked();
        let error = match current {
            Step::Basics => {
                if name.get_untracked().trim().is_empty() {
                    Some("Package name is required".to_string())
                } else if destinations.get_untracked().is_empty() {
                    Some("Add at least one destination".to_string())
                } else {
                    None
                }
            }
            Step::Pricing => tiers_error(&tiers.get_untracked()),
            _ => None,
        };
        if let Some(error) = error {
            set_step_error.set(Some(error));
            return;
        }
        set_step_error.set(None);
        set_step.set(current.next());
    };

    let add_destination = move |_| {
        let value = destination_input.get_untracked().trim().to_string();
        if value.is_empty() {
            return;
        }
        set_destinations.update(|list| {
            if !list.contains(&value) {
                list.push(value);
            }
        });
        set_destination_input.set(String::new());
    };

    let add_inclusion = move |_| {
        let value = inclusion_input.get_untracked().trim().to_string();
        if value.is_empty() {
            return;
        }
        set_inclusions.update(|list| list.push(value));
        set_inclusion_input.set(String::new());
    };

    let save = move |_| {
        let draft = PackageDraft {
            name: name.get_untracked().trim().to_string(),
            destinations: destinations.get_untracked(),
            status: status.get_untracked(),
            currency: currency.get_untracked(),
            pricing_tiers: tiers.get_untracked(),
            inclusions: inclusions.get_untracked(),
        };
        let target = editing.get_untracked();
        set_saving.set(true);
        spawn_local(async move {
            let result = match &target {
                Some(PackageEdit::Existing(package)) => {
                    api::update_package(&package.id, &draft).await
                }
                _ => api::create_package(&draft).await,
            };
            match result {
                Ok(saved) => {
                    ctx.toast_success(format!("\"{}\" saved (v{})", saved.name, saved.version));
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
                PackageEdit::New => "New Package",
                PackageEdit::Existing(_) => "Edit Package",
            };
            view! {
                <div class="modal-overlay">
                    <div class="modal form-modal wide">
                        <div class="modal-header">
                            <span class="modal-title">
                                {move || format!("{} — {}", heading, step.get().title())}
                            </span>
                            <button class="close-btn" on:click=move |_| set_editing.set(None)>
                                "×"
                            </button>
                        </div>

                        {move || match step.get() {
                            Step::Basics => view! {
                                <div class="step-body">
                                    <div class="form-field">
                                        <label>"Name"</label>
                                        <input
                                            type="text"
                                            prop:value=move || name.get()
                                            on:input=move |ev| set_name.set(event_target_value(&ev))
                                        />
                                    </div>
                                    <div class="form-row">
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
                                    </div>
                                    <div class="form-field">
                                        <label>"Destinations"</label>
                                        <div class="list-editor">
                                            {move || {
                                                destinations
                                                    .get()
                                                    .into_iter()
                                                    .enumerate()
                                                    .map(|(index, value)| {
                                                        view! {
                                                            <span class="list-chip">
                                                                {value}
                                                                <button
                                                                    class="chip-remove"
                                                                    on:click=move |_| {
                                                                        set_destinations
                                                                            .update(|list| {
                                                                                if index < list.len() {
                                                                                    list.remove(index);
                                                                                }
                                                                            })
                                                                    }
                                                                >
                                                                    "×"
                                                                </button>
                                                            </span>
                                                        }
                                                    })
                                                    .collect_view()
                                            }}
                                            <input
                                                type="text"
                                                placeholder="Add destination..."
                                                prop:value=move || destination_input.get()
                                                on:input=move |ev| {
                                                    set_destination_input.set(event_target_value(&ev))
                                                }
                                            />
                                            <button type="button" class="btn small" on:click=add_destination>
                                                "Add"
                                            </button>
                                        </div>
                                    </div>
                                </div>
                            }
                            .into_any(),
                            Step::Pricing => view! {
                                <div class="step-body">
                                    {move || {
                                        tiers
                                            .get()
                                            .into_iter()
                                            .enumerate()
                                            .map(|(index, tier)| {
                                                let remove_disabled = tiers.get().len() <= 1;
                                                view! {
                                                    <div class="tier-editor">
                                                        <div class="form-row">
                                                            <div class="form-field">
                                                                <label>"Label"</label>
                                                                <input
                                                                    type="text"
                                                                    prop:value=tier.label.clone()
                                                                    on:input=move |ev| {
                                                                        set_tiers
                                                                            .update(|tiers| {
                                                                                if let Some(t) = tiers.get_mut(index) {
                                                                                    t.label = event_target_value(&ev);
                                                                                }
                                                                            })
                                                                    }
                                                                />
                                                            </div>
                                                            <div class="form-field">
                                                                <label>"Min people"</label>
                                                                <input
                                                                    type="number"
                                                                    min="1"
                                                                    prop:value=tier.min_people
                                                                    on:input=move |ev| {
                                                                        let value = event_target_value(&ev)
                                                                            .parse()
                                                                            .unwrap_or(0);
                                                                        set_tiers
                                                                            .update(|tiers| {
                                                                                if let Some(t) = tiers.get_mut(index) {
                                                                                    t.min_people = value;
                                                                                }
                                                                            })
                                                                    }
                                                                />
                                                            </div>
                                                            <div class="form-field">
                                                                <label>"Max people"</label>
                                                                <input
                                                                    type="number"
                                                                    min="1"
                                                                    prop:value=tier.max_people
                                                                    on:input=move |ev| {
                                                                        let value = event_target_value(&ev)
                                                                            .parse()
                                                                            .unwrap_or(0);
                                                                        set_tiers
                                                                            .update(|tiers| {
                                                                                if let Some(t) = tiers.get_mut(index) {
                                                                                    t.max_people = value;
                                                                                }
                                                                            })
                                                                    }
                                                                />
                                                            </div>
                                                            <button
                                                                type="button"
                                                                class="btn small danger"
                                                                disabled=remove_disabled
                                                                on:click=move |_| {
                                                                    set_tiers.update(|tiers| {
                                                                        remove_tier(tiers, index);
                                                                    })
                                                                }
                                                            >
                                                                "Remove tier"
                                                            </button>
                                                        </div>
                                                        <div class="period-rows">
                                                            {tier
                                                                .periods
                                                                .iter()
                                                                .enumerate()
                                                                .map(|(period_index, period)| {
                                                                    view! {
                                                                        <div class="form-row">
                                                                            <input
                                                                                type="text"
                                                                                placeholder="Period (e.g. Jul-Aug)"
                                                                                prop:value=period.period.clone()
                                                                                on:input=move |ev| {
                                                                                    set_tiers
                                                                                        .update(|tiers| {
                                                                                            if let Some(p) = tiers
                                                                                                .get_mut(index)
                                                                                                .and_then(|t| t.periods.get_mut(period_index))
                                                                                            {
                                                                                                p.period = event_target_value(&ev);
                                                                                            }
                                                                                        })
                                                                                }
                                                                            />
                                                                            <input
                                                                                type="number"
                                                                                step="0.01"
                                                                                min="0"
                                                                                placeholder="Price per person"
                                                                                prop:value=period.price_per_person
                                                                                on:input=move |ev| {
                                                                                    let value = event_target_value(&ev)
                                                                                        .parse()
                                                                                        .unwrap_or(0.0);
                                                                                    set_tiers
                                                                                        .update(|tiers| {
                                                                                            if let Some(p) = tiers
                                                                                                .get_mut(index)
                                                                                                .and_then(|t| t.periods.get_mut(period_index))
                                                                                            {
                                                                                                p.price_per_person = value;
                                                                                            }
                                                                                        })
                                                                                }
                                                                            />
                                                                            <button
                                                                                type="button"
                                                                                class="btn small"
                                                                                on:click=move |_| {
                                                                                    set_tiers
                                                                                        .update(|tiers| {
                                                                                            if let Some(t) = tiers.get_mut(index) {
                                                                                                if period_index < t.periods.len() {
                                                                                                    t.periods.remove(period_index);
                                                                                                }
                                                                                            }
                                                                                        })
                                                                                }
                                                                            >
                                                                                "×"
                                                                            </button>
                                                                        </div>
                                                                    }
                                                                })
                                                                .collect_view()}
                                                            <button
                                                                type="button"
                                                                class="btn small"
                                                                on:click=move |_| {
                                                                    set_tiers
                                                                        .update(|tiers| {
                                                                            if let Some(t) = tiers.get_mut(index) {
                                                                                t.periods.push(PricePeriod {
                                                                                    period: String::new(),
                                                                                    price_per_person: 0.0,
                                                                                });
                                                                            }
                                                                        })
                                                                }
                                                            >
                                                                "Add period"
                                                            </button>
                                                        </div>
                                                    </div>
                                                }
                                            })
                                            .collect_view()
                                    }}
                                    <button
                                        type="button"
                                        class="btn"
                                        on:click=move |_| {
                                            set_tiers.update(|tiers| tiers.push(PricingTier::default()))
                                        }
                                    >
                                        "Add tier"
                                    </button>
                                </div>
                            }
                            .into_any(),
                            Step::Inclusions => view! {
                                <div class="step-body">
                                    <div class="list-editor column">
                                        {move || {
                                            inclusions
                                                .get()
                                                .into_iter()
                                                .enumerate()
                                                .map(|(index, value)| {
                                                    view! {
                                                        <div class="list-row">
                                                            <span>{value}</span>
                                                            <button
                                                                class="btn small"
                                                                on:click=move |_| {
                                                                    set_inclusions
                                                                        .update(|list| {
                                                                            if index < list.len() {
                                                                                list.remove(index);
                                                                            }
                                                                        })
                                                                }
                                                            >
                                                                "×"
                                                            </button>
                                                        </div>
                                                    }
                                                })
                                                .collect_view()
                                        }}
                                        <input
                                            type="text"
                                            placeholder="e.g. Airport transfers"
                                            prop:value=move || inclusion_input.get()
                                            on:input=move |ev| set_inclusion_input.set(event_target_value(&ev))
                                        />
                                        <button type="button" class="btn small" on:click=add_inclusion>
                                            "Add inclusion"
                                        </button>
                                    </div>
                                </div>
                            }
                            .into_any(),
                            Step::Review => view! {
                                <div class="step-body review">
                                    <p>{move || format!("Name: {}", name.get())}</p>
                                    <p>{move || format!("Status: {}", status.get())}</p>
                                    <p>{move || format!("Destinations: {}", destinations.get().join(", "))}</p>
                                    <p>{move || format!("Pricing tiers: {}", tiers.get().len())}</p>
                                    <p>{move || format!("Inclusions: {}", inclusions.get().len())}</p>
                                </div>
                            }
                            .into_any(),
                        }}

                        {move || {
                            step_error
                                .get()
                                .map(|message| view! { <span class="field-error">{message}</span> })
                        }}

                        <div class="form-actions">
                            <Show when=move || step.get() != Step::Basics>
                                <button
                                    type="button"
                                    class="btn"
                                    on:click=move |_| set_step.set(step.get_untracked().back())
                                >
                                    "Back"
                                </button>
                            </Show>
                            <Show when=move || step.get() != Step::Review>
                                <button type="button" class="btn primary" on:click=advance>
                                    "Next"
                                </button>
                            </Show>
                            <Show when=move || step.get() == Step::Review>
                                <button
                                    type="button"
                                    class="btn primary"
                                    disabled=move || saving.get()
                                    on:click=save
                                >
                                    {move || if saving.get() { "Saving..." } else { "Save Package" }}
                                </button>
                            </Show>
                        </div>
                    </div>
                </div>
            }
        })}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tier(label: &str, min: u32, max: u32) -> PricingTier {
        PricingTier {
            label: label.to_string(),
            min_people: min,
            max_people: max,
            periods: Vec::new(),
        }
    }

    #[test]
    fn last_tier_cannot_be_removed() {
        let mut tiers = vec![tier("2-4", 2, 4)];
        assert!(!remove_tier(&mut tiers, 0));
        assert_eq!(tiers.len(), 1);

        tiers.push(tier("5-8", 5, 8));
        assert!(remove_tier(&mut tiers, 0));
        assert_eq!(tiers.len(), 1);
        assert_eq!(tiers[0].label, "5-8");
    }

    #[test]
    fn out_of_range_index_is_refused() {
        let mut tiers = vec![tier("2-4", 2, 4), tier("5-8", 5, 8)];
        assert!(!remove_tier(&mut tiers, 5));
        assert_eq!(tiers.len(), 2);
    }

    #[test]
    fn tier_validation() {
        assert!(tiers_error(&[tier("2-4", 2, 4)]).is_none());
        assert!(tiers_error(&[tier("", 2, 4)]).is_some());
        assert!(tiers_error(&[tier("bad", 5, 2)]).is_some());
        assert!(tiers_error(&[tier("zero", 0, 4)]).is_some());
    }
}
