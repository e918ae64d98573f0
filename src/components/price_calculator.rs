//! Price Calculator Overlay
//!
//! Party size, nights and arrival date against a package's pricing
//! tiers. The server answers with a tiered price or ON_REQUEST.

use chrono::NaiveDate;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::models::{PriceCalcRequest, PriceCalcResponse, PriceQuote, SuperOfferPackage};

/// Human-readable result line
pub(crate) fn format_price(resp: &PriceCalcResponse) -> String {
    match &resp.price {
        PriceQuote::Amount(amount) => {
            format!("{} {:.2} per person", resp.currency, amount)
        }
        quote if quote.is_on_request() => "Price on request".to_string(),
        PriceQuote::Marker(other) => other.clone(),
    }
}

#[component]
pub fn PriceCalculator(
    package: ReadSignal<Option<SuperOfferPackage>>,
    set_package: WriteSignal<Option<SuperOfferPackage>>,
) -> impl IntoView {
    let (people, set_people) = signal(String::from("2"));
    let (nights, set_nights) = signal(String::from("7"));
    let (arrival, set_arrival) = signal(String::new());
    let (input_error, set_input_error) = signal(None::<String>);
    let (result, set_result) = signal(None::<PriceCalcResponse>);
    let (busy, set_busy) = signal(false);

    Effect::new(move |_| {
        if package.get().is_some() {
            set_people.set("2".to_string());
            set_nights.set("7".to_string());
            set_arrival.set(String::new());
            set_input_error.set(None);
            set_result.set(None);
        }
    });

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let Some(target) = package.get_untracked() else {
            return;
        };
        let people_count = people.get_untracked().trim().parse::<u32>().unwrap_or(0);
        let night_count = nights.get_untracked().trim().parse::<u32>().unwrap_or(0);
        let date = arrival.get_untracked();
        if people_count == 0 || night_count == 0 {
            set_input_error.set(Some("People and nights must be at least 1".to_string()));
            return;
        }
        if NaiveDate::parse_from_str(&date, "%Y-%m-%d").is_err() {
            set_input_error.set(Some("Pick an arrival date".to_string()));
            return;
        }
        set_input_error.set(None);

        let request = PriceCalcRequest {
            package_id: target.id,
            number_of_people: people_count,
            number_of_nights: night_count,
            arrival_date: date,
        };
        set_busy.set(true);
        spawn_local(async move {
            match api::calculate_price(&request).await {
                Ok(resp) => set_result.set(Some(resp)),
                Err(err) => set_input_error.set(Some(err.to_string())),
            }
            set_busy.set(false);
        });
    };

    view! {
        {move || package.get().map(|target| view! {
            <div class="modal-overlay">
                <div class="modal calculator-modal">
                    <div class="modal-header">
                        <span class="modal-title">{format!("Price: {}", target.name)}</span>
                        <button class="close-btn" on:click=move |_| set_package.set(None)>
                            "×"
                        </button>
                    </div>
                    <form class="entity-form" on:submit=on_submit>
                        <div class="form-row">
                            <div class="form-field">
                                <label>"People"</label>
                                <input
                                    type="number"
                                    min="1"
                                    prop:value=move || people.get()
                                    on:input=move |ev| set_people.set(event_target_value(&ev))
                                />
                            </div>
                            <div class="form-field">
                                <label>"Nights"</label>
                                <input
                                    type="number"
                                    min="1"
                                    prop:value=move || nights.get()
                                    on:input=move |ev| set_nights.set(event_target_value(&ev))
                                />
                            </div>
                            <div class="form-field">
                                <label>"Arrival"</label>
                                <input
                                    type="date"
                                    prop:value=move || arrival.get()
                                    on:change=move |ev| set_arrival.set(event_target_value(&ev))
                                />
                            </div>
                        </div>
                        {move || {
                            input_error
                                .get()
                                .map(|message| view! { <span class="field-error">{message}</span> })
                        }}
                        <div class="form-actions">
                            <button type="submit" class="btn primary" disabled=move || busy.get()>
                                {move || if busy.get() { "Calculating..." } else { "Calculate" }}
                            </button>
                        </div>
                    </form>

                    {move || result.get().map(|resp| {
                        let line = format_price(&resp);
                        let on_request = resp.price.is_on_request();
                        view! {
                            <div class="price-result">
                                <span class=if on_request { "price-line on-request" } else { "price-line" }>
                                    {line}
                                </span>
                                {resp.tier.clone().map(|tier| view! {
                                    <span class="price-detail">{format!("Tier: {}", tier)}</span>
                                })}
                                {resp.period.clone().map(|period| view! {
                                    <span class="price-detail">{format!("Period: {}", period)}</span>
                                })}
                                <span class="price-detail">{format!("{} nights", resp.nights)}</span>
                            </div>
                        }
                    })}
                </div>
            </div>
        })}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resp(price: PriceQuote) -> PriceCalcResponse {
        PriceCalcResponse {
            price,
            tier: Some("2-4 people".to_string()),
            period: Some("high season".to_string()),
            nights: 7,
            currency: "EUR".to_string(),
        }
    }

    #[test]
    fn formats_amounts() {
        assert_eq!(
            format_price(&resp(PriceQuote::Amount(499.5))),
            "EUR 499.50 per person"
        );
    }

    #[test]
    fn formats_on_request() {
        assert_eq!(
            format_price(&resp(PriceQuote::Marker("ON_REQUEST".to_string()))),
            "Price on request"
        );
    }
}
