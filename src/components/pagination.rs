//! Pagination Bar Component
//!
//! Summary text, Prev/Next and one numbered button per page.

use leptos::prelude::*;
use query_state::QueryState;

/// "Showing 11 to 20 of 25 results"
pub fn showing_text(query: &QueryState) -> String {
    if query.total == 0 {
        return "No results".to_string();
    }
    let (start, end) = query.showing_range();
    format!("Showing {} to {} of {} results", start, end, query.total)
}

#[component]
pub fn PaginationBar(
    #[prop(into)] query: Signal<QueryState>,
    #[prop(into)] on_page: Callback<u32>,
) -> impl IntoView {
    view! {
        <div class="pagination-bar">
            <span class="pagination-summary">{move || showing_text(&query.get())}</span>
            {move || {
                let q = query.get();
                let count = q.page_count();
                if count == 0 {
                    return view! { <span></span> }.into_any();
                }
                let page = q.page;
                let prev_disabled = page <= 1;
                let next_disabled = page >= count;
                view! {
                    <div class="pagination-buttons">
                        <button
                            class="page-btn"
                            disabled=prev_disabled
                            on:click=move |_| on_page.run(page - 1)
                        >
                            "Prev"
                        </button>
                        {(1..=count)
                            .map(|p| {
                                let is_current = p == page;
                                view! {
                                    <button
                                        class=if is_current { "page-btn active" } else { "page-btn" }
                                        disabled=is_current
                                        on:click=move |_| on_page.run(p)
                                    >
                                        {p}
                                    </button>
                                }
                            })
                            .collect_view()}
                        <button
                            class="page-btn"
                            disabled=next_disabled
                            on:click=move |_| on_page.run(page + 1)
                        >
                            "Next"
                        </button>
                    </div>
                }
                .into_any()
            }}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_showing_text() {
        let mut query = QueryState::new(10);
        query.set_total(25);
        query.set_page(2);
        assert_eq!(showing_text(&query), "Showing 11 to 20 of 25 results");

        query.set_page(3);
        assert_eq!(showing_text(&query), "Showing 21 to 25 of 25 results");

        query.set_total(0);
        assert_eq!(showing_text(&query), "No results");
    }
}
