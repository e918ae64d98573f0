//! Query Controller
//!
//! Leptos glue for the shared list-screen state: holds the query record,
//! debounces free-text search, and hands out sequence numbers so a stale
//! response can never overwrite a newer one. One controller per list
//! screen; the screen's fetch effect tracks `version()` and refetches
//! whenever it changes.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use query_state::{QueryState, RequestSeq};

/// Free-text search settles for this long before a fetch fires
pub const SEARCH_DEBOUNCE_MS: u32 = 400;

#[derive(Clone, Copy)]
pub struct QueryController {
    query: RwSignal<QueryState>,
    version: RwSignal<u64>,
    search_input: RwSignal<String>,
    search_epoch: StoredValue<u64>,
    seq: StoredValue<RequestSeq>,
}

pub fn use_query_controller(limit: u32) -> QueryController {
    QueryController {
        query: RwSignal::new(QueryState::new(limit)),
        version: RwSignal::new(0),
        search_input: RwSignal::new(String::new()),
        search_epoch: StoredValue::new(0),
        seq: StoredValue::new(RequestSeq::default()),
    }
}

impl QueryController {
    /// Reactive read of the query record (for pagination, sort markers)
    pub fn query(&self) -> QueryState {
        self.query.get()
    }

    /// Snapshot for fetch effects: reading it must not retrigger the effect
    pub fn query_untracked(&self) -> QueryState {
        self.query.get_untracked()
    }

    /// Tracked by fetch effects; bumped whenever a refetch is due
    pub fn version(&self) -> u64 {
        self.version.get()
    }

    pub fn refetch(&self) {
        self.version.update(|v| *v += 1);
    }

    /// Non-search filters apply immediately and reset to page 1
    pub fn set_filter(&self, name: &str, value: &str) {
        self.query.update(|q| q.set_filter(name, value));
        self.refetch();
    }

    pub fn set_page(&self, page: u32) {
        self.query.update(|q| q.set_page(page));
        self.refetch();
    }

    pub fn toggle_sort(&self, field: &str) {
        self.query.update(|q| q.toggle_sort(field));
        self.refetch();
    }

    /// Recorded from the response; deliberately does not bump `version`
    pub fn set_total(&self, total: u32) {
        self.query.update(|q| q.set_total(total));
    }

    /// Raw value for the search input box
    pub fn search(&self) -> String {
        self.search_input.get()
    }

    /// Debounced search: each keystroke bumps the epoch, and only the task
    /// holding the latest epoch applies the filter. At most one fetch per
    /// settled input.
    pub fn set_search(&self, value: String) {
        self.search_input.set(value.clone());
        let epoch = self.search_epoch.with_value(|e| e + 1);
        self.search_epoch.set_value(epoch);
        let ctrl = *self;
        spawn_local(async move {
            TimeoutFuture::new(SEARCH_DEBOUNCE_MS).await;
            if ctrl.search_epoch.get_value() == epoch {
                ctrl.set_filter("search", value.trim());
            }
        });
    }

    /// Sequence number for an outgoing fetch
    pub fn begin_request(&self) -> u64 {
        let mut seq = 0;
        self.seq.update_value(|s| seq = s.begin());
        seq
    }

    /// True if this response is the newest seen; stale ones are dropped
    pub fn try_apply(&self, seq: u64) -> bool {
        let mut apply = false;
        self.seq.update_value(|s| apply = s.try_apply(seq));
        apply
    }
}
