//! Query-State Primitives
//!
//! Framework-free state logic shared by the admin list screens: the
//! filter/sort/pagination record, row selection for bulk actions, request
//! sequencing, the single-slot notification, and field-keyed validation
//! errors. Everything here is plain Rust so it can be unit-tested without
//! a browser.

use std::collections::{BTreeMap, HashMap, HashSet};
use std::hash::Hash;

use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};
use serde::{Deserialize, Serialize};

/// Characters escaped in query-string values
const QUERY_ESCAPE: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'&')
    .add(b'+')
    .add(b'=')
    .add(b'?');

fn encode(value: &str) -> String {
    utf8_percent_encode(value, QUERY_ESCAPE).to_string()
}

// ========================
// Query state
// ========================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    Asc,
    Desc,
}

impl Direction {
    pub fn flip(self) -> Self {
        match self {
            Direction::Asc => Direction::Desc,
            Direction::Desc => Direction::Asc,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Direction::Asc => "asc",
            Direction::Desc => "desc",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sort {
    pub field: String,
    pub direction: Direction,
}

/// Filters, sort order and pagination cursor for one list screen.
///
/// Invariants: `page >= 1` at all times; changing any filter resets the
/// page back to 1.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QueryState {
    pub filters: BTreeMap<String, String>,
    pub sort: Option<Sort>,
    pub page: u32,
    pub limit: u32,
    pub total: u32,
}

impl QueryState {
    pub fn new(limit: u32) -> Self {
        Self {
            filters: BTreeMap::new(),
            sort: None,
            page: 1,
            limit: limit.max(1),
            total: 0,
        }
    }

    pub fn filter(&self, name: &str) -> &str {
        self.filters.get(name).map(String::as_str).unwrap_or("")
    }

    /// Set or clear a filter. Always resets to the first page.
    pub fn set_filter(&mut self, name: &str, value: &str) {
        if value.is_empty() {
            self.filters.remove(name);
        } else {
            self.filters.insert(name.to_string(), value.to_string());
        }
        self.page = 1;
    }

    /// First click sorts a column ascending, a second click flips it.
    /// Sorting is not a filter: the current page is preserved.
    pub fn toggle_sort(&mut self, field: &str) {
        self.sort = Some(match self.sort.take() {
            Some(sort) if sort.field == field => Sort {
                field: sort.field,
                direction: sort.direction.flip(),
            },
            _ => Sort {
                field: field.to_string(),
                direction: Direction::Asc,
            },
        });
    }

    pub fn set_page(&mut self, page: u32) {
        self.page = page.clamp(1, self.page_count().max(1));
    }

    pub fn set_total(&mut self, total: u32) {
        self.total = total;
    }

    pub fn page_count(&self) -> u32 {
        self.total.div_ceil(self.limit)
    }

    /// 1-based inclusive row range shown on the current page, `(0, 0)`
    /// when there are no results.
    pub fn showing_range(&self) -> (u32, u32) {
        if self.total == 0 {
            return (0, 0);
        }
        let start = (self.page - 1) * self.limit + 1;
        let end = (self.page * self.limit).min(self.total);
        (start, end)
    }

    /// Build the outgoing query string: page and limit first, then the
    /// sort descriptor, then filters in name order. Deterministic so a
    /// given state always produces the same request.
    pub fn query_string(&self) -> String {
        let mut parts = vec![format!("page={}", self.page), format!("limit={}", self.limit)];
        if let Some(sort) = &self.sort {
            parts.push(format!("sortField={}", encode(&sort.field)));
            parts.push(format!("sortDirection={}", sort.direction.as_str()));
        }
        for (name, value) in &self.filters {
            parts.push(format!("{}={}", name, encode(value)));
        }
        parts.join("&")
    }
}

// ========================
// Selection
// ========================

/// Row ids selected for a bulk action. Every id refers to a currently
/// loaded row; callers clear the whole set whenever the list is refetched.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Selection {
    ids: HashSet<String>,
}

impl Selection {
    pub fn contains(&self, id: &str) -> bool {
        self.ids.contains(id)
    }

    pub fn toggle(&mut self, id: &str) {
        if !self.ids.remove(id) {
            self.ids.insert(id.to_string());
        }
    }

    pub fn select_all<'a>(&mut self, ids: impl IntoIterator<Item = &'a str>) {
        self.ids = ids.into_iter().map(str::to_string).collect();
    }

    pub fn clear(&mut self) {
        self.ids.clear();
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Ids in a stable order for the request body.
    pub fn ids(&self) -> Vec<String> {
        let mut out: Vec<String> = self.ids.iter().cloned().collect();
        out.sort();
        out
    }
}

// ========================
// Request sequencing
// ========================

/// Monotonic sequence numbers for in-flight list fetches. A response is
/// applied only if its number is higher than everything applied so far,
/// so a slow early request can never overwrite a newer result.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RequestSeq {
    issued: u64,
    applied: u64,
}

impl RequestSeq {
    pub fn begin(&mut self) -> u64 {
        self.issued += 1;
        self.issued
    }

    pub fn try_apply(&mut self, seq: u64) -> bool {
        if seq > self.applied {
            self.applied = seq;
            true
        } else {
            false
        }
    }
}

// ========================
// Notification slot
// ========================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
    Info,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub kind: ToastKind,
    pub message: String,
    token: u64,
}

/// Single-owner notification slot with depth 1, latest-wins. `show`
/// returns a token; dismissing with a stale token is a no-op so a timer
/// armed for an old toast never clears a newer one.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ToastSlot {
    current: Option<Toast>,
    seq: u64,
}

impl ToastSlot {
    pub fn show(&mut self, kind: ToastKind, message: impl Into<String>) -> u64 {
        self.seq += 1;
        self.current = Some(Toast {
            kind,
            message: message.into(),
            token: self.seq,
        });
        self.seq
    }

    pub fn dismiss(&mut self, token: u64) -> bool {
        match &self.current {
            Some(toast) if toast.token == token => {
                self.current = None;
                true
            }
            _ => false,
        }
    }

    pub fn clear(&mut self) {
        self.current = None;
    }

    pub fn current(&self) -> Option<&Toast> {
        self.current.as_ref()
    }
}

// ========================
// Validation errors
// ========================

/// Per-form validation errors keyed by a field enum rather than by field
/// name strings, so match arms over fields stay exhaustive. Server-side
/// errors are merged through the same map and render identically.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldErrors<F: Copy + Eq + Hash> {
    errors: HashMap<F, String>,
}

impl<F: Copy + Eq + Hash> Default for FieldErrors<F> {
    fn default() -> Self {
        Self {
            errors: HashMap::new(),
        }
    }
}

impl<F: Copy + Eq + Hash> FieldErrors<F> {
    pub fn new() -> Self {
        Self::default()
    }

    /// `Some` stores the error, `None` clears it.
    pub fn set(&mut self, field: F, error: Option<String>) {
        match error {
            Some(message) => {
                self.errors.insert(field, message);
            }
            None => {
                self.errors.remove(&field);
            }
        }
    }

    pub fn get(&self, field: F) -> Option<&str> {
        self.errors.get(&field).map(String::as_str)
    }

    pub fn clear(&mut self) {
        self.errors.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filter_change_resets_page() {
        let mut query = QueryState::new(10);
        query.set_total(100);
        query.set_page(4);
        assert_eq!(query.page, 4);

        query.set_filter("status", "published");
        assert_eq!(query.page, 1);
        assert_eq!(query.filter("status"), "published");

        // clearing a filter also resets
        query.set_page(3);
        query.set_filter("status", "");
        assert_eq!(query.page, 1);
        assert_eq!(query.filter("status"), "");
    }

    #[test]
    fn query_string_shape() {
        let mut query = QueryState::new(10);
        query.set_filter("status", "published");
        query.set_filter("country", "Spain");
        query.set_total(25);
        query.set_page(2);

        // filters follow page/limit in name order
        assert_eq!(
            query.query_string(),
            "page=2&limit=10&country=Spain&status=published"
        );
    }

    #[test]
    fn query_string_encodes_values() {
        let mut query = QueryState::new(20);
        query.set_filter("search", "beach resort & spa");
        assert_eq!(
            query.query_string(),
            "page=1&limit=20&search=beach%20resort%20%26%20spa"
        );
    }

    #[test]
    fn query_string_includes_sort() {
        let mut query = QueryState::new(10);
        query.toggle_sort("name");
        assert_eq!(
            query.query_string(),
            "page=1&limit=10&sortField=name&sortDirection=asc"
        );
        query.toggle_sort("name");
        assert_eq!(
            query.query_string(),
            "page=1&limit=10&sortField=name&sortDirection=desc"
        );
    }

    #[test]
    fn sort_preserves_page_and_switching_column_starts_ascending() {
        let mut query = QueryState::new(10);
        query.set_total(50);
        query.set_page(3);
        query.toggle_sort("name");
        query.toggle_sort("name");
        query.toggle_sort("country");
        assert_eq!(query.page, 3);
        assert_eq!(
            query.sort,
            Some(Sort {
                field: "country".to_string(),
                direction: Direction::Asc,
            })
        );
    }

    #[test]
    fn pagination_arithmetic() {
        let mut query = QueryState::new(10);
        query.set_total(25);
        query.set_page(2);

        assert_eq!(query.page_count(), 3);
        assert_eq!(query.showing_range(), (11, 20));

        query.set_page(3);
        assert_eq!(query.showing_range(), (21, 25));
    }

    #[test]
    fn empty_result_set() {
        let query = QueryState::new(10);
        assert_eq!(query.page_count(), 0);
        assert_eq!(query.showing_range(), (0, 0));
    }

    #[test]
    fn set_page_clamps() {
        let mut query = QueryState::new(10);
        query.set_total(25);
        query.set_page(0);
        assert_eq!(query.page, 1);
        query.set_page(99);
        assert_eq!(query.page, 3);
    }

    #[test]
    fn selection_toggle_and_clear() {
        let rows = ["a", "b", "c", "d", "e"];
        let mut selection = Selection::default();
        selection.select_all(rows);
        assert_eq!(selection.len(), 5);

        selection.toggle("c");
        assert_eq!(selection.len(), rows.len() - 1);
        assert!(!selection.contains("c"));

        selection.toggle("c");
        assert!(selection.contains("c"));

        selection.clear();
        assert!(selection.is_empty());
    }

    #[test]
    fn selection_ids_are_sorted() {
        let mut selection = Selection::default();
        selection.toggle("q2");
        selection.toggle("q10");
        selection.toggle("q1");
        assert_eq!(selection.ids(), vec!["q1", "q10", "q2"]);
    }

    #[test]
    fn stale_responses_are_discarded() {
        let mut seq = RequestSeq::default();
        let first = seq.begin();
        let second = seq.begin();

        // the later request resolves first
        assert!(seq.try_apply(second));
        // the earlier one arrives afterwards and must be dropped
        assert!(!seq.try_apply(first));
        // duplicate delivery is also dropped
        assert!(!seq.try_apply(second));
    }

    #[test]
    fn toast_slot_is_latest_wins() {
        let mut slot = ToastSlot::default();
        let first = slot.show(ToastKind::Success, "saved");
        let second = slot.show(ToastKind::Error, "failed");

        // the slot only ever holds the newest toast
        assert_eq!(slot.current().map(|t| t.message.as_str()), Some("failed"));

        // the first toast's dismiss timer fires late and must not clear
        assert!(!slot.dismiss(first));
        assert!(slot.current().is_some());

        assert!(slot.dismiss(second));
        assert!(slot.current().is_none());
    }

    #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
    enum TestField {
        Name,
        Country,
    }

    #[test]
    fn field_errors_set_and_clear() {
        let mut errors = FieldErrors::new();
        assert!(errors.is_empty());

        errors.set(TestField::Name, Some("Name is required".to_string()));
        errors.set(TestField::Country, Some("Country is required".to_string()));
        assert_eq!(errors.len(), 2);
        assert_eq!(errors.get(TestField::Name), Some("Name is required"));

        errors.set(TestField::Name, None);
        assert_eq!(errors.len(), 1);
        assert!(errors.get(TestField::Name).is_none());

        errors.clear();
        assert!(errors.is_empty());
    }
}
