//! Frontend Models
//!
//! Data structures matching the admin API's JSON (camelCase on the wire).

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// ========================
// Destinations
// ========================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Destination {
    pub id: String,
    pub name: String,
    pub country: String,
    #[serde(default)]
    pub region: String,
    pub status: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub featured: bool,
    #[serde(default)]
    pub activity_count: u32,
    pub updated_at: Option<DateTime<Utc>>,
}

/// Dropdown values the list endpoint derives from the full data set
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterOptions {
    #[serde(default)]
    pub countries: Vec<String>,
    #[serde(default)]
    pub regions: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DestinationListResponse {
    pub destinations: Vec<Destination>,
    pub total: u32,
    pub filter_options: Option<FilterOptions>,
}

#[derive(Debug, Clone, Serialize, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DestinationDraft {
    pub name: String,
    pub country: String,
    pub region: String,
    pub status: String,
    pub description: String,
    pub featured: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct BulkActionResponse {
    pub count: u32,
}

/// Generic `{success: true}` acknowledgement
#[derive(Debug, Clone, Deserialize)]
pub struct Ack {
    #[serde(default)]
    pub success: bool,
}

// ========================
// Events
// ========================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventCategory {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub event_count: u32,
}

#[derive(Debug, Clone, Deserialize)]
pub struct EventCategoryListResponse {
    pub categories: Vec<EventCategory>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventItem {
    pub id: String,
    pub title: String,
    pub category_id: Option<String>,
    #[serde(default)]
    pub location: String,
    pub start_date: Option<String>,
    pub status: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct EventListResponse {
    pub events: Vec<EventItem>,
}

#[derive(Debug, Clone, Serialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct EventDraft {
    pub title: String,
    pub category_id: Option<String>,
    pub location: String,
    pub start_date: String,
    pub status: String,
}

// ========================
// Enquiries
// ========================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Enquiry {
    pub id: String,
    pub name: String,
    pub email: String,
    pub status: String,
    #[serde(default)]
    pub has_quotes: bool,
    #[serde(default)]
    pub quote_count: u32,
    pub message: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct EnquiryListResponse {
    pub enquiries: Vec<Enquiry>,
    pub total: u32,
}

// ========================
// Quotes
// ========================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Quote {
    pub id: String,
    pub reference: String,
    pub customer_name: String,
    #[serde(default)]
    pub destination: String,
    pub status: String,
    pub total_amount: f64,
    pub currency: String,
    pub created_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct QuoteSearchResponse {
    pub quotes: Vec<Quote>,
    pub total: u32,
}

#[derive(Debug, Clone, Serialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct QuoteDraft {
    pub total_amount: f64,
    pub currency: String,
    pub notes: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct EmailPreview {
    pub subject: String,
    pub html: String,
}

// ========================
// Monitoring
// ========================

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusCount {
    pub status: String,
    pub count: u32,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonitoringOverview {
    pub total_quotes: u32,
    pub quotes_today: u32,
    pub conversion_rate: f64,
    pub average_value: f64,
    #[serde(default)]
    pub by_status: Vec<StatusCount>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmailFailure {
    pub recipient: String,
    pub error: String,
    pub timestamp: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmailDeliveryStats {
    pub sent: u32,
    pub delivered: u32,
    pub failed: u32,
    pub pending: u32,
    #[serde(default)]
    pub recent_failures: Vec<EmailFailure>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonitoredError {
    pub code: String,
    pub message: String,
    pub count: u32,
    pub last_seen: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorMonitoring {
    #[serde(rename = "errorCount24h")]
    pub error_count_24h: u32,
    #[serde(default)]
    pub recent_errors: Vec<MonitoredError>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ClearCacheResponse {
    pub success: bool,
    pub message: Option<String>,
}

// ========================
// Super offer packages
// ========================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PricePeriod {
    pub period: String,
    pub price_per_person: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PricingTier {
    pub label: String,
    pub min_people: u32,
    pub max_people: u32,
    #[serde(default)]
    pub periods: Vec<PricePeriod>,
}

impl Default for PricingTier {
    fn default() -> Self {
        Self {
            label: String::new(),
            min_people: 2,
            max_people: 4,
            periods: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SuperOfferPackage {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub destinations: Vec<String>,
    pub status: String,
    pub currency: String,
    #[serde(default)]
    pub pricing_tiers: Vec<PricingTier>,
    #[serde(default)]
    pub inclusions: Vec<String>,
    #[serde(default)]
    pub version: u32,
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PackageListResponse {
    pub packages: Vec<SuperOfferPackage>,
}

#[derive(Debug, Clone, Serialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct PackageDraft {
    pub name: String,
    pub destinations: Vec<String>,
    pub status: String,
    pub currency: String,
    pub pricing_tiers: Vec<PricingTier>,
    pub inclusions: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceCalcRequest {
    pub package_id: String,
    pub number_of_people: u32,
    pub number_of_nights: u32,
    pub arrival_date: String,
}

/// The server returns either a numeric price or the literal `"ON_REQUEST"`
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum PriceQuote {
    Amount(f64),
    Marker(String),
}

impl PriceQuote {
    pub fn is_on_request(&self) -> bool {
        matches!(self, PriceQuote::Marker(m) if m == "ON_REQUEST")
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceCalcResponse {
    pub price: PriceQuote,
    pub tier: Option<String>,
    pub period: Option<String>,
    #[serde(default)]
    pub nights: u32,
    #[serde(default)]
    pub currency: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VersionEntry {
    pub version: u32,
    pub modified_by: Option<String>,
    pub change_note: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct VersionHistoryResponse {
    pub versions: Vec<VersionEntry>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuditEntry {
    pub action: String,
    pub user: Option<String>,
    pub details: Option<String>,
    pub timestamp: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AuditTrailResponse {
    pub entries: Vec<AuditEntry>,
}

// ========================
// AI content generation
// ========================

#[derive(Debug, Clone, Serialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentRequest {
    pub destination_name: String,
    pub country: String,
    pub region: String,
    pub sections: Vec<String>,
    pub target_audience: String,
    pub content_tone: String,
    pub content_length: String,
    pub provider: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_prompt: Option<String>,
    pub batch_mode: bool,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedSection {
    pub title: String,
    pub content: String,
    #[serde(default)]
    pub highlights: Vec<String>,
    #[serde(default)]
    pub tips: Vec<String>,
}

/// Batch generation can partially fail: sections that worked land in
/// `content`, the rest in `errors` keyed by section name.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentResponse {
    pub success: bool,
    #[serde(default)]
    pub content: BTreeMap<String, GeneratedSection>,
    #[serde(default)]
    pub errors: BTreeMap<String, String>,
}

// ========================
// Activity CSV upload
// ========================

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadSummary {
    pub total_rows: u32,
    pub valid_rows: u32,
    pub error_rows: u32,
    pub created: u32,
    pub updated: u32,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadRowError {
    pub row: u32,
    pub message: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadData {
    pub summary: UploadSummary,
    #[serde(default)]
    pub errors: Vec<UploadRowError>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UploadResponse {
    pub success: bool,
    pub data: UploadData,
}
