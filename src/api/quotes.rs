//! Quote Search, Export and Preview Endpoints

use super::{get_json, get_text, ApiError};
use crate::models::{EmailPreview, QuoteSearchResponse};

pub async fn search_quotes(query: &str) -> Result<QuoteSearchResponse, ApiError> {
    get_json(&format!("quotes/search?{}", query)).await
}

/// Returns the raw export body; `format` is `csv` or `json`
pub async fn export_quotes(format: &str, query: &str) -> Result<String, ApiError> {
    get_text(&format!("quotes/export?format={}&{}", format, query)).await
}

pub async fn quote_email_preview(id: &str) -> Result<EmailPreview, ApiError> {
    get_json(&format!("quotes/{}/email-preview", id)).await
}
