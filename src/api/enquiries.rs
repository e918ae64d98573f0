//! Enquiry Endpoints

use serde::Serialize;

use super::{get_json, post_json, put_json, ApiError};
use crate::models::{Enquiry, EnquiryListResponse, Quote, QuoteDraft};

#[derive(Serialize)]
struct StatusArgs<'a> {
    status: &'a str,
}

pub async fn list_enquiries(query: &str) -> Result<EnquiryListResponse, ApiError> {
    get_json(&format!("enquiries?{}", query)).await
}

pub async fn update_enquiry_status(id: &str, status: &str) -> Result<Enquiry, ApiError> {
    put_json(&format!("enquiries/{}", id), &StatusArgs { status }).await
}

/// Creates a quote attached to the enquiry
pub async fn create_enquiry_quote(id: &str, draft: &QuoteDraft) -> Result<Quote, ApiError> {
    post_json(&format!("enquiries/{}/quotes", id), draft).await
}
