//! Quote Monitoring Endpoints

use serde::Serialize;

use super::{get_json, post_json, ApiError};
use crate::models::{ClearCacheResponse, EmailDeliveryStats, ErrorMonitoring, MonitoringOverview};

#[derive(Serialize)]
struct ActionArgs<'a> {
    action: &'a str,
}

pub async fn monitoring_overview() -> Result<MonitoringOverview, ApiError> {
    get_json("quotes/monitoring?type=overview").await
}

pub async fn monitoring_email_delivery() -> Result<EmailDeliveryStats, ApiError> {
    get_json("quotes/monitoring?type=email-delivery").await
}

pub async fn monitoring_errors() -> Result<ErrorMonitoring, ApiError> {
    get_json("quotes/monitoring?type=error-monitoring").await
}

pub async fn clear_monitoring_cache() -> Result<ClearCacheResponse, ApiError> {
    post_json(
        "quotes/monitoring",
        &ActionArgs {
            action: "clear-cache",
        },
    )
    .await
}
