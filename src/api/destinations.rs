//! Destination Endpoints

use serde::Serialize;

use super::{delete_json, get_json, post_json, put_json, ApiError};
use crate::models::{Ack, BulkActionResponse, Destination, DestinationDraft, DestinationListResponse};

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct BulkArgs<'a> {
    action: &'a str,
    destination_ids: &'a [String],
}

/// `query` is the controller-built query string (page/limit/sort/filters)
pub async fn list_destinations(query: &str) -> Result<DestinationListResponse, ApiError> {
    get_json(&format!("destinations?{}", query)).await
}

pub async fn create_destination(draft: &DestinationDraft) -> Result<Destination, ApiError> {
    post_json("destinations", draft).await
}

pub async fn update_destination(id: &str, draft: &DestinationDraft) -> Result<Destination, ApiError> {
    put_json(&format!("destinations/{}", id), draft).await
}

/// Applies one action to every selected id in a single request
pub async fn bulk_destinations(action: &str, ids: &[String]) -> Result<BulkActionResponse, ApiError> {
    post_json(
        "destinations/bulk",
        &BulkArgs {
            action,
            destination_ids: ids,
        },
    )
    .await
}

pub async fn delete_destination(id: &str, force: bool) -> Result<Ack, ApiError> {
    if force {
        delete_json(&format!("destinations/{}?force=true", id)).await
    } else {
        delete_json(&format!("destinations/{}", id)).await
    }
}
