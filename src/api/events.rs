//! Event and Event-Category Endpoints

use serde::Serialize;

use super::{delete_json, get_json, post_json, put_json, ApiError};
use crate::models::{
    Ack, EventCategory, EventCategoryListResponse, EventDraft, EventItem, EventListResponse,
};

#[derive(Serialize)]
struct CategoryArgs<'a> {
    name: &'a str,
    description: &'a str,
}

pub async fn list_event_categories() -> Result<Vec<EventCategory>, ApiError> {
    let resp: EventCategoryListResponse = get_json("events/categories").await?;
    Ok(resp.categories)
}

pub async fn create_event_category(name: &str, description: &str) -> Result<EventCategory, ApiError> {
    post_json("events/categories", &CategoryArgs { name, description }).await
}

pub async fn update_event_category(
    id: &str,
    name: &str,
    description: &str,
) -> Result<EventCategory, ApiError> {
    put_json(
        &format!("events/categories/{}", id),
        &CategoryArgs { name, description },
    )
    .await
}

pub async fn delete_event_category(id: &str) -> Result<Ack, ApiError> {
    delete_json(&format!("events/categories/{}", id)).await
}

pub async fn list_events() -> Result<Vec<EventItem>, ApiError> {
    let resp: EventListResponse = get_json("events").await?;
    Ok(resp.events)
}

pub async fn create_event(draft: &EventDraft) -> Result<EventItem, ApiError> {
    post_json("events", draft).await
}

pub async fn update_event(id: &str, draft: &EventDraft) -> Result<EventItem, ApiError> {
    put_json(&format!("events/{}", id), draft).await
}
