//! AI Content Generation Endpoint

use super::{post_json, ApiError};
use crate::models::{GenerateContentRequest, GenerateContentResponse};

pub async fn generate_content(
    request: &GenerateContentRequest,
) -> Result<GenerateContentResponse, ApiError> {
    post_json("destinations/generate-content", request).await
}
