//! Activity CSV Upload Endpoint

use gloo_timers::future::TimeoutFuture;

use super::{post_form, ApiError};
use crate::models::UploadResponse;

const RETRY_DELAY_MS: u32 = 800;

pub async fn upload_activities(file: &web_sys::File) -> Result<UploadResponse, ApiError> {
    let form = web_sys::FormData::new().map_err(|_| ApiError::Network("FormData".into()))?;
    form.append_with_blob("file", file)
        .map_err(|_| ApiError::Network("FormData append".into()))?;
    post_form("activities/upload", form).await
}

/// Upload with a bounded number of attempts and a growing pause between
/// them. The only automatic retry in the app.
pub async fn upload_activities_with_retry(
    file: &web_sys::File,
    attempts: u32,
) -> Result<UploadResponse, ApiError> {
    let mut last_err = ApiError::Network("upload not attempted".into());
    for attempt in 1..=attempts.max(1) {
        match upload_activities(file).await {
            Ok(resp) => return Ok(resp),
            Err(err) => {
                web_sys::console::warn_1(
                    &format!("[upload] attempt {} failed: {}", attempt, err).into(),
                );
                last_err = err;
                if attempt < attempts {
                    TimeoutFuture::new(RETRY_DELAY_MS * attempt).await;
                }
            }
        }
    }
    Err(last_err)
}
