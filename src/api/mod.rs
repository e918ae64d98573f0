//! REST API Bindings
//!
//! HTTP wrappers over the admin API, organized by resource.

mod activities;
mod content;
mod destinations;
mod enquiries;
mod events;
mod monitoring;
mod packages;
mod quotes;

use reqwasm::http::{Request, Response};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use wasm_bindgen::JsValue;

pub use activities::*;
pub use content::*;
pub use destinations::*;
pub use enquiries::*;
pub use events::*;
pub use monitoring::*;
pub use packages::*;
pub use quotes::*;

const API_BASE: &str = "/api/admin";

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    #[error("network error: {0}")]
    Network(String),
    #[error("{message}")]
    Http {
        status: u16,
        message: String,
        code: Option<String>,
        details: Option<serde_json::Value>,
    },
    #[error("unexpected response: {0}")]
    Decode(String),
}

impl ApiError {
    /// Field-keyed validation details from a 4xx envelope, if any
    pub fn field_details(&self) -> Option<&serde_json::Map<String, serde_json::Value>> {
        match self {
            ApiError::Http {
                details: Some(details),
                ..
            } => details.as_object(),
            _ => None,
        }
    }
}

/// Server error envelope: `{error: {message, code, details}}`
#[derive(Deserialize)]
struct ErrorEnvelope {
    error: ErrorBody,
}

#[derive(Deserialize)]
struct ErrorBody {
    message: String,
    code: Option<String>,
    details: Option<serde_json::Value>,
}

fn url(path: &str) -> String {
    format!("{}/{}", API_BASE, path.trim_start_matches('/'))
}

async fn decode<T: DeserializeOwned>(resp: Response) -> Result<T, ApiError> {
    let status = resp.status();
    let ok = resp.ok();
    let text = resp
        .text()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    if !ok {
        if let Ok(envelope) = serde_json::from_str::<ErrorEnvelope>(&text) {
            return Err(ApiError::Http {
                status,
                message: envelope.error.message,
                code: envelope.error.code,
                details: envelope.error.details,
            });
        }
        return Err(ApiError::Http {
            status,
            message: format!("HTTP {}: {}", status, text),
            code: None,
            details: None,
        });
    }
    serde_json::from_str(&text).map_err(|e| ApiError::Decode(e.to_string()))
}

pub(crate) async fn get_json<T: DeserializeOwned>(path: &str) -> Result<T, ApiError> {
    let resp = Request::get(&url(path))
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    decode(resp).await
}

/// Raw body fetch, used by the export download
pub(crate) async fn get_text(path: &str) -> Result<String, ApiError> {
    let resp = Request::get(&url(path))
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    let status = resp.status();
    let ok = resp.ok();
    let text = resp
        .text()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    if !ok {
        return Err(ApiError::Http {
            status,
            message: format!("HTTP {}: {}", status, text),
            code: None,
            details: None,
        });
    }
    Ok(text)
}

async fn send_json<T: DeserializeOwned, B: Serialize>(
    req: Request,
    body: &B,
) -> Result<T, ApiError> {
    let payload = serde_json::to_string(body).map_err(|e| ApiError::Decode(e.to_string()))?;
    let resp = req
        .header("Content-Type", "application/json")
        .body(payload)
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    decode(resp).await
}

pub(crate) async fn post_json<T: DeserializeOwned, B: Serialize>(
    path: &str,
    body: &B,
) -> Result<T, ApiError> {
    send_json(Request::post(&url(path)), body).await
}

pub(crate) async fn put_json<T: DeserializeOwned, B: Serialize>(
    path: &str,
    body: &B,
) -> Result<T, ApiError> {
    send_json(Request::put(&url(path)), body).await
}

pub(crate) async fn delete_json<T: DeserializeOwned>(path: &str) -> Result<T, ApiError> {
    let resp = Request::delete(&url(path))
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    decode(resp).await
}

/// Multipart POST (the browser supplies the boundary)
pub(crate) async fn post_form<T: DeserializeOwned>(
    path: &str,
    form: web_sys::FormData,
) -> Result<T, ApiError> {
    let resp = Request::post(&url(path))
        .body(JsValue::from(form))
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    decode(resp).await
}
