//! JSON POST helper shared by the auth client. Every call goes through
//! [`post_json`] so URL building, status handling and error-body parsing stay
//! consistent across endpoints. Request bodies may carry passwords; nothing in
//! here logs them.

use super::errors::AppError;
use serde::{Serialize, de::DeserializeOwned};
use serde_json::Value;
use tracing::{debug, instrument, warn};

/// A backend route and the message shown when it fails without a `detail`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Endpoint {
    pub path: &'static str,
    pub failure: &'static str,
}

/// Posts `body` as JSON and decodes a JSON response.
///
/// A non-success status becomes [`AppError::Http`] carrying the body's
/// `detail`, or `endpoint.failure` when the body has none.
///
/// # Errors
/// Returns `Network` on transport failure, `Http` on non-success status and
/// `Parse` when a success body does not decode into `T`.
#[instrument(skip(http, body), fields(path = endpoint.path))]
pub async fn post_json<B: Serialize + ?Sized, T: DeserializeOwned>(
    http: &reqwest::Client,
    base_url: &str,
    endpoint: &Endpoint,
    body: &B,
) -> Result<T, AppError> {
    let url = build_url(base_url, endpoint.path);

    let response = http.post(&url).json(body).send().await?;
    let status = response.status();
    debug!(status = status.as_u16(), "response received");

    let text = response.text().await?;

    if status.is_success() {
        decode_body(&text)
    } else {
        let detail = error_detail(&text).unwrap_or_else(|| endpoint.failure.to_string());
        warn!(status = status.as_u16(), "request rejected");
        Err(AppError::Http {
            status: status.as_u16(),
            detail,
        })
    }
}

/// Joins the base URL and a path with exactly one slash.
#[must_use]
pub fn build_url(base_url: &str, path: &str) -> String {
    let base = base_url.trim().trim_end_matches('/');
    let path = path.trim();

    if base.is_empty() {
        path.to_string()
    } else {
        format!("{}/{}", base, path.trim_start_matches('/'))
    }
}

/// Decodes a success body; an empty body is read as `{}`.
fn decode_body<T: DeserializeOwned>(text: &str) -> Result<T, AppError> {
    let text = if text.trim().is_empty() { "{}" } else { text };
    serde_json::from_str(text).map_err(|err| AppError::Parse(err.to_string()))
}

/// Extracts a displayable `detail` from an error body.
///
/// Accepts a plain string, or a list of validation entries with `msg` fields.
fn error_detail(text: &str) -> Option<String> {
    let value: Value = serde_json::from_str(text).ok()?;

    let detail = match value.get("detail")? {
        Value::String(detail) => detail.trim().to_string(),
        Value::Array(entries) => entries
            .iter()
            .filter_map(|entry| entry.get("msg").and_then(Value::as_str))
            .collect::<Vec<_>>()
            .join("; "),
        _ => return None,
    };

    if detail.is_empty() {
        None
    } else {
        Some(detail)
    }
}
