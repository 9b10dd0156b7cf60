//! Runtime configuration for the backend endpoint. Values come from CLI flags
//! or their environment variables; nothing here is secret.

use super::errors::AppError;
use std::time::Duration;
use url::Url;

/// Backend used when neither `--backend-url` nor `EXAMPORTAL_BACKEND_URL` is set.
pub const DEFAULT_BACKEND_URL: &str = "http://localhost:8000";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppConfig {
    /// Base URL without a trailing slash.
    pub backend_url: String,
    /// Per-request timeout. `None` waits indefinitely.
    pub request_timeout: Option<Duration>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            backend_url: DEFAULT_BACKEND_URL.to_string(),
            request_timeout: None,
        }
    }
}

impl AppConfig {
    /// Build a config from a raw base URL, falling back to the default when empty.
    ///
    /// # Errors
    /// Returns `AppError::Config` if the URL does not parse or is not http(s).
    pub fn new(backend_url: &str, request_timeout: Option<Duration>) -> Result<Self, AppError> {
        let backend_url = normalize_base_url(backend_url)
            .unwrap_or_else(|| DEFAULT_BACKEND_URL.to_string());

        let parsed = Url::parse(&backend_url)
            .map_err(|err| AppError::Config(format!("Invalid backend URL {backend_url}: {err}")))?;

        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(AppError::Config(format!(
                "Unsupported backend URL scheme: {}",
                parsed.scheme()
            )));
        }

        Ok(Self {
            backend_url,
            request_timeout,
        })
    }
}

fn normalize_base_url(value: &str) -> Option<String> {
    let trimmed = value.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
