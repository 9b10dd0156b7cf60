use thiserror::Error;

/// Failures surfaced by the auth client.
///
/// `Display` yields exactly the text the user sees as the status message, so
/// variants carry no prefix.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum AppError {
    /// Invalid configuration, such as an unparseable backend URL.
    #[error("{0}")]
    Config(String),
    /// Transport failure: connection refused, DNS, TLS, timeout.
    #[error("{0}")]
    Network(String),
    /// Non-success status. `detail` is the backend's `detail` field or the
    /// per-operation fallback.
    #[error("{detail}")]
    Http { status: u16, detail: String },
    /// A success response whose body did not match the expected shape.
    #[error("{0}")]
    Parse(String),
}

impl AppError {
    /// HTTP status for `Http` errors.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Http { status, .. } => Some(*status),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            Self::Parse(err.to_string())
        } else {
            Self::Network(err.to_string())
        }
    }
}
