//! Request and response payloads for the `/auth/*` endpoints. Requests borrow
//! from the session draft and carry passwords, so they deliberately do not
//! implement `Debug`.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Reads an optional text field leniently: strings pass through, numbers and
/// booleans are rendered as text, anything else counts as absent.
fn lenient_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::String(text)) => Some(text),
        Some(Value::Number(number)) => Some(number.to_string()),
        Some(Value::Bool(flag)) => Some(flag.to_string()),
        _ => None,
    })
}

#[derive(Serialize)]
pub struct SignupRequest<'a> {
    pub name: &'a str,
    pub email: &'a str,
    pub password: &'a str,
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct SignupResponse {
    #[serde(default, deserialize_with = "lenient_text")]
    pub message: Option<String>,
}

#[derive(Serialize)]
pub struct LoginRequest<'a> {
    pub email: &'a str,
    pub password: &'a str,
}

#[derive(Clone, Default, Deserialize)]
pub struct LoginResponse {
    #[serde(default, deserialize_with = "lenient_text")]
    pub token: Option<String>,
}

#[derive(Serialize)]
pub struct ForgotRequest<'a> {
    pub email: &'a str,
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct ForgotResponse {
    #[serde(default, deserialize_with = "lenient_text")]
    pub message: Option<String>,
    /// Reset code echoed back by demo backends.
    #[serde(default, deserialize_with = "lenient_text")]
    pub token: Option<String>,
}

#[derive(Serialize)]
pub struct ResetRequest<'a> {
    pub email: &'a str,
    pub code: &'a str,
    pub new_password: &'a str,
}

/// Reset carries nothing the client reads; any JSON object is accepted.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct ResetResponse {}
