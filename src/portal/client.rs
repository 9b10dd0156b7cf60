//! Client wrappers for the backend auth endpoints. One method per endpoint;
//! the per-operation failure fallbacks live next to their paths.

use super::{
    api::{Endpoint, post_json},
    config::AppConfig,
    errors::AppError,
    types::{
        ForgotRequest, ForgotResponse, LoginRequest, LoginResponse, ResetRequest, ResetResponse,
        SignupRequest, SignupResponse,
    },
};
use crate::APP_USER_AGENT;

pub const SIGNUP: Endpoint = Endpoint {
    path: "/auth/signup",
    failure: "Signup failed",
};

pub const LOGIN: Endpoint = Endpoint {
    path: "/auth/login",
    failure: "Login failed",
};

pub const FORGOT: Endpoint = Endpoint {
    path: "/auth/forgot",
    failure: "Request failed",
};

pub const RESET: Endpoint = Endpoint {
    path: "/auth/reset",
    failure: "Reset failed",
};

#[derive(Clone, Debug)]
pub struct AuthClient {
    http: reqwest::Client,
    config: AppConfig,
}

impl AuthClient {
    /// Build a client for the configured backend.
    ///
    /// # Errors
    /// Returns `AppError::Config` if the HTTP client cannot be initialized.
    pub fn new(config: AppConfig) -> Result<Self, AppError> {
        let mut builder = reqwest::Client::builder().user_agent(APP_USER_AGENT);

        if let Some(timeout) = config.request_timeout {
            builder = builder.timeout(timeout);
        }

        let http = builder
            .build()
            .map_err(|err| AppError::Config(format!("Failed to build HTTP client: {err}")))?;

        Ok(Self { http, config })
    }

    #[must_use]
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Creates an account.
    ///
    /// # Errors
    /// See [`post_json`].
    pub async fn signup(&self, request: &SignupRequest<'_>) -> Result<SignupResponse, AppError> {
        post_json(&self.http, &self.config.backend_url, &SIGNUP, request).await
    }

    /// Exchanges credentials for a token.
    ///
    /// # Errors
    /// See [`post_json`].
    pub async fn login(&self, request: &LoginRequest<'_>) -> Result<LoginResponse, AppError> {
        post_json(&self.http, &self.config.backend_url, &LOGIN, request).await
    }

    /// Requests a password reset code.
    ///
    /// # Errors
    /// See [`post_json`].
    pub async fn forgot(&self, request: &ForgotRequest<'_>) -> Result<ForgotResponse, AppError> {
        post_json(&self.http, &self.config.backend_url, &FORGOT, request).await
    }

    /// Sets a new password using a reset code.
    ///
    /// # Errors
    /// See [`post_json`].
    pub async fn reset(&self, request: &ResetRequest<'_>) -> Result<ResetResponse, AppError> {
        post_json(&self.http, &self.config.backend_url, &RESET, request).await
    }
}
