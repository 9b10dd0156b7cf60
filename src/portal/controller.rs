//! Drives the signup, login, forgot and reset flows.
//!
//! Every operation follows the same protocol: refuse while another request is
//! pending, mark the state pending and clear the status message, issue one
//! POST, apply the outcome, and return to idle. The idle transition is owned
//! by a drop guard so it also happens if the caller drops the future
//! mid-request.
//!
//! State is published through a `tokio::sync::watch` channel. Clones of the
//! controller share it, so a submit from one task observes a request started
//! by another.

use super::{
    client::AuthClient,
    errors::AppError,
    state::{AuthState, Field, FlowView, RequestState},
    types::{ForgotRequest, ForgotResponse, LoginRequest, ResetRequest, SignupRequest},
};
use std::sync::Arc;
use tokio::sync::watch;
use tracing::{debug, info, instrument, warn};

pub const SIGNUP_SUCCESS: &str = "Signup successful";
pub const LOGIN_SUCCESS: &str = "Login successful!";
pub const FORGOT_SUCCESS: &str = "Reset code sent";
pub const RESET_SUCCESS: &str = "Password reset successful. You can log in now.";

/// Result of a submit as seen by the caller.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// Another request was in flight; nothing was sent.
    Busy,
    Success,
    Failure,
}

/// State changes applied after a successful response.
struct Transition {
    message: String,
    view: Option<FlowView>,
    /// `Some` replaces the stored token, even with `None`.
    token: Option<Option<String>>,
}

#[derive(Clone, Debug)]
pub struct AuthFlowController {
    client: AuthClient,
    state: Arc<watch::Sender<AuthState>>,
}

impl AuthFlowController {
    #[must_use]
    pub fn new(client: AuthClient) -> Self {
        let (state, _) = watch::channel(AuthState::default());
        Self {
            client,
            state: Arc::new(state),
        }
    }

    #[must_use]
    pub fn client(&self) -> &AuthClient {
        &self.client
    }

    /// Clone of the current state.
    #[must_use]
    pub fn snapshot(&self) -> AuthState {
        self.state.borrow().clone()
    }

    /// Receiver notified on every state change.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<AuthState> {
        self.state.subscribe()
    }

    /// Switches the active form. Draft, message and token are untouched.
    pub fn select_view(&self, view: FlowView) {
        self.state.send_if_modified(|state| {
            if state.view == view {
                false
            } else {
                state.view = view;
                true
            }
        });
    }

    /// Records user input for one draft field.
    pub fn update_field(&self, field: Field, value: impl Into<String>) {
        let value = value.into();
        self.state.send_modify(|state| state.draft.set(field, value));
    }

    /// Runs the operation bound to the active view.
    pub async fn submit(&self) -> Outcome {
        let view = self.state.borrow().view;
        match view {
            FlowView::Signup => self.signup().await,
            FlowView::Login => self.login().await,
            FlowView::Forgot => self.forgot().await,
            FlowView::Reset => self.reset().await,
        }
    }

    /// POST `/auth/signup`; on success moves to the login form.
    #[instrument(skip(self))]
    pub async fn signup(&self) -> Outcome {
        let Some(_pending) = self.begin() else {
            return Outcome::Busy;
        };
        let draft = self.snapshot().draft;

        let result = self
            .client
            .signup(&SignupRequest {
                name: &draft.name,
                email: &draft.email,
                password: &draft.password,
            })
            .await
            .map(|response| Transition {
                message: non_empty(response.message)
                    .unwrap_or_else(|| SIGNUP_SUCCESS.to_string()),
                view: Some(FlowView::Login),
                token: None,
            });

        self.finish(result)
    }

    /// POST `/auth/login`; on success stores the issued token.
    #[instrument(skip(self))]
    pub async fn login(&self) -> Outcome {
        let Some(_pending) = self.begin() else {
            return Outcome::Busy;
        };
        let draft = self.snapshot().draft;

        let result = self
            .client
            .login(&LoginRequest {
                email: &draft.email,
                password: &draft.password,
            })
            .await
            .map(|response| Transition {
                message: LOGIN_SUCCESS.to_string(),
                view: None,
                token: Some(response.token),
            });

        self.finish(result)
    }

    /// POST `/auth/forgot`; on success moves to the reset form.
    #[instrument(skip(self))]
    pub async fn forgot(&self) -> Outcome {
        let Some(_pending) = self.begin() else {
            return Outcome::Busy;
        };
        let draft = self.snapshot().draft;

        let result = self
            .client
            .forgot(&ForgotRequest {
                email: &draft.email,
            })
            .await
            .map(|response| Transition {
                message: forgot_message(response),
                view: Some(FlowView::Reset),
                token: None,
            });

        self.finish(result)
    }

    /// POST `/auth/reset`; on success moves back to the login form.
    #[instrument(skip(self))]
    pub async fn reset(&self) -> Outcome {
        let Some(_pending) = self.begin() else {
            return Outcome::Busy;
        };
        let draft = self.snapshot().draft;

        let result = self
            .client
            .reset(&ResetRequest {
                email: &draft.email,
                code: &draft.reset_code,
                new_password: &draft.new_password,
            })
            .await
            .map(|_| Transition {
                message: RESET_SUCCESS.to_string(),
                view: Some(FlowView::Login),
                token: None,
            });

        self.finish(result)
    }

    /// Marks the state pending, or returns `None` if a request is already in flight.
    fn begin(&self) -> Option<PendingGuard<'_>> {
        let started = self.state.send_if_modified(|state| {
            if state.is_pending() {
                return false;
            }
            state.request = RequestState::Pending;
            state.message = None;
            true
        });

        if started {
            Some(PendingGuard { state: &self.state })
        } else {
            debug!("submit ignored: request already pending");
            None
        }
    }

    fn finish(&self, result: Result<Transition, AppError>) -> Outcome {
        match result {
            Ok(transition) => {
                info!(next_view = ?transition.view, "request succeeded");
                self.state.send_modify(|state| {
                    state.message = Some(transition.message);
                    if let Some(view) = transition.view {
                        state.view = view;
                    }
                    if let Some(token) = transition.token {
                        state.token = token;
                    }
                });
                Outcome::Success
            }
            Err(err) => {
                warn!(status = ?err.status(), "request failed: {err}");
                self.state
                    .send_modify(|state| state.message = Some(err.to_string()));
                Outcome::Failure
            }
        }
    }
}

/// Returns the state to idle when the operation exits, however it exits.
struct PendingGuard<'a> {
    state: &'a watch::Sender<AuthState>,
}

impl Drop for PendingGuard<'_> {
    fn drop(&mut self) {
        self.state
            .send_modify(|state| state.request = RequestState::Idle);
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|value| !value.trim().is_empty())
}

fn forgot_message(response: ForgotResponse) -> String {
    let message = non_empty(response.message).unwrap_or_else(|| FORGOT_SUCCESS.to_string());
    match non_empty(response.token) {
        Some(code) => format!("{message} (demo code: {code})"),
        None => message,
    }
}
