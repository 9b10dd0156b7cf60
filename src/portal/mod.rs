//! Client-side account flows against the auth backend.
//!
//! ## Flows
//!
//! - **Signup:** `POST /auth/signup` with name, email and password. On success the
//!   form switches to login.
//! - **Login:** `POST /auth/login` with email and password. On success the
//!   returned token is kept in memory only.
//! - **Forgot:** `POST /auth/forgot` with the email. On success the form switches
//!   to reset; demo backends echo the reset code, which is appended to the
//!   status message.
//! - **Reset:** `POST /auth/reset` with email, code and new password. On success
//!   the form switches back to login.
//!
//! Every failure lands in the single status message slot and leaves the form
//! interactive. Passwords, reset codes and tokens must never be logged.

pub mod api;
pub mod client;
pub mod config;
pub mod controller;
pub mod errors;
pub mod state;
pub mod types;
pub mod view;

pub use client::AuthClient;
pub use config::AppConfig;
pub use controller::{AuthFlowController, Outcome};
pub use errors::AppError;
pub use state::{AuthState, Field, FlowView, RequestState, SessionDraft};
