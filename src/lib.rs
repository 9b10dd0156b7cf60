//! # examportal
//!
//! Client for the Exam Portal account flows: signup, login, password-forgot
//! and password-reset against a JSON HTTP auth backend.
//!
//! The [`portal`] module holds the flow controller and its HTTP client; the
//! [`cli`] module wires it to a terminal, either interactively or as one-shot
//! subcommands. The client performs no password hashing or token validation;
//! the backend owns both.

pub mod cli;
pub mod portal;

#[allow(clippy::doc_markdown, clippy::needless_raw_string_hashes)]
pub mod built_info {
    include!(concat!(env!("OUT_DIR"), "/built.rs"));
}

pub const GIT_COMMIT_HASH: &str = match built_info::GIT_COMMIT_HASH {
    Some(hash) => hash,
    None => "unknown",
};

pub const APP_USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"),);
