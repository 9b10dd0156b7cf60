use crate::portal::config::{AppConfig, DEFAULT_BACKEND_URL};
use anyhow::{Context, Result};
use clap::{Arg, ArgMatches, Command};
use std::time::Duration;

pub const ARG_BACKEND_URL: &str = "backend-url";
pub const ARG_REQUEST_TIMEOUT: &str = "request-timeout";

#[must_use]
pub fn with_args(command: Command) -> Command {
    command
        .arg(
            Arg::new(ARG_BACKEND_URL)
                .short('b')
                .long(ARG_BACKEND_URL)
                .help("Auth backend base URL")
                .env("EXAMPORTAL_BACKEND_URL")
                .default_value(DEFAULT_BACKEND_URL)
                .global(true),
        )
        .arg(
            Arg::new(ARG_REQUEST_TIMEOUT)
                .long(ARG_REQUEST_TIMEOUT)
                .help("Per-request timeout in seconds (default: wait indefinitely)")
                .env("EXAMPORTAL_REQUEST_TIMEOUT")
                .global(true)
                .value_parser(clap::value_parser!(u64).range(1..)),
        )
}

/// Build the backend config from parsed arguments.
///
/// # Errors
/// Returns an error if the backend URL is invalid.
pub fn parse(matches: &ArgMatches) -> Result<AppConfig> {
    let backend_url = matches
        .get_one::<String>(ARG_BACKEND_URL)
        .map_or(DEFAULT_BACKEND_URL, String::as_str);
    let request_timeout = matches
        .get_one::<u64>(ARG_REQUEST_TIMEOUT)
        .copied()
        .map(Duration::from_secs);

    AppConfig::new(backend_url, request_timeout).context("invalid EXAMPORTAL_BACKEND_URL")
}
