//! Maps validated CLI arguments to an [`Action`]: the interactive form when no
//! subcommand is given, otherwise a one-shot request for the named flow.

use crate::cli::actions::{Action, interactive, oneshot};
use crate::cli::commands::{backend, flows};
use anyhow::{Context, Result, anyhow};
use clap::ArgMatches;
use secrecy::SecretString;

/// # Errors
/// Returns an error if required arguments are missing or the backend URL is invalid.
pub fn handler(matches: &ArgMatches) -> Result<Action> {
    let Some((name, sub_m)) = matches.subcommand() else {
        let config = backend::parse(matches)?;
        return Ok(Action::Interactive(interactive::Args { config }));
    };

    let config = backend::parse(sub_m)?;

    // Closure to fetch required string arguments
    let required = |id: &str| -> Result<String> {
        sub_m
            .get_one::<String>(id)
            .cloned()
            .with_context(|| format!("missing required argument: --{id}"))
    };

    let request = match name {
        flows::CMD_SIGNUP => oneshot::Request::Signup {
            name: required(flows::ARG_NAME)?,
            email: required(flows::ARG_EMAIL)?,
            password: SecretString::from(required(flows::ARG_PASSWORD)?),
        },
        flows::CMD_LOGIN => oneshot::Request::Login {
            email: required(flows::ARG_EMAIL)?,
            password: SecretString::from(required(flows::ARG_PASSWORD)?),
        },
        flows::CMD_FORGOT => oneshot::Request::Forgot {
            email: required(flows::ARG_EMAIL)?,
        },
        flows::CMD_RESET => oneshot::Request::Reset {
            email: required(flows::ARG_EMAIL)?,
            code: SecretString::from(required(flows::ARG_CODE)?),
            new_password: SecretString::from(required(flows::ARG_NEW_PASSWORD)?),
        },
        other => return Err(anyhow!("unknown subcommand: {other}")),
    };

    Ok(Action::Oneshot(oneshot::Args { config, request }))
}
