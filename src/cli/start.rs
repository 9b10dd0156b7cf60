use crate::{
    GIT_COMMIT_HASH,
    cli::{actions::Action, commands, dispatch, telemetry},
};
use anyhow::Result;
use clap::ArgMatches;
use tracing::{Level, debug};

/// Level selected by `-v` repetition or `EXAMPORTAL_LOG_LEVEL`; `None` keeps the ERROR default.
fn verbosity(matches: &ArgMatches) -> Option<Level> {
    let count = matches
        .get_one::<u8>(commands::logging::ARG_VERBOSITY)
        .copied()
        .unwrap_or(0);

    match count {
        0 => None,
        1 => Some(Level::WARN),
        2 => Some(Level::INFO),
        3 => Some(Level::DEBUG),
        _ => Some(Level::TRACE),
    }
}

/// Parses the command line, installs logging and picks the action to run.
///
/// # Errors
///
/// Returns an error if logging cannot be initialized or the arguments do not
/// describe a valid action.
pub fn start() -> Result<Action> {
    let matches = commands::new().get_matches();

    telemetry::init(verbosity(&matches))?;
    debug!(
        version = env!("CARGO_PKG_VERSION"),
        commit = GIT_COMMIT_HASH,
        subcommand = matches.subcommand_name().unwrap_or("interactive"),
        "starting"
    );

    dispatch::handler(&matches)
}
