pub mod backend;
pub mod flows;
pub mod logging;

use clap::{
    ColorChoice, Command,
    builder::styling::{AnsiColor, Effects, Styles},
};

#[must_use]
pub fn new() -> Command {
    let styles = Styles::styled()
        .header(AnsiColor::Yellow.on_default() | Effects::BOLD)
        .usage(AnsiColor::Green.on_default() | Effects::BOLD)
        .literal(AnsiColor::Blue.on_default() | Effects::BOLD)
        .placeholder(AnsiColor::Green.on_default());

    let long_version: &'static str = Box::leak(
        format!("{} - {}", env!("CARGO_PKG_VERSION"), crate::GIT_COMMIT_HASH).into_boxed_str(),
    );

    let command = Command::new("examportal")
        .about("Exam Portal account client")
        .long_about(
            "Exam Portal account client. Without a subcommand, opens an interactive form for signup, login and password reset.",
        )
        .version(env!("CARGO_PKG_VERSION"))
        .long_version(long_version)
        .color(ColorChoice::Auto)
        .styles(styles);

    let command = backend::with_args(command);
    let command = flows::with_subcommands(command);
    logging::with_args(command)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_new() {
        let command = new();

        assert_eq!(command.get_name(), "examportal");
        assert_eq!(
            command.get_about().map(ToString::to_string),
            Some("Exam Portal account client".to_string())
        );
        assert_eq!(
            command.get_version().map(ToString::to_string),
            Some(env!("CARGO_PKG_VERSION").to_string())
        );
    }

    #[test]
    fn test_backend_defaults() {
        temp_env::with_vars(
            [
                ("EXAMPORTAL_BACKEND_URL", None::<&str>),
                ("EXAMPORTAL_REQUEST_TIMEOUT", None::<&str>),
            ],
            || {
                let matches = new().get_matches_from(vec!["examportal"]);
                let config = backend::parse(&matches).unwrap();
                assert_eq!(config.backend_url, "http://localhost:8000");
                assert_eq!(config.request_timeout, None);
                assert!(matches.subcommand_name().is_none());
            },
        );
    }

    #[test]
    fn test_check_env() {
        temp_env::with_vars(
            [
                ("EXAMPORTAL_BACKEND_URL", Some("https://api.examportal.dev/")),
                ("EXAMPORTAL_REQUEST_TIMEOUT", Some("15")),
                ("EXAMPORTAL_LOG_LEVEL", Some("info")),
            ],
            || {
                let matches = new().get_matches_from(vec!["examportal"]);
                let config = backend::parse(&matches).unwrap();
                assert_eq!(config.backend_url, "https://api.examportal.dev");
                assert_eq!(config.request_timeout, Some(Duration::from_secs(15)));
                assert_eq!(
                    matches.get_one::<u8>(logging::ARG_VERBOSITY).copied(),
                    Some(2)
                );
            },
        );
    }

    #[test]
    fn test_flag_overrides_env() {
        temp_env::with_vars(
            [("EXAMPORTAL_BACKEND_URL", Some("https://api.examportal.dev"))],
            || {
                let matches = new().get_matches_from(vec![
                    "examportal",
                    "--backend-url",
                    "http://127.0.0.1:9000",
                ]);
                let config = backend::parse(&matches).unwrap();
                assert_eq!(config.backend_url, "http://127.0.0.1:9000");
            },
        );
    }

    #[test]
    fn test_zero_timeout_is_rejected() {
        temp_env::with_vars([("EXAMPORTAL_REQUEST_TIMEOUT", None::<&str>)], || {
            let result = new().try_get_matches_from(vec!["examportal", "--request-timeout", "0"]);
            assert!(result.is_err());
        });
    }

    #[test]
    fn test_reset_subcommand_args() {
        temp_env::with_vars(
            [
                ("EXAMPORTAL_EMAIL", None::<&str>),
                ("EXAMPORTAL_NEW_PASSWORD", None::<&str>),
            ],
            || {
                let matches = new().get_matches_from(vec![
                    "examportal",
                    "reset",
                    "--email",
                    "jane@example.com",
                    "--code",
                    "000111",
                    "--new-password",
                    "n3w-secret",
                ]);
                let (name, sub_m) = matches.subcommand().unwrap();
                assert_eq!(name, flows::CMD_RESET);
                assert_eq!(
                    sub_m.get_one::<String>(flows::ARG_CODE).map(String::as_str),
                    Some("000111")
                );
            },
        );
    }

    #[test]
    fn test_login_requires_password() {
        temp_env::with_vars([("EXAMPORTAL_PASSWORD", None::<&str>)], || {
            let result = new().try_get_matches_from(vec![
                "examportal",
                "login",
                "--email",
                "jane@example.com",
            ]);
            assert!(result.is_err());
        });
    }

    #[test]
    fn test_check_log_level_verbosity() {
        let levels = ["error", "warn", "info", "debug", "trace"];
        for (index, _) in levels.iter().enumerate() {
            temp_env::with_vars([("EXAMPORTAL_LOG_LEVEL", None::<String>)], || {
                let mut args = vec!["examportal".to_string()];

                // Add the appropriate number of "-v" flags based on the index
                if index > 0 {
                    args.push(format!("-{}", "v".repeat(index)));
                }

                let matches = new().get_matches_from(args);

                assert_eq!(
                    matches.get_one::<u8>(logging::ARG_VERBOSITY).copied(),
                    Some(u8::try_from(index).unwrap_or(u8::MAX))
                );
            });
        }
    }
}
