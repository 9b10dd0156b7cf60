use clap::{Arg, Command};

pub const CMD_SIGNUP: &str = "signup";
pub const CMD_LOGIN: &str = "login";
pub const CMD_FORGOT: &str = "forgot";
pub const CMD_RESET: &str = "reset";

pub const ARG_NAME: &str = "name";
pub const ARG_EMAIL: &str = "email";
pub const ARG_PASSWORD: &str = "password";
pub const ARG_CODE: &str = "code";
pub const ARG_NEW_PASSWORD: &str = "new-password";

fn email_arg() -> Arg {
    Arg::new(ARG_EMAIL)
        .short('e')
        .long(ARG_EMAIL)
        .help("Account email")
        .env("EXAMPORTAL_EMAIL")
        .required(true)
}

fn password_arg() -> Arg {
    Arg::new(ARG_PASSWORD)
        .short('p')
        .long(ARG_PASSWORD)
        .help("Account password")
        .env("EXAMPORTAL_PASSWORD")
        .hide_env_values(true)
        .required(true)
}

#[must_use]
pub fn with_subcommands(command: Command) -> Command {
    command
        .subcommand(
            Command::new(CMD_SIGNUP)
                .about("Create an account")
                .arg(
                    Arg::new(ARG_NAME)
                        .short('n')
                        .long(ARG_NAME)
                        .help("Full name")
                        .required(true),
                )
                .arg(email_arg())
                .arg(password_arg()),
        )
        .subcommand(
            Command::new(CMD_LOGIN)
                .about("Log in and print the issued token")
                .arg(email_arg())
                .arg(password_arg()),
        )
        .subcommand(
            Command::new(CMD_FORGOT)
                .about("Request a password reset code")
                .arg(email_arg()),
        )
        .subcommand(
            Command::new(CMD_RESET)
                .about("Set a new password using a reset code")
                .arg(email_arg())
                .arg(
                    Arg::new(ARG_CODE)
                        .short('c')
                        .long(ARG_CODE)
                        .help("Reset code")
                        .required(true),
                )
                .arg(
                    Arg::new(ARG_NEW_PASSWORD)
                        .long(ARG_NEW_PASSWORD)
                        .help("New password")
                        .env("EXAMPORTAL_NEW_PASSWORD")
                        .hide_env_values(true)
                        .required(true),
                ),
        )
}
