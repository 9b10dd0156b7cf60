use crate::portal::{AppConfig, AuthClient, AuthFlowController, AuthState, Field, FlowView, Outcome};
use anyhow::{Result, anyhow};
use secrecy::{ExposeSecret, SecretString};
use tracing::debug;

/// A single flow invocation with its draft values.
#[derive(Debug)]
pub enum Request {
    Signup {
        name: String,
        email: String,
        password: SecretString,
    },
    Login {
        email: String,
        password: SecretString,
    },
    Forgot {
        email: String,
    },
    Reset {
        email: String,
        code: SecretString,
        new_password: SecretString,
    },
}

impl Request {
    #[must_use]
    pub const fn view(&self) -> FlowView {
        match self {
            Self::Signup { .. } => FlowView::Signup,
            Self::Login { .. } => FlowView::Login,
            Self::Forgot { .. } => FlowView::Forgot,
            Self::Reset { .. } => FlowView::Reset,
        }
    }

    /// Copies the values into the controller's draft and selects the matching view.
    fn load(self, controller: &AuthFlowController) {
        controller.select_view(self.view());
        match self {
            Self::Signup {
                name,
                email,
                password,
            } => {
                controller.update_field(Field::Name, name);
                controller.update_field(Field::Email, email);
                controller.update_field(Field::Password, password.expose_secret());
            }
            Self::Login { email, password } => {
                controller.update_field(Field::Email, email);
                controller.update_field(Field::Password, password.expose_secret());
            }
            Self::Forgot { email } => {
                controller.update_field(Field::Email, email);
            }
            Self::Reset {
                email,
                code,
                new_password,
            } => {
                controller.update_field(Field::Email, email);
                controller.update_field(Field::ResetCode, code.expose_secret());
                controller.update_field(Field::NewPassword, new_password.expose_secret());
            }
        }
    }
}

#[derive(Debug)]
pub struct Args {
    pub config: AppConfig,
    pub request: Request,
}

/// Loads the request into the controller, submits once and returns the final state.
pub async fn submit(controller: &AuthFlowController, request: Request) -> (Outcome, AuthState) {
    request.load(controller);
    let outcome = controller.submit().await;
    (outcome, controller.snapshot())
}

/// Execute a one-shot flow, printing the status message and any issued token.
/// # Errors
/// Returns an error carrying the status message if the flow fails.
pub async fn execute(args: Args) -> Result<()> {
    let controller = AuthFlowController::new(AuthClient::new(args.config)?);
    let view = args.request.view();

    let (outcome, state) = submit(&controller, args.request).await;
    debug!(%view, ?outcome, "one-shot request finished");

    let message = state.message.unwrap_or_default();
    match outcome {
        Outcome::Success => {
            println!("{message}");
            if let Some(token) = state.token {
                println!("token: {token}");
            }
            Ok(())
        }
        Outcome::Failure => Err(anyhow!(message)),
        Outcome::Busy => Err(anyhow!("a request is already in flight")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::net::TcpListener;
    use wiremock::matchers::{body_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn can_bind_localhost() -> bool {
        TcpListener::bind("127.0.0.1:0").is_ok()
    }

    fn controller_for(server: &MockServer) -> AuthFlowController {
        let config = AppConfig::new(&server.uri(), None).unwrap();
        AuthFlowController::new(AuthClient::new(config).unwrap())
    }

    #[tokio::test]
    async fn reset_request_sends_code_and_new_password() {
        if !can_bind_localhost() {
            eprintln!("Skipping test: cannot bind localhost");
            return;
        }
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/auth/reset"))
            .and(body_json(json!({
                "email": "jane@example.com",
                "code": "000111",
                "new_password": "n3w-secret"
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
            .expect(1)
            .mount(&server)
            .await;

        let controller = controller_for(&server);
        let (outcome, state) = submit(
            &controller,
            Request::Reset {
                email: "jane@example.com".to_string(),
                code: SecretString::from("000111".to_string()),
                new_password: SecretString::from("n3w-secret".to_string()),
            },
        )
        .await;

        assert_eq!(outcome, Outcome::Success);
        assert_eq!(state.view, FlowView::Login);
    }

    #[tokio::test]
    async fn login_request_returns_token() {
        if !can_bind_localhost() {
            eprintln!("Skipping test: cannot bind localhost");
            return;
        }
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/auth/login"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "token": "abc123" })))
            .expect(1)
            .mount(&server)
            .await;

        let controller = controller_for(&server);
        let (outcome, state) = submit(
            &controller,
            Request::Login {
                email: "jane@example.com".to_string(),
                password: SecretString::from("hunter22".to_string()),
            },
        )
        .await;

        assert_eq!(outcome, Outcome::Success);
        assert_eq!(state.token.as_deref(), Some("abc123"));
    }

    #[tokio::test]
    async fn execute_fails_with_backend_detail() {
        if !can_bind_localhost() {
            eprintln!("Skipping test: cannot bind localhost");
            return;
        }
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/auth/forgot"))
            .respond_with(
                ResponseTemplate::new(404).set_body_json(json!({ "detail": "User not found" })),
            )
            .expect(1)
            .mount(&server)
            .await;

        let config = AppConfig::new(&server.uri(), None).unwrap();
        let err = execute(Args {
            config,
            request: Request::Forgot {
                email: "nobody@example.com".to_string(),
            },
        })
        .await
        .unwrap_err();
        assert_eq!(err.to_string(), "User not found");
    }

    #[test]
    fn request_debug_redacts_secrets() {
        let request = Request::Login {
            email: "jane@example.com".to_string(),
            password: SecretString::from("hunter22".to_string()),
        };
        assert!(!format!("{request:?}").contains("hunter22"));
    }
}
