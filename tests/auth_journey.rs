use anyhow::Result;
use examportal::portal::{
    AppConfig, AuthClient, AuthFlowController, Field, FlowView, Outcome, RequestState,
};
use serde_json::json;
use std::net::TcpListener;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn can_bind_localhost() -> bool {
    TcpListener::bind("127.0.0.1:0").is_ok()
}

async fn mount(server: &MockServer, route: &str, body: serde_json::Value, response: ResponseTemplate) {
    Mock::given(method("POST"))
        .and(path(route))
        .and(header("content-type", "application/json"))
        .and(body_json(body))
        .respond_with(response)
        .expect(1)
        .mount(server)
        .await;
}

#[tokio::test]
async fn signup_login_forgot_reset_journey() -> Result<()> {
    if !can_bind_localhost() {
        eprintln!("Skipping test: cannot bind localhost");
        return Ok(());
    }
    let server = MockServer::start().await;

    mount(
        &server,
        "/auth/signup",
        json!({ "name": "Jane Doe", "email": "jane@example.com", "password": "hunter22" }),
        ResponseTemplate::new(201).set_body_json(json!({ "message": "Welcome aboard" })),
    )
    .await;
    mount(
        &server,
        "/auth/login",
        json!({ "email": "jane@example.com", "password": "hunter22" }),
        ResponseTemplate::new(200).set_body_json(json!({ "token": "abc123" })),
    )
    .await;
    mount(
        &server,
        "/auth/forgot",
        json!({ "email": "jane@example.com" }),
        ResponseTemplate::new(200)
            .set_body_json(json!({ "message": "Code sent", "token": "000111" })),
    )
    .await;
    mount(
        &server,
        "/auth/reset",
        json!({ "email": "jane@example.com", "code": "000111", "new_password": "n3w-secret" }),
        ResponseTemplate::new(200).set_body_json(json!({ "message": "ok" })),
    )
    .await;

    let config = AppConfig::new(&format!("{}/", server.uri()), None)?;
    let controller = AuthFlowController::new(AuthClient::new(config)?);

    // signup
    controller.update_field(Field::Name, "Jane Doe");
    controller.update_field(Field::Email, "jane@example.com");
    controller.update_field(Field::Password, "hunter22");
    assert_eq!(controller.submit().await, Outcome::Success);
    let state = controller.snapshot();
    assert_eq!(state.view, FlowView::Login);
    assert_eq!(state.message.as_deref(), Some("Welcome aboard"));

    // login reuses the draft carried over from signup
    assert_eq!(controller.submit().await, Outcome::Success);
    let state = controller.snapshot();
    assert_eq!(state.view, FlowView::Login);
    assert_eq!(state.token.as_deref(), Some("abc123"));
    assert_eq!(state.message.as_deref(), Some("Login successful!"));

    // forgot
    controller.select_view(FlowView::Forgot);
    assert_eq!(controller.submit().await, Outcome::Success);
    let state = controller.snapshot();
    assert_eq!(state.view, FlowView::Reset);
    assert_eq!(
        state.message.as_deref(),
        Some("Code sent (demo code: 000111)")
    );

    // reset
    controller.update_field(Field::ResetCode, "000111");
    controller.update_field(Field::NewPassword, "n3w-secret");
    assert_eq!(controller.submit().await, Outcome::Success);
    let state = controller.snapshot();
    assert_eq!(state.view, FlowView::Login);
    assert_eq!(
        state.message.as_deref(),
        Some("Password reset successful. You can log in now.")
    );
    assert_eq!(state.request, RequestState::Idle);
    // token from the earlier login is kept in memory
    assert_eq!(state.token.as_deref(), Some("abc123"));

    Ok(())
}

#[tokio::test]
async fn failed_signup_keeps_form_interactive() -> Result<()> {
    if !can_bind_localhost() {
        eprintln!("Skipping test: cannot bind localhost");
        return Ok(());
    }
    let server = MockServer::start().await;
    mount(
        &server,
        "/auth/signup",
        json!({ "name": "", "email": "jane@example.com", "password": "" }),
        ResponseTemplate::new(400).set_body_json(json!({ "detail": "Email already registered" })),
    )
    .await;

    let controller =
        AuthFlowController::new(AuthClient::new(AppConfig::new(&server.uri(), None)?)?);
    controller.update_field(Field::Email, "jane@example.com");

    assert_eq!(controller.signup().await, Outcome::Failure);
    let state = controller.snapshot();
    assert_eq!(state.view, FlowView::Signup);
    assert_eq!(state.message.as_deref(), Some("Email already registered"));
    assert_eq!(state.request, RequestState::Idle);
    assert_eq!(state.token, None);

    Ok(())
}
