//! Plain-text rendering of an [`AuthState`] snapshot for the terminal front end.

use super::state::{AuthState, Field, FlowView};
use std::fmt::Write;

pub const TITLE: &str = "Exam Portal";
pub const SUBTITLE: &str = "Create your account, sign in, or reset your password";
pub const PENDING_LABEL: &str = "Please wait...";

const MASK: &str = "••••••••";

/// Renders the whole form: header, tabs, status, fields, submit label and footer.
#[must_use]
pub fn render(state: &AuthState, backend_url: &str) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "{TITLE}");
    let _ = writeln!(out, "{SUBTITLE}");
    let _ = writeln!(out);
    let _ = writeln!(out, "{}", tab_strip(state.view));

    if let Some(message) = state.message.as_deref().filter(|m| !m.is_empty()) {
        let _ = writeln!(out, "| {message}");
    }
    let _ = writeln!(out);

    for &field in state.view.fields() {
        let _ = writeln!(
            out,
            "  {:<13} {}",
            format!("{}:", field.label()),
            display_value(field, state.draft.get(field))
        );
    }

    let _ = writeln!(out);
    let _ = writeln!(out, "  [ {} ]", submit_label(state));

    if state.view == FlowView::Login {
        let _ = writeln!(
            out,
            "  No account? type `signup`. Forgot password? type `forgot`."
        );
        if let Some(token) = state.token.as_deref().filter(|t| !t.is_empty()) {
            let _ = writeln!(out, "  Demo token: {token}");
        }
    }

    let _ = writeln!(out);
    let _ = write!(out, "Backend: {backend_url}");
    out
}

/// Tabs with the active one bracketed. `Reset` has no tab.
#[must_use]
pub fn tab_strip(active: FlowView) -> String {
    FlowView::TABS
        .iter()
        .map(|&view| {
            if view == active {
                format!("[{}]", view.tab_label())
            } else {
                format!(" {} ", view.tab_label())
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[must_use]
pub fn submit_label(state: &AuthState) -> &'static str {
    if state.is_pending() {
        PENDING_LABEL
    } else {
        state.view.submit_label()
    }
}

/// Value as shown next to a label: secrets masked, empty values replaced by the placeholder hint.
#[must_use]
pub fn display_value(field: Field, value: &str) -> String {
    if value.is_empty() {
        format!("({})", field.placeholder())
    } else if field.is_secret() {
        MASK.to_string()
    } else {
        value.to_string()
    }
}
