//! Flow state owned by the controller: the active view, the draft form values,
//! the in-flight flag, the status message and the issued token. Only the
//! controller mutates it; renderers read snapshots.

use std::{fmt, str::FromStr};

/// The active form. Exactly one is shown at a time.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum FlowView {
    #[default]
    Signup,
    Login,
    Forgot,
    Reset,
}

impl FlowView {
    /// Views offered as tabs. `Reset` is only reached through a successful forgot request.
    pub const TABS: [Self; 3] = [Self::Signup, Self::Login, Self::Forgot];

    /// Draft fields presented by this view, in display order.
    #[must_use]
    pub const fn fields(self) -> &'static [Field] {
        match self {
            Self::Signup => &[Field::Name, Field::Email, Field::Password],
            Self::Login => &[Field::Email, Field::Password],
            Self::Forgot => &[Field::Email],
            Self::Reset => &[Field::Email, Field::ResetCode, Field::NewPassword],
        }
    }

    #[must_use]
    pub const fn tab_label(self) -> &'static str {
        match self {
            Self::Signup => "Sign Up",
            Self::Login => "Log In",
            Self::Forgot => "Forgot",
            Self::Reset => "Reset",
        }
    }

    #[must_use]
    pub const fn submit_label(self) -> &'static str {
        match self {
            Self::Signup => "Create account",
            Self::Login => "Log in",
            Self::Forgot => "Send reset code",
            Self::Reset => "Reset password",
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Signup => "signup",
            Self::Login => "login",
            Self::Forgot => "forgot",
            Self::Reset => "reset",
        }
    }
}

impl fmt::Display for FlowView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FlowView {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_lowercase().as_str() {
            "signup" | "sign-up" => Ok(Self::Signup),
            "login" | "log-in" => Ok(Self::Login),
            "forgot" => Ok(Self::Forgot),
            "reset" => Ok(Self::Reset),
            other => Err(format!("unknown view: {other}")),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Field {
    Name,
    Email,
    Password,
    ResetCode,
    NewPassword,
}

impl Field {
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Name => "Full name",
            Self::Email => "Email",
            Self::Password => "Password",
            Self::ResetCode => "Reset code",
            Self::NewPassword => "New password",
        }
    }

    #[must_use]
    pub const fn placeholder(self) -> &'static str {
        match self {
            Self::Name => "Jane Doe",
            Self::Email => "jane@example.com",
            Self::Password | Self::NewPassword => "••••••••",
            Self::ResetCode => "6-digit code",
        }
    }

    /// Whether the value must be masked when rendered.
    #[must_use]
    pub const fn is_secret(self) -> bool {
        matches!(self, Self::Password | Self::NewPassword)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RequestState {
    #[default]
    Idle,
    Pending,
}

/// Form values typed by the user. Values persist across view switches.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct SessionDraft {
    pub name: String,
    pub email: String,
    pub password: String,
    pub reset_code: String,
    pub new_password: String,
}

impl SessionDraft {
    #[must_use]
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Password => &self.password,
            Field::ResetCode => &self.reset_code,
            Field::NewPassword => &self.new_password,
        }
    }

    pub fn set(&mut self, field: Field, value: String) {
        let slot = match field {
            Field::Name => &mut self.name,
            Field::Email => &mut self.email,
            Field::Password => &mut self.password,
            Field::ResetCode => &mut self.reset_code,
            Field::NewPassword => &mut self.new_password,
        };
        *slot = value;
    }
}

impl fmt::Debug for SessionDraft {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SessionDraft")
            .field("name", &self.name)
            .field("email", &self.email)
            .field("password", &"[REDACTED]")
            .field("reset_code", &"[REDACTED]")
            .field("new_password", &"[REDACTED]")
            .finish()
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AuthState {
    pub view: FlowView,
    pub draft: SessionDraft,
    pub request: RequestState,
    /// Feedback from the last attempt; replaced, never appended.
    pub message: Option<String>,
    /// Token from the last successful login. Memory only.
    pub token: Option<String>,
}

impl AuthState {
    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.request == RequestState::Pending
    }
}
