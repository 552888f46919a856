//! Demo sign-in flow.
//!
//! Any well-formed credentials are accepted. Accounts are not checked
//! against anything; a fresh user record is minted on every sign-in.

use std::sync::LazyLock;

use entities::{SubscriptionPlan, User};
use regex::Regex;

use crate::{AuthError, AuthResult};

/// Minimum accepted password length.
pub const MIN_PASSWORD_LEN: usize = 6;

static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@.]+(\.[^\s@.]+)+$").expect("regex pattern is valid")
});

/// Which form the credentials were submitted from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AuthMode {
    /// Existing account.
    #[default]
    Login,
    /// New account.
    Signup,
}

/// Credentials entered in the sign-in form.
#[derive(Debug, Clone)]
pub struct Credentials {
    /// Email address.
    pub email: String,
    /// Password (only its length is checked).
    pub password: String,
    /// Optional display name, only used on signup.
    pub name: Option<String>,
}

impl Credentials {
    /// Creates credentials without a display name.
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
            name: None,
        }
    }

    /// Sets the display name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Validates the email format and password length.
    pub fn validate(&self) -> AuthResult<()> {
        if !EMAIL_RE.is_match(self.email.trim()) {
            return Err(AuthError::InvalidEmail(self.email.clone()));
        }
        if self.password.chars().count() < MIN_PASSWORD_LEN {
            return Err(AuthError::PasswordTooShort {
                min: MIN_PASSWORD_LEN,
            });
        }
        Ok(())
    }

    fn email_local_part(&self) -> &str {
        let email = self.email.trim();
        email.split('@').next().unwrap_or(email)
    }
}

/// Signs in with the given credentials, returning a new free-tier user.
///
/// On signup the trimmed name is used when provided; otherwise, and always on
/// login, the name is the local part of the email.
pub fn sign_in(mode: AuthMode, credentials: &Credentials) -> AuthResult<User> {
    credentials.validate()?;

    let local_part = credentials.email_local_part();
    let name = match mode {
        AuthMode::Signup => credentials
            .name
            .as_deref()
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .unwrap_or(local_part),
        AuthMode::Login => local_part,
    };

    let user = User::new(credentials.email.trim().to_lowercase(), name);
    tracing::info!(user_id = %user.id, mode = ?mode, "Demo sign-in");
    Ok(user)
}

/// Returns the fixed user of the "Continue with Google" demo button.
pub fn demo_google_user() -> User {
    User::new("demo@nichehunt.app", "Demo User")
        .with_id("demo-google")
        .with_plan(SubscriptionPlan::Pro)
}
