use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A signed-in account as the identity service describes it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub full_name: Option<String>,
}

impl User {
    /// Full name when known, else the email, else the id.
    #[must_use]
    pub fn display_name(&self) -> &str {
        self.full_name
            .as_deref()
            .or(self.email.as_deref())
            .unwrap_or(&self.id)
    }
}

/// Tokens of an active session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub access_token: String,
    pub refresh_token: String,
    pub user: User,
}

/// Error reported by the identity service: one or more human messages.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("{}", .messages.join("; "))]
pub struct AuthError {
    pub messages: Vec<String>,
}

impl AuthError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            messages: vec![message.into()],
        }
    }

    /// The message an alert shows.
    #[must_use]
    pub fn first_message(&self) -> &str {
        self.messages
            .first()
            .map(String::as_str)
            .unwrap_or("Unknown error")
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SignInAttempt {
    Complete(Session),
    /// The account exists but needs another step (e.g. email confirmation).
    NeedsFurtherSteps,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SignUpAttempt {
    Complete(Session),
    VerificationSent,
}

/// The hosted identity service.
pub trait IdentityProvider: Send + Sync {
    /// Whether the service can be reached at all in this configuration.
    fn is_available(&self) -> bool {
        true
    }

    fn sign_in(&self, email: &str, password: &str) -> Result<SignInAttempt, AuthError>;

    fn sign_up(&self, email: &str, password: &str) -> Result<SignUpAttempt, AuthError>;

    fn verify_email(&self, email: &str, code: &str) -> Result<Session, AuthError>;

    fn resend_code(&self, email: &str) -> Result<(), AuthError>;

    fn sign_out(&self, session: &Session) -> Result<(), AuthError>;

    fn delete_account(&self, session: &Session) -> Result<(), AuthError>;
}

pub const OFFLINE_MESSAGE: &str = "Sign-in is not available at the moment.";

/// Stand-in used when no identity service is configured.
#[derive(Debug, Clone, Copy, Default)]
pub struct OfflineProvider;

impl IdentityProvider for OfflineProvider {
    fn is_available(&self) -> bool {
        false
    }

    fn sign_in(&self, _email: &str, _password: &str) -> Result<SignInAttempt, AuthError> {
        Err(AuthError::new(OFFLINE_MESSAGE))
    }

    fn sign_up(&self, _email: &str, _password: &str) -> Result<SignUpAttempt, AuthError> {
        Err(AuthError::new(OFFLINE_MESSAGE))
    }

    fn verify_email(&self, _email: &str, _code: &str) -> Result<Session, AuthError> {
        Err(AuthError::new(OFFLINE_MESSAGE))
    }

    fn resend_code(&self, _email: &str) -> Result<(), AuthError> {
        Err(AuthError::new(OFFLINE_MESSAGE))
    }

    fn sign_out(&self, _session: &Session) -> Result<(), AuthError> {
        Ok(())
    }

    fn delete_account(&self, _session: &Session) -> Result<(), AuthError> {
        Err(AuthError::new(OFFLINE_MESSAGE))
    }
}
