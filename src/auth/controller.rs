use std::sync::Arc;

use log::{error, info, warn};

use super::provider::{AuthError, IdentityProvider, Session, SignInAttempt, SignUpAttempt, User};
use super::session_store::SessionStore;
use crate::navigation::Route;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlertKind {
    /// Informational; a single "OK" dismisses it.
    Notice,
    /// Asks before deleting the account: "Cancel" or "Delete".
    ConfirmDeletion,
}

/// A blocking message raised by an auth flow.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alert {
    pub title: String,
    pub message: String,
    pub kind: AlertKind,
}

impl Alert {
    pub fn notice(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            message: message.into(),
            kind: AlertKind::Notice,
        }
    }
}

/// Where an auth flow wants the app to go next.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthOutcome {
    Push(Route),
    ReplaceAll(Route),
    Alert(Alert),
    /// Nothing to navigate; the screen re-renders from the session state.
    Stay,
}

/// Session state plus the sign-in, sign-up and account flows.
pub struct AuthController {
    provider: Arc<dyn IdentityProvider>,
    store: SessionStore,
    session: Option<Session>,
}

impl AuthController {
    /// Restore a cached session if one can be read.
    pub fn new(provider: Arc<dyn IdentityProvider>, store: SessionStore) -> Self {
        let session = match store.load() {
            Ok(session) => session,
            Err(err) => {
                warn!("ignoring cached session: {err}");
                None
            }
        };
        if let Some(session) = &session {
            info!("restored session for {}", session.user.display_name());
        }
        Self {
            provider,
            store,
            session,
        }
    }

    #[must_use]
    pub fn is_signed_in(&self) -> bool {
        self.session.is_some()
    }

    #[must_use]
    pub fn user(&self) -> Option<&User> {
        self.session.as_ref().map(|session| &session.user)
    }

    /// Route to show over Explore at startup.
    #[must_use]
    pub fn startup_route(&self) -> Option<Route> {
        (!self.is_signed_in()).then_some(Route::SignUp)
    }

    pub fn sign_in(&mut self, email: &str, password: &str) -> AuthOutcome {
        if !self.provider.is_available() {
            return AuthOutcome::Alert(Alert::notice("Error", super::OFFLINE_MESSAGE));
        }
        if let Some(alert) = missing_information(email, password) {
            return AuthOutcome::Alert(alert);
        }
        match self.provider.sign_in(email.trim(), password) {
            Ok(SignInAttempt::Complete(session)) => {
                self.activate(session);
                AuthOutcome::ReplaceAll(Route::Explore)
            }
            Ok(SignInAttempt::NeedsFurtherSteps) => {
                info!("sign-in for {email} needs further steps");
                AuthOutcome::Alert(Alert::notice(
                    "Sign-in Incomplete",
                    "Please complete additional steps.",
                ))
            }
            Err(err) => failure("Sign In Error", &err),
        }
    }

    pub fn sign_up(&mut self, email: &str, password: &str) -> AuthOutcome {
        if !self.provider.is_available() {
            return AuthOutcome::Alert(Alert::notice(
                "Error",
                "Authentication is not ready yet. Please try again.",
            ));
        }
        if let Some(alert) = missing_information(email, password) {
            return AuthOutcome::Alert(alert);
        }
        let email = email.trim();
        match self.provider.sign_up(email, password) {
            Ok(SignUpAttempt::Complete(session)) => {
                self.activate(session);
                AuthOutcome::ReplaceAll(Route::Explore)
            }
            Ok(SignUpAttempt::VerificationSent) => AuthOutcome::Push(Route::VerifyEmail {
                email: email.to_string(),
            }),
            Err(err) => failure("Sign Up Error", &err),
        }
    }

    pub fn verify_email(&mut self, email: &str, code: &str) -> AuthOutcome {
        match self.provider.verify_email(email, code.trim()) {
            Ok(session) => {
                self.activate(session);
                AuthOutcome::ReplaceAll(Route::Explore)
            }
            Err(err) => failure("Verification failed", &err),
        }
    }

    pub fn resend_code(&mut self, email: &str) -> AuthOutcome {
        match self.provider.resend_code(email) {
            Ok(()) => AuthOutcome::Alert(Alert::notice(
                "Resend Code",
                format!("A new code was sent to {email}."),
            )),
            Err(err) => failure("Resend Code", &err),
        }
    }

    /// Provider errors are logged only; the local session is dropped either way.
    pub fn sign_out(&mut self) -> AuthOutcome {
        if let Some(session) = self.session.take() {
            if let Err(err) = self.provider.sign_out(&session) {
                error!("error signing out: {err}");
            }
            self.forget();
            info!("signed out {}", session.user.display_name());
        }
        AuthOutcome::Stay
    }

    /// First step of account deletion: ask for confirmation.
    pub fn request_account_deletion(&self) -> AuthOutcome {
        if !self.is_signed_in() {
            return AuthOutcome::Stay;
        }
        AuthOutcome::Alert(Alert {
            title: "Delete Account".into(),
            message: "Are you sure you want to delete your account? This action cannot be undone."
                .into(),
            kind: AlertKind::ConfirmDeletion,
        })
    }

    /// Second step, after the user chose "Delete".
    pub fn delete_account(&mut self) -> AuthOutcome {
        let Some(session) = &self.session else {
            return AuthOutcome::Stay;
        };
        match self.provider.delete_account(session) {
            Ok(()) => {
                info!("deleted account {}", session.user.id);
                self.session = None;
                self.forget();
                AuthOutcome::Push(Route::SignUp)
            }
            Err(err) => {
                error!("error deleting account: {err}");
                AuthOutcome::Alert(Alert::notice(
                    "Error",
                    "Failed to delete account. Please try again.",
                ))
            }
        }
    }

    fn activate(&mut self, session: Session) {
        info!("signed in as {}", session.user.display_name());
        if let Err(err) = self.store.save(&session) {
            warn!("could not cache session: {err}");
        }
        self.session = Some(session);
    }

    fn forget(&self) {
        if let Err(err) = self.store.clear() {
            warn!("could not clear cached session: {err}");
        }
    }
}

fn missing_information(email: &str, password: &str) -> Option<Alert> {
    (email.trim().is_empty() || password.is_empty()).then(|| {
        Alert::notice("Missing Information", "Please enter both email and password.")
    })
}

fn failure(title: &str, err: &AuthError) -> AuthOutcome {
    error!("{title}: {err}");
    AuthOutcome::Alert(Alert::notice(title, err.first_message()))
}
