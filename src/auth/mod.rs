//! Accounts: the identity service seam, the cached session and the form flows
//! behind the sign-in, sign-up, verification and profile screens.

mod controller;
pub mod gotrue;
pub mod provider;
pub mod session_store;

pub use controller::{Alert, AlertKind, AuthController, AuthOutcome};
pub use gotrue::GoTrueProvider;
pub use provider::{
    AuthError, IdentityProvider, OFFLINE_MESSAGE, OfflineProvider, Session, SignInAttempt,
    SignUpAttempt, User,
};
pub use session_store::{SessionError, SessionStore};
