//! The state container behind every screen of the terminal front end.

use ratatui::layout::Rect;
use throbber_widgets_tui::ThrobberState;

use super::components::ConsoleState;
use super::forms::AuthForm;
use crate::auth::{Alert, AlertKind, AuthController, AuthOutcome};
use crate::explore::ExploreScreen;
use crate::navigation::{Navigator, Route};
use crate::theme::Theme;

/// A raised alert and the highlighted button.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlertState {
    pub alert: Alert,
    pub selected: usize,
}

impl AlertState {
    fn new(alert: Alert) -> Self {
        Self { alert, selected: 0 }
    }

    /// Button labels, left to right.
    #[must_use]
    pub fn actions(&self) -> &'static [&'static str] {
        match self.alert.kind {
            AlertKind::Notice => &["OK"],
            AlertKind::ConfirmDeletion => &["Cancel", "Delete"],
        }
    }

    #[must_use]
    pub fn confirmed(&self) -> bool {
        self.alert.kind == AlertKind::ConfirmDeletion && self.selected == 1
    }
}

/// Actions on the profile screen, depending on the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProfileAction {
    SignUp,
    LogIn,
    SignOut,
    DeleteAccount,
}

impl ProfileAction {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            ProfileAction::SignUp => "Sign Up",
            ProfileAction::LogIn => "Log In",
            ProfileAction::SignOut => "Sign Out",
            ProfileAction::DeleteAccount => "Delete Account",
        }
    }
}

/// Aggregate state shared across the terminal UI.
pub struct App<'a> {
    pub(crate) screen: ExploreScreen,
    pub(crate) navigator: Navigator,
    pub(crate) auth: AuthController,
    pub(crate) sign_in_form: AuthForm<'a>,
    pub(crate) sign_up_form: AuthForm<'a>,
    pub(crate) verify_form: AuthForm<'a>,
    pub(crate) alert: Option<AlertState>,
    pub(crate) profile_selection: usize,
    pub theme: Theme,
    pub(crate) throbber_state: ThrobberState,
    pub(crate) console: ConsoleState,
    pub(crate) show_console: bool,
    /// Canvas area of the last frame; pin selection depends on it.
    pub(crate) map_area: Rect,
}

impl App<'_> {
    /// Build the app and push the sign-up gate when nobody is signed in.
    pub fn new(screen: ExploreScreen, auth: AuthController, theme: Theme) -> Self {
        let mut navigator = Navigator::new();
        if let Some(route) = auth.startup_route() {
            navigator.push(route);
        }
        Self {
            screen,
            navigator,
            auth,
            sign_in_form: AuthForm::credentials(),
            sign_up_form: AuthForm::credentials(),
            verify_form: AuthForm::verification(),
            alert: None,
            profile_selection: 0,
            theme,
            throbber_state: ThrobberState::default(),
            console: ConsoleState::new(),
            show_console: false,
            map_area: Rect::default(),
        }
    }

    #[must_use]
    pub fn screen(&self) -> &ExploreScreen {
        &self.screen
    }

    #[must_use]
    pub fn route(&self) -> &Route {
        self.navigator.current()
    }

    #[must_use]
    pub fn alert(&self) -> Option<&AlertState> {
        self.alert.as_ref()
    }

    /// Profile actions for the current session state.
    #[must_use]
    pub fn profile_actions(&self) -> &'static [ProfileAction] {
        if self.auth.is_signed_in() {
            &[ProfileAction::SignOut, ProfileAction::DeleteAccount]
        } else {
            &[ProfileAction::SignUp, ProfileAction::LogIn]
        }
    }

    /// Apply finished fetches and advance the spinner. Called once per frame.
    pub fn tick(&mut self) {
        self.screen.pump();
        self.throbber_state.calc_next();
    }

    pub(crate) fn raise(&mut self, alert: Alert) {
        self.alert = Some(AlertState::new(alert));
    }

    /// Carry out what an auth flow asked for.
    pub(crate) fn apply(&mut self, outcome: AuthOutcome) {
        match outcome {
            AuthOutcome::Push(route) => self.navigate(route),
            AuthOutcome::ReplaceAll(route) => {
                self.sign_in_form.clear();
                self.sign_up_form.clear();
                self.verify_form.clear();
                self.navigator.replace_all(route);
            }
            AuthOutcome::Alert(alert) => self.raise(alert),
            AuthOutcome::Stay => {}
        }
        self.profile_selection = 0;
    }

    pub(crate) fn navigate(&mut self, route: Route) {
        if matches!(route, Route::VerifyEmail { .. }) {
            self.verify_form.clear();
        }
        self.navigator.push(route);
    }
}
