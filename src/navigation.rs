//! Screen stack.

use log::debug;

use crate::listings::ListingId;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Explore,
    ListingDetail(ListingId),
    SignUp,
    SignIn,
    VerifyEmail { email: String },
    Profile,
}

impl Route {
    #[must_use]
    pub fn path(&self) -> String {
        match self {
            Route::Explore => "/(tabs)".to_string(),
            Route::ListingDetail(id) => format!("/listing/{id}"),
            Route::SignUp => "/(modals)/signUp".to_string(),
            Route::SignIn => "/(modals)/emailLogin".to_string(),
            Route::VerifyEmail { .. } => "/verify-email".to_string(),
            Route::Profile => "/(tabs)/profile".to_string(),
        }
    }

    #[must_use]
    pub fn title(&self) -> &'static str {
        match self {
            Route::Explore => "Explore",
            Route::ListingDetail(_) => "Listing",
            Route::SignUp => "Login or Sign Up",
            Route::SignIn => "Welcome Back",
            Route::VerifyEmail { .. } => "Verify Your Email",
            Route::Profile => "Your Account",
        }
    }

    /// Modal routes are dismissed with Esc and show a close hint.
    #[must_use]
    pub fn is_modal(&self) -> bool {
        matches!(self, Route::SignUp | Route::SignIn)
    }
}

/// A stack of routes rooted at [`Route::Explore`].
#[derive(Debug, Clone)]
pub struct Navigator {
    stack: Vec<Route>,
}

impl Default for Navigator {
    fn default() -> Self {
        Self {
            stack: vec![Route::Explore],
        }
    }
}

impl Navigator {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn current(&self) -> &Route {
        // The root is never popped.
        &self.stack[self.stack.len() - 1]
    }

    #[must_use]
    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    pub fn push(&mut self, route: Route) {
        debug!("navigate push {}", route.path());
        self.stack.push(route);
    }

    /// Reset the stack to a single route.
    pub fn replace_all(&mut self, route: Route) {
        debug!("navigate replace {}", route.path());
        self.stack.clear();
        self.stack.push(route);
    }

    /// Pop the current route. Returns `false` at the root.
    pub fn back(&mut self) -> bool {
        if self.stack.len() <= 1 {
            return false;
        }
        if let Some(route) = self.stack.pop() {
            debug!("navigate back from {}", route.path());
        }
        true
    }

    #[must_use]
    pub fn is_root(&self) -> bool {
        self.stack.len() == 1
    }
}
