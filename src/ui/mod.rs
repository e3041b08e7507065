//! Terminal front end for `drive`.
//!
//! [`App`] holds the explore screen, the route stack and the account flows;
//! the submodules implement key handling, rendering, widgets and the event
//! loop.

mod actions;
pub mod components;
mod forms;
mod render;
mod runtime;
mod state;

pub use forms::{AuthForm, FormField};
pub use runtime::run;
pub use state::{AlertState, App, ProfileAction};
