//! `drive`: browse rental vehicles on a map and in a bottom-sheet list.
//!
//! [`listings`] fetches one category at a time and shares each snapshot with
//! the [`map`] and the [`explore`] list. [`auth`] and [`navigation`] cover the
//! account screens, and [`ui`] is the ratatui front end tying them together.

pub mod app_dirs;
pub mod auth;
pub mod explore;
pub mod listings;
pub mod logging;
pub mod map;
pub mod navigation;
pub mod theme;
pub mod ui;
