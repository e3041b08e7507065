//! Configuration loading and resolution.
//!
//! `load` layers the default config files, `--config` files, `DRIVE__*`
//! environment variables and CLI flags, then returns a validated
//! [`ResolvedConfig`].

mod loader;
mod raw;
mod resolved;
mod sources;

pub use loader::load;
pub use resolved::ResolvedConfig;
