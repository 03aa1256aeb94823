//! Configuration loading and resolution utilities.
//!
//! `load` merges config files, `TABULA__*` environment variables and CLI
//! flags, registers user themes and returns a validated [`ResolvedConfig`].

mod loader;
mod raw;
mod resolved;
mod sources;

pub use loader::load;
pub use resolved::ResolvedConfig;
