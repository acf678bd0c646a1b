//! Waypoint entrypoint library.
//!
//! Wraps a user command: resolves launch options from argv and the
//! environment, wires interrupt-driven cancellation, and hands both to a
//! [`Runtime`].

pub mod bootstrap;
pub mod cli;
pub mod config;
pub mod lifecycle;
pub mod observability;
pub mod runtime;

pub use bootstrap::{Entrypoint, EntrypointError};
pub use config::{EnvSource, MapEnv, ProcessEnv};
pub use lifecycle::Shutdown;
pub use runtime::{LaunchOption, LocalRuntime, Runtime, RuntimeError};
