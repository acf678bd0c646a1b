//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! argv (positional command) + environment (env.rs: EnvSource)
//!     → loader.rs (resolve PORT / control addr / token)
//!     → Vec<LaunchOption> (ordered, fully validated)
//!     → handed to the runtime
//! ```
//!
//! # Design Decisions
//! - The environment is injected, never read ambiently by callers
//! - URL service parameters are all-or-nothing
//! - Empty variables are treated the same as unset ones

pub mod env;
pub mod loader;
pub mod schema;

pub use env::{EnvSource, MapEnv, ProcessEnv};
pub use loader::{assemble_options, resolve_url_service, ConfigError};
pub use schema::UrlServiceParams;
