//! Runtime seam.
//!
//! # Data Flow
//! ```text
//! Vec<LaunchOption> (ordered)
//!     → launch.rs (fold into LaunchConfig, later options win)
//!     → Runtime::run (local.rs: spawn command, wait, forward cancellation)
//! ```
//!
//! # Design Decisions
//! - Options are a closed enum so every runtime handles every case
//! - The runtime owns process execution; the bootstrap only configures it
//! - Cancellation arrives through the `Shutdown` context, never by killing

pub mod launch;
pub mod local;

use std::io;
use std::process::ExitStatus;

use async_trait::async_trait;
use thiserror::Error;

use crate::config::UrlServiceParams;
use crate::lifecycle::Shutdown;

pub use launch::{LaunchConfig, RuntimeEnv};
pub use local::LocalRuntime;

/// A single unit of launch configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LaunchOption {
    /// Let the runtime pick up its own settings from the environment.
    EnvDefaults,

    /// Command and arguments to execute.
    Exec(Vec<String>),

    /// Register the process with the URL service.
    UrlService(UrlServiceParams),
}

/// Error type for runtime failures.
#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error("no command to execute")]
    NoCommand,

    #[error("failed to start {command:?}: {source}")]
    Spawn {
        command: String,
        #[source]
        source: io::Error,
    },

    #[error("failed waiting for child process: {0}")]
    Wait(#[source] io::Error),

    #[error("command exited with {0}")]
    Exited(ExitStatus),
}

/// Runs a wrapped command according to an ordered option list.
#[async_trait]
pub trait Runtime: Send + Sync {
    /// Blocks until the command and any registered service have finished,
    /// or `ctx` is cancelled and the command has unwound.
    async fn run(&self, ctx: Shutdown, options: Vec<LaunchOption>) -> Result<(), RuntimeError>;
}
