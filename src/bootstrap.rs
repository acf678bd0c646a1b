//! Startup orchestration.
//!
//! # Responsibilities
//! - Validate the positional command
//! - Acquire an interrupt-driven cancellation context
//! - Assemble launch options from the environment
//! - Invoke the runtime and map its outcome to an exit status
//!
//! # Design Decisions
//! - Fail fast: every error is terminal and reported once
//! - Nothing reaches the runtime until configuration fully resolves
//! - Signal interception is released on every exit path

use std::io::{self, Write};

use thiserror::Error;

use crate::cli;
use crate::config::{assemble_options, ConfigError, EnvSource};
use crate::lifecycle::{with_interrupt, Shutdown};
use crate::runtime::{Runtime, RuntimeError};

/// Terminal failure of the entrypoint.
#[derive(Debug, Error)]
pub enum EntrypointError {
    #[error("no command given")]
    Usage,

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("Error initializing Waypoint entrypoint: {0}")]
    Runtime(#[source] RuntimeError),
}

impl EntrypointError {
    /// Process exit status for this failure.
    pub fn exit_code(&self) -> u8 {
        1
    }

    /// Write the human-readable diagnostic for this failure.
    pub fn report<W: Write + ?Sized>(&self, program: &str, out: &mut W) -> io::Result<()> {
        match self {
            Self::Usage => out.write_all(cli::usage(program).as_bytes()),
            other => writeln!(out, "{}", other),
        }
    }
}

/// Configures and launches a wrapped command.
pub struct Entrypoint<E, R> {
    env: E,
    runtime: R,
}

impl<E, R> Entrypoint<E, R>
where
    E: EnvSource,
    R: Runtime,
{
    pub fn new(env: E, runtime: R) -> Self {
        Self { env, runtime }
    }

    /// The environment, including any values written during configuration.
    pub fn env(&self) -> &E {
        &self.env
    }

    /// Run `args` under a child of `base`.
    ///
    /// Must be called from within a Tokio runtime.
    pub async fn run(&mut self, args: Vec<String>, base: &Shutdown) -> Result<(), EntrypointError> {
        if args.is_empty() {
            return Err(EntrypointError::Usage);
        }

        let (ctx, mut guard) = with_interrupt(base);

        let options = assemble_options(&mut self.env, args)?;
        tracing::debug!(?options, "Launch options assembled");

        let result = self.runtime.run(ctx, options).await;
        guard.release();

        result.map_err(EntrypointError::Runtime)
    }
}
