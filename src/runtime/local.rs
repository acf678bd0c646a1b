//! Local runtime: executes the wrapped command as a child process.
//!
//! # Responsibilities
//! - Fold launch options into a `LaunchConfig`
//! - Spawn the command with inherited stdio
//! - Expose the resolved URL service port to the child as `PORT`
//! - On cancellation, ask the child to stop and wait for it
//!
//! The URL service control-plane protocol is not spoken here; a
//! registration request is only logged.

use std::process::{ExitStatus, Stdio};

use async_trait::async_trait;
use tokio::process::{Child, Command};

use crate::config::schema::ENV_PORT;
use crate::config::{EnvSource, ProcessEnv};
use crate::lifecycle::Shutdown;
use crate::runtime::{LaunchConfig, LaunchOption, Runtime, RuntimeError};

/// Runs the command on this host.
#[derive(Debug, Clone, Default)]
pub struct LocalRuntime<E = ProcessEnv> {
    env: E,
}

impl LocalRuntime<ProcessEnv> {
    pub fn new() -> Self {
        Self { env: ProcessEnv }
    }
}

impl<E: EnvSource> LocalRuntime<E> {
    /// Use `env` to resolve `EnvDefaults`.
    pub fn with_env(env: E) -> Self {
        Self { env }
    }
}

#[async_trait]
impl<E> Runtime for LocalRuntime<E>
where
    E: EnvSource + Send + Sync,
{
    async fn run(&self, ctx: Shutdown, options: Vec<LaunchOption>) -> Result<(), RuntimeError> {
        let config = LaunchConfig::from_options(options, &self.env)?;
        let (program, args) = config.program().ok_or(RuntimeError::NoCommand)?;

        if let Some(id) = config.env.deployment_id.as_deref() {
            tracing::debug!(deployment_id = id, "Deployment ID from environment");
        }
        if let Some(addr) = config.env.server_addr.as_deref() {
            tracing::debug!(server_addr = addr, "Server address from environment");
        }

        let mut command = Command::new(program);
        command
            .args(args)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit());

        if let Some(params) = &config.url_service {
            command.env(ENV_PORT, params.port.to_string());

            if config.env.disabled {
                tracing::info!("Entrypoint disabled, skipping URL service registration");
            } else {
                tracing::info!(
                    control_addr = %params.control_addr,
                    port = params.port,
                    labels = %params.labels,
                    "URL service registration requested"
                );
            }
        }

        let mut child = command.spawn().map_err(|source| RuntimeError::Spawn {
            command: program.to_string(),
            source,
        })?;
        tracing::info!(pid = child.id(), command = ?config.command, "Child process started");

        tokio::select! {
            status = child.wait() => {
                let status = status.map_err(RuntimeError::Wait)?;
                check_status(status)
            }
            () = ctx.cancelled() => {
                tracing::info!("Context cancelled, stopping child process");
                terminate(&mut child);
                let status = child.wait().await.map_err(RuntimeError::Wait)?;
                tracing::info!(%status, "Child process stopped after cancellation");
                Ok(())
            }
        }
    }
}

fn check_status(status: ExitStatus) -> Result<(), RuntimeError> {
    if status.success() {
        tracing::info!(%status, "Child process exited");
        Ok(())
    } else {
        tracing::warn!(%status, "Child process failed");
        Err(RuntimeError::Exited(status))
    }
}

#[cfg(unix)]
fn terminate(child: &mut Child) {
    use nix::sys::signal::{kill, Signal};
    use nix::unistd::Pid;

    let Some(pid) = child.id() else {
        return;
    };

    let Ok(raw) = i32::try_from(pid) else {
        tracing::warn!(pid, "PID out of range, killing child");
        let _ = child.start_kill();
        return;
    };

    if let Err(e) = kill(Pid::from_raw(raw), Signal::SIGTERM) {
        tracing::warn!(pid, error = %e, "Failed to send SIGTERM, killing child");
        let _ = child.start_kill();
    }
}

#[cfg(not(unix))]
fn terminate(child: &mut Child) {
    let _ = child.start_kill();
}
