//! OS signal handling.
//!
//! Turns the first SIGINT/SIGTERM into cancellation of a derived
//! [`Shutdown`]. Interception lasts until the returned [`SignalGuard`] is
//! released or dropped.

use std::future::Future;

#[cfg(unix)]
use tokio::signal::unix::{signal, Signal, SignalKind};
use tokio::task::JoinHandle;

use crate::lifecycle::Shutdown;

/// Keeps signal interception alive for a derived context.
#[derive(Debug)]
pub struct SignalGuard {
    task: Option<JoinHandle<()>>,
}

impl SignalGuard {
    /// Stop intercepting signals. Safe to call more than once; does not
    /// cancel the context.
    pub fn release(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
        }
    }

    pub fn is_released(&self) -> bool {
        self.task.is_none()
    }
}

impl Drop for SignalGuard {
    fn drop(&mut self) {
        self.release();
    }
}

/// Derive a child of `parent` that is cancelled when `trigger` completes.
///
/// Must be called from within a Tokio runtime.
pub fn with_trigger<F>(parent: &Shutdown, trigger: F) -> (Shutdown, SignalGuard)
where
    F: Future<Output = ()> + Send + 'static,
{
    let ctx = parent.child();
    let watched = ctx.clone();

    let task = tokio::spawn(async move {
        tokio::select! {
            () = trigger => watched.trigger(),
            () = watched.cancelled() => {}
        }
    });

    (ctx, SignalGuard { task: Some(task) })
}

/// Derive a child of `parent` that is cancelled on the first interrupt.
///
/// Signal handlers are installed before this returns.
pub fn with_interrupt(parent: &Shutdown) -> (Shutdown, SignalGuard) {
    with_trigger(parent, interrupt())
}

#[cfg(unix)]
fn interrupt() -> impl Future<Output = ()> + Send + 'static {
    let sigint = register(SignalKind::interrupt(), "SIGINT");
    let sigterm = register(SignalKind::terminate(), "SIGTERM");

    async move {
        tokio::select! {
            () = recv(sigint) => tracing::info!("Received SIGINT, cancelling"),
            () = recv(sigterm) => tracing::info!("Received SIGTERM, cancelling"),
        }
    }
}

#[cfg(unix)]
fn register(kind: SignalKind, name: &str) -> Option<Signal> {
    match signal(kind) {
        Ok(stream) => Some(stream),
        Err(e) => {
            tracing::warn!(error = %e, "Failed to listen for {}", name);
            None
        }
    }
}

#[cfg(unix)]
async fn recv(stream: Option<Signal>) {
    match stream {
        Some(mut stream) => {
            if stream.recv().await.is_none() {
                std::future::pending::<()>().await;
            }
        }
        None => std::future::pending::<()>().await,
    }
}

#[cfg(not(unix))]
fn interrupt() -> impl Future<Output = ()> + Send + 'static {
    async {
        match tokio::signal::ctrl_c().await {
            Ok(()) => tracing::info!("Received Ctrl-C, cancelling"),
            Err(e) => {
                tracing::warn!(error = %e, "Failed to listen for Ctrl-C");
                std::future::pending::<()>().await;
            }
        }
    }
}
