//! Cancellable execution context.

use tokio_util::sync::CancellationToken;

/// Cancellable context handed to the runtime.
///
/// Clones share the same state. Children are cancelled with their parent,
/// but cancelling a child leaves the parent running.
#[derive(Debug, Clone, Default)]
pub struct Shutdown {
    token: CancellationToken,
}

impl Shutdown {
    /// Create a new root context that is never cancelled on its own.
    pub fn new() -> Self {
        Self {
            token: CancellationToken::new(),
        }
    }

    /// Derive a child context.
    pub fn child(&self) -> Self {
        Self {
            token: self.token.child_token(),
        }
    }

    /// Cancel this context and all of its children. Calling it again is a no-op.
    pub fn trigger(&self) {
        self.token.cancel();
    }

    pub fn is_triggered(&self) -> bool {
        self.token.is_cancelled()
    }

    /// Wait until the context is cancelled.
    pub async fn cancelled(&self) {
        self.token.cancelled().await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_trigger_is_idempotent() {
        let shutdown = Shutdown::new();
        assert!(!shutdown.is_triggered());

        shutdown.trigger();
        shutdown.trigger();
        assert!(shutdown.is_triggered());
    }

    #[test]
    fn test_parent_cancels_child_but_not_reverse() {
        let parent = Shutdown::new();
        let child = parent.child();
        let sibling = parent.child();

        child.trigger();
        assert!(child.is_triggered());
        assert!(!parent.is_triggered());
        assert!(!sibling.is_triggered());

        parent.trigger();
        assert!(sibling.is_triggered());
    }

    #[tokio::test]
    async fn test_clones_observe_cancellation() {
        let shutdown = Shutdown::new();
        let observer = shutdown.clone();

        let waiter = tokio::spawn(async move { observer.cancelled().await });
        shutdown.trigger();

        tokio::time::timeout(Duration::from_secs(1), waiter)
            .await
            .expect("clone never observed cancellation")
            .unwrap();
    }
}
