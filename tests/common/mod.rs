//! Shared utilities for integration tests.

#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use waypoint_entrypoint::{LaunchOption, Runtime, RuntimeError, Shutdown};

/// Runtime that records every invocation instead of running anything.
#[derive(Clone, Default)]
pub struct RecordingRuntime {
    calls: Arc<Mutex<Vec<Vec<LaunchOption>>>>,
    fail: bool,
}

impl RecordingRuntime {
    pub fn new() -> Self {
        Self::default()
    }

    /// A runtime whose every run fails with `NoCommand`.
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    pub fn calls(&self) -> Vec<Vec<LaunchOption>> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl Runtime for RecordingRuntime {
    async fn run(&self, ctx: Shutdown, options: Vec<LaunchOption>) -> Result<(), RuntimeError> {
        assert!(!ctx.is_triggered(), "runtime received a cancelled context");
        self.calls.lock().unwrap().push(options);

        if self.fail {
            Err(RuntimeError::NoCommand)
        } else {
            Ok(())
        }
    }
}

pub fn args(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}
