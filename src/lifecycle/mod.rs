//! Lifecycle management subsystem.
//!
//! # Data Flow
//! ```text
//! Cancellation (shutdown.rs):
//!     Shutdown::new() → child() → trigger() → every clone observes cancelled()
//!
//! Signals (signals.rs):
//!     SIGTERM/SIGINT → cancel the derived Shutdown (once)
//!     SignalGuard dropped → stop intercepting signals
//! ```
//!
//! # Design Decisions
//! - Cancellation is cooperative: nothing here kills a process
//! - Signal interception is scoped to the guard's lifetime
//! - A cancelled context never returns to the running state

pub mod shutdown;
pub mod signals;

pub use shutdown::Shutdown;
pub use signals::{with_interrupt, with_trigger, SignalGuard};
