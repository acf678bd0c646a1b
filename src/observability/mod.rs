//! Observability subsystem.
//!
//! # Design Decisions
//! - Diagnostics go to stderr; stdout belongs to the wrapped command
//! - `RUST_LOG` overrides the default filter
//! - Sensitive values (tokens) are redacted in `Debug` output

pub mod logging;
