//! Waypoint entrypoint.
//!
//! ```text
//! argv ──▶ cli ──▶ bootstrap ──▶ config (env → options)
//!                      │
//!                      ├──▶ lifecycle (SIGINT/SIGTERM → Shutdown)
//!                      │
//!                      └──▶ runtime (spawn command, wait)
//! ```

use std::process::ExitCode;

use clap::Parser;

use waypoint_entrypoint::cli::{Cli, PROGRAM_NAME};
use waypoint_entrypoint::observability::logging;
use waypoint_entrypoint::{Entrypoint, LocalRuntime, ProcessEnv, Shutdown};

// Single-threaded: PORT may be written to the process environment.
#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    let program = std::env::args().next().unwrap_or_else(|| PROGRAM_NAME.to_string());

    logging::init();

    let mut entrypoint = Entrypoint::new(ProcessEnv, LocalRuntime::new());
    match entrypoint.run(cli.command, &Shutdown::new()).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            let _ = e.report(&program, &mut std::io::stderr());
            ExitCode::from(e.exit_code())
        }
    }
}
