//! Command-line surface.

use clap::Parser;

const DESCRIPTION: &str = concat!(
    "    This the custom entrypoint to support Waypoint. It will re-execute any\n",
    "    command given after configuring the environment for usage with Waypoint.",
);

/// Fallback when argv[0] is unavailable.
pub const PROGRAM_NAME: &str = "waypoint-entrypoint";

#[derive(Debug, Parser)]
#[command(name = "waypoint-entrypoint", version)]
#[command(override_usage = "waypoint-entrypoint [cmd] [args...]")]
#[command(about = "Custom entrypoint to support Waypoint", long_about = DESCRIPTION)]
pub struct Cli {
    /// Command to execute, followed by its arguments.
    #[arg(trailing_var_arg = true, allow_hyphen_values = true, value_name = "CMD")]
    pub command: Vec<String>,
}

/// Usage text printed when no command is given.
pub fn usage(program: &str) -> String {
    format!("Usage: {program} [cmd] [args...]\n\n{DESCRIPTION}\n\n")
}
