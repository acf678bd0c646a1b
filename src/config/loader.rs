//! Launch option assembly from argv and the environment.

use std::num::ParseIntError;

use thiserror::Error;

use crate::config::env::EnvSource;
use crate::config::schema::{
    UrlServiceParams, DEFAULT_CONTROL_ADDR, DEFAULT_PORT, ENV_CONTROL_ADDR, ENV_PORT, ENV_TOKEN,
    ENV_URL_LABELS,
};
use crate::runtime::LaunchOption;

/// Error type for configuration resolution.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid value of PORT: {value:?} ({source})")]
    InvalidPort {
        value: String,
        #[source]
        source: ParseIntError,
    },

    #[error("No token provided via WAYPOINT_TOKEN.")]
    MissingToken,
}

/// Build the ordered option list for running `args`.
///
/// May write `PORT` back into `env` when URL labels are set and no port is.
pub fn assemble_options<E>(env: &mut E, args: Vec<String>) -> Result<Vec<LaunchOption>, ConfigError>
where
    E: EnvSource + ?Sized,
{
    let mut options = vec![LaunchOption::EnvDefaults, LaunchOption::Exec(args)];

    if let Some(params) = resolve_url_service(env)? {
        tracing::debug!(?params, "URL service enabled");
        options.push(LaunchOption::UrlService(params));
    } else {
        tracing::debug!("{} not set, URL service disabled", ENV_URL_LABELS);
    }

    Ok(options)
}

/// Resolve URL service parameters, or `None` when no labels are configured.
pub fn resolve_url_service<E>(env: &mut E) -> Result<Option<UrlServiceParams>, ConfigError>
where
    E: EnvSource + ?Sized,
{
    let Some(labels) = env.get_non_empty(ENV_URL_LABELS) else {
        return Ok(None);
    };

    let port = resolve_port(env)?;

    let control_addr = env
        .get_non_empty(ENV_CONTROL_ADDR)
        .unwrap_or_else(|| DEFAULT_CONTROL_ADDR.to_string());

    let token = env.get_non_empty(ENV_TOKEN).ok_or(ConfigError::MissingToken)?;

    Ok(Some(UrlServiceParams {
        control_addr,
        token,
        port,
        labels,
    }))
}

fn resolve_port<E>(env: &mut E) -> Result<u16, ConfigError>
where
    E: EnvSource + ?Sized,
{
    match env.get_non_empty(ENV_PORT) {
        None => {
            // Downstream readers of PORT must see the same value we register.
            env.set(ENV_PORT, &DEFAULT_PORT.to_string());
            tracing::info!(port = DEFAULT_PORT, "PORT not set, using default");
            Ok(DEFAULT_PORT)
        }
        Some(value) => value
            .parse()
            .map_err(|source| ConfigError::InvalidPort { value, source }),
    }
}
