//! Interpretation of launch options.

use crate::config::schema::{ENV_CEB_DISABLE, ENV_DEPLOYMENT_ID, ENV_SERVER_ADDR};
use crate::config::{EnvSource, UrlServiceParams};
use crate::runtime::{LaunchOption, RuntimeError};

/// Settings the runtime reads from the environment for `EnvDefaults`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RuntimeEnv {
    pub deployment_id: Option<String>,
    pub server_addr: Option<String>,

    /// Only execute the command; skip every other integration.
    pub disabled: bool,
}

impl RuntimeEnv {
    pub fn from_env<E: EnvSource + ?Sized>(env: &E) -> Self {
        Self {
            deployment_id: env.get_non_empty(ENV_DEPLOYMENT_ID),
            server_addr: env.get_non_empty(ENV_SERVER_ADDR),
            disabled: env.get_non_empty(ENV_CEB_DISABLE).is_some(),
        }
    }
}

/// Effective launch configuration after applying every option in order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LaunchConfig {
    pub env: RuntimeEnv,
    pub command: Vec<String>,
    pub url_service: Option<UrlServiceParams>,
}

impl LaunchConfig {
    /// Fold `options` in order. Fails if no non-empty command was given.
    pub fn from_options<E>(options: Vec<LaunchOption>, env: &E) -> Result<Self, RuntimeError>
    where
        E: EnvSource + ?Sized,
    {
        let mut config = Self::default();
        for option in options {
            config.apply(option, env);
        }

        if config.command.is_empty() {
            return Err(RuntimeError::NoCommand);
        }
        Ok(config)
    }

    fn apply<E>(&mut self, option: LaunchOption, env: &E)
    where
        E: EnvSource + ?Sized,
    {
        match option {
            LaunchOption::EnvDefaults => self.env = RuntimeEnv::from_env(env),
            LaunchOption::Exec(command) => self.command = command,
            LaunchOption::UrlService(params) => self.url_service = Some(params),
        }
    }

    /// Program and arguments, split.
    pub fn program(&self) -> Option<(&str, &[String])> {
        self.command
            .split_first()
            .map(|(program, args)| (program.as_str(), args))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::MapEnv;

    fn exec(items: &[&str]) -> LaunchOption {
        LaunchOption::Exec(items.iter().map(|s| s.to_string()).collect())
    }

    #[test]
    fn test_later_options_override_earlier() {
        let first = UrlServiceParams::new("a", "t1", 1, "x");
        let second = UrlServiceParams::new("b", "t2", 2, "y");
        let options = vec![
            exec(&["one"]),
            LaunchOption::UrlService(first),
            exec(&["two", "--flag"]),
            LaunchOption::UrlService(second.clone()),
        ];

        let config = LaunchConfig::from_options(options, &MapEnv::new()).unwrap();

        assert_eq!(config.command, vec!["two", "--flag"]);
        assert_eq!(config.url_service, Some(second));
        let (program, args) = config.program().unwrap();
        assert_eq!(program, "two");
        assert_eq!(args, ["--flag".to_string()]);
    }

    #[test]
    fn test_env_defaults_read_environment() {
        let env = MapEnv::new()
            .with(ENV_DEPLOYMENT_ID, "D1")
            .with(ENV_SERVER_ADDR, "")
            .with(ENV_CEB_DISABLE, "1");

        let config =
            LaunchConfig::from_options(vec![LaunchOption::EnvDefaults, exec(&["app"])], &env)
                .unwrap();

        assert_eq!(config.env.deployment_id.as_deref(), Some("D1"));
        assert_eq!(config.env.server_addr, None);
        assert!(config.env.disabled);
    }

    #[test]
    fn test_without_env_defaults_environment_is_ignored() {
        let env = MapEnv::new().with(ENV_CEB_DISABLE, "1");
        let config = LaunchConfig::from_options(vec![exec(&["app"])], &env).unwrap();

        assert_eq!(config.env, RuntimeEnv::default());
    }

    #[test]
    fn test_missing_command_rejected() {
        let result = LaunchConfig::from_options(vec![LaunchOption::EnvDefaults], &MapEnv::new());
        assert!(matches!(result, Err(RuntimeError::NoCommand)));

        let result = LaunchConfig::from_options(vec![exec(&[])], &MapEnv::new());
        assert!(matches!(result, Err(RuntimeError::NoCommand)));
    }
}
