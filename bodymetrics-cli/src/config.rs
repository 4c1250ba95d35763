use std::env;

use dotenv::dotenv;

pub const LOG_CONFIG_VAR: &str = "BODYMETRICS_LOG_CONFIG";
pub const DEFAULT_LOG_CONFIG: &str = "log4rs.yml";

#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    pub log_config: String,
}

impl Config {
    /// Reads configuration from the environment, loading `.env` first if present.
    pub fn from_env() -> Self {
        dotenv().ok();
        Self {
            log_config: env::var(LOG_CONFIG_VAR).unwrap_or_else(|_| DEFAULT_LOG_CONFIG.to_owned()),
        }
    }

    pub fn with_log_config(self, log_config: Option<String>) -> Self {
        match log_config {
            Some(log_config) => Self { log_config },
            None => self,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn command_line_overrides_environment() {
        let config = Config {
            log_config: DEFAULT_LOG_CONFIG.to_owned(),
        };

        assert_eq!(config.clone().with_log_config(None), config);
        assert_eq!(
            config
                .with_log_config(Some("custom.yml".to_owned()))
                .log_config,
            "custom.yml"
        );
    }
}
