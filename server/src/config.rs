use std::env;
use std::sync::LazyLock;

use anyhow::Context;
use types::{Result, err};
use url::Url;

pub static CONFIG: LazyLock<Config> = LazyLock::new(|| {
    Config::from_env().expect("invalid server configuration")
});

#[derive(Clone)]
pub struct Config {
    /// Base URL of the marketplace REST backend.
    pub api_url: Url,
    /// Websocket endpoint of the realtime-notification service.
    pub notify_url: Url,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            api_url: parse_url(&env_var("BAZAARI_API_URL")?)?,
            notify_url: parse_url(&env_var("BAZAARI_NOTIFY_URL")?)?,
        })
    }
}

fn env_var(name: &str) -> Result<String> {
    env::var(name).map_err(|_| err!("missing environment variable: {}", name))
}

fn parse_url(value: &str) -> Result<Url> {
    Url::parse(value).with_context(|| format!("invalid URL: {value}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_variable_is_reported_by_name() {
        let error = env_var("BAZAARI_TEST_UNSET_VARIABLE").unwrap_err();
        assert!(error.to_string().contains("BAZAARI_TEST_UNSET_VARIABLE"));
    }

    #[test]
    fn bad_url_is_rejected() {
        assert!(parse_url("not a url").is_err());
    }
}
