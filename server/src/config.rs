use std::{env, fmt::Display, net::SocketAddr, str::FromStr, time::Duration};

use skylapp_client::{client::DEFAULT_API_URL, qr::DEFAULT_SHORT_BASE};
use thiserror::Error;
use tracing::{info, warn};
use url::Url;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("invalid value for {key}: {reason}")]
    Invalid { key: String, reason: String },
}

#[derive(Debug, Clone)]
pub struct Config {
    pub bind_addr: SocketAddr,
    pub api_url: Url,
    pub short_base: Url,
    pub secure_cookies: bool,
    pub api_timeout: Duration,
}

impl Config {
    pub fn load() -> Result<Self, ConfigError> {
        Ok(Self {
            bind_addr: try_load("BIND_ADDR", "127.0.0.1:3000")?,
            api_url: try_load("SKYLAPP_API_URL", DEFAULT_API_URL)?,
            short_base: try_load("SKYLAPP_SHORT_BASE", DEFAULT_SHORT_BASE)?,
            secure_cookies: try_load("COOKIE_SECURE", "true")?,
            api_timeout: Duration::from_secs(try_load("API_TIMEOUT_SECS", "10")?),
        })
    }
}

fn try_load<T: FromStr>(key: &str, default: &str) -> Result<T, ConfigError>
where
    T::Err: Display,
{
    let raw = env::var(key).unwrap_or_else(|_| {
        info!("{key} not set, using default: {default}");
        default.to_string()
    });

    raw.trim().parse().map_err(|e: T::Err| {
        warn!("Invalid {key} value: {e}");
        ConfigError::Invalid {
            key: key.to_string(),
            reason: e.to_string(),
        }
    })
}
