use axum_extra::extract::cookie::Key;
use color_eyre::eyre::{ensure, eyre, Result, WrapErr};
use dotenvy::dotenv;
use secrecy::{ExposeSecret, Secret};
use serde::Deserialize;
use std::{fs, path::Path, time::Duration};

use super::constants::{
    env, DEFAULT_BIND_ADDR, DEFAULT_LOG_LEVEL, DEFAULT_REQUEST_TIMEOUT_SECS,
    SESSION_KEY_MIN_BYTES,
};

/// Process configuration, resolved from the TOML file and then the
/// environment.
#[derive(Debug, Clone)]
pub struct Config {
    pub bind_addr: String,
    pub log_level: String,
    pub database_url: Secret<String>,
    pub session_key: Secret<String>,
    pub request_timeout: Duration,
}

#[derive(Debug, Default, Deserialize)]
struct ConfigFile {
    bind_addr: Option<String>,
    log_level: Option<String>,
    database_url: Option<Secret<String>>,
    session_key: Option<Secret<String>>,
    request_timeout_secs: Option<u64>,
}

impl Config {
    /// Reads `path` (if it exists), then applies environment overrides,
    /// including any from a `.env` file.
    pub fn load(path: &Path) -> Result<Self> {
        dotenv().ok();

        let file = if path.exists() {
            let contents = fs::read_to_string(path).wrap_err_with(|| {
                format!("failed to read config file {}", path.display())
            })?;
            parse_config_file(&contents).wrap_err_with(|| {
                format!("failed to parse config file {}", path.display())
            })?
        } else {
            ConfigFile::default()
        };

        Self::resolve(file, |name| std::env::var(name).ok())
    }

    fn resolve(
        file: ConfigFile,
        env_var: impl Fn(&str) -> Option<String>,
    ) -> Result<Self> {
        let env_var = |name: &str| env_var(name).filter(|v| !v.is_empty());

        let bind_addr = env_var(env::BIND_ADDR_ENV_VAR)
            .or(file.bind_addr)
            .unwrap_or_else(|| DEFAULT_BIND_ADDR.to_owned());
        let log_level = env_var(env::LOG_LEVEL_ENV_VAR)
            .or(file.log_level)
            .unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_owned());
        let database_url = env_var(env::DATABASE_URL_ENV_VAR)
            .map(Secret::new)
            .or(file.database_url)
            .filter(|url| !url.expose_secret().is_empty())
            .ok_or_else(|| eyre!("database_url must be set"))?;
        let session_key = env_var(env::SESSION_KEY_ENV_VAR)
            .map(Secret::new)
            .or(file.session_key)
            .ok_or_else(|| eyre!("session_key must be set"))?;
        let request_timeout_secs = match env_var(
            env::REQUEST_TIMEOUT_SECS_ENV_VAR,
        ) {
            Some(secs) => Some(secs.parse::<u64>().wrap_err_with(|| {
                format!(
                    "{} must be a whole number of seconds",
                    env::REQUEST_TIMEOUT_SECS_ENV_VAR
                )
            })?),
            None => file.request_timeout_secs,
        };
        let request_timeout = Duration::from_secs(
            request_timeout_secs.unwrap_or(DEFAULT_REQUEST_TIMEOUT_SECS),
        );

        ensure!(
            session_key.expose_secret().len() >= SESSION_KEY_MIN_BYTES,
            "session_key must be at least {} bytes long",
            SESSION_KEY_MIN_BYTES
        );

        Ok(Self {
            bind_addr,
            log_level,
            database_url,
            session_key,
            request_timeout,
        })
    }

    pub fn session_key(&self) -> Key {
        Key::from(self.session_key.expose_secret().as_bytes())
    }
}

fn parse_config_file(contents: &str) -> Result<ConfigFile> {
    Ok(toml::from_str(contents)?)
}
