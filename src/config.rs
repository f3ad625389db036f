use crate::allowed_headers::AllowedHeaders;
use crate::allowed_methods::AllowedMethods;
use crate::constants::config_key;
use crate::cors::Cors;
use crate::options::{CorsOptions, ValidationError};
use crate::origin::AllowedOrigins;
use crate::util::split_list;
use thiserror::Error;

/// String key/value binding for the policy, matching the configuration
/// surface of a properties source:
///
/// | key                 | value                              |
/// |---------------------|------------------------------------|
/// | `allowed-origins`   | comma-separated origins, or `*`    |
/// | `allowed-methods`   | comma-separated method tokens      |
/// | `allowed-headers`   | comma-separated header names, or `*` |
/// | `allow-credentials` | `true` / `false`                   |
/// | `max-age`           | non-negative seconds               |
///
/// Binding and validation both happen at load time; a misconfiguration
/// never reaches request evaluation.
#[derive(Clone, Debug, Default)]
pub struct CorsConfig {
    options: CorsOptions,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Unknown configuration key '{0}'.")]
    UnknownKey(String),
    #[error("The value '{value}' for '{key}' is not a boolean; use 'true' or 'false'.")]
    InvalidFlag { key: String, value: String },
    #[error("The max-age value '{0}' must be a non-negative integer representing seconds.")]
    InvalidMaxAge(String),
    #[error(transparent)]
    Invalid(#[from] ValidationError),
}

impl CorsConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Binds a sequence of key/value pairs, last write per key winning.
    pub fn from_pairs<I, K, V>(pairs: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut config = Self::new();
        for (key, value) in pairs {
            config.set(key.as_ref(), value.as_ref())?;
        }
        Ok(config)
    }

    pub fn set(&mut self, key: &str, value: &str) -> Result<(), ConfigError> {
        match key.trim() {
            config_key::ALLOWED_ORIGINS => {
                self.options.origins = AllowedOrigins::list(split_list(value));
            }
            config_key::ALLOWED_METHODS => {
                self.options.methods = AllowedMethods::list(split_list(value));
            }
            config_key::ALLOWED_HEADERS => {
                let entries = split_list(value);
                self.options.allowed_headers = if entries.len() == 1 && entries[0] == "*" {
                    AllowedHeaders::any()
                } else {
                    AllowedHeaders::list(entries)
                };
            }
            config_key::ALLOW_CREDENTIALS => {
                self.options.credentials = parse_flag(key, value)?;
            }
            config_key::MAX_AGE => {
                self.options.max_age = value
                    .trim()
                    .parse()
                    .map_err(|_| ConfigError::InvalidMaxAge(value.to_string()))?;
            }
            other => return Err(ConfigError::UnknownKey(other.to_string())),
        }
        Ok(())
    }

    pub fn options(&self) -> &CorsOptions {
        &self.options
    }

    pub fn into_options(self) -> CorsOptions {
        self.options
    }

    /// Validates and builds the engine. Fails fast on conflicts such as
    /// credentials combined with the wildcard origin.
    pub fn build(self) -> Result<Cors, ConfigError> {
        Ok(Cors::new(self.options)?)
    }
}

fn parse_flag(key: &str, value: &str) -> Result<bool, ConfigError> {
    match value.trim() {
        v if v.eq_ignore_ascii_case("true") => Ok(true),
        v if v.eq_ignore_ascii_case("false") => Ok(false),
        _ => Err(ConfigError::InvalidFlag {
            key: key.to_string(),
            value: value.to_string(),
        }),
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;
