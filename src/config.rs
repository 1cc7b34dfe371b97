//! Runtime configuration parsed from environment variables.
//!
//! `main` loads `.env` through `dotenvy` before calling
//! [`Config::from_env`]; command-line flags override the result.

use std::path::PathBuf;
use std::time::Duration;

use loyalty::DEFAULT_STARTING_POINTS;

pub const DEFAULT_STORE_PATH: &str = ".tastepoints/storage.json";
pub const DEFAULT_API_BASE_URL: &str = "https://mockapi.io/api/v1";
pub const DEFAULT_REVIEWS_URL: &str = "http://localhost:3000/reviews";
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid {var}: {value:?} is not a valid {expected}")]
    Invalid { var: &'static str, value: String, expected: &'static str },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub store_path: PathBuf,
    pub api_base_url: String,
    pub reviews_url: String,
    pub starting_points: u32,
    pub request_timeout: Duration,
    pub catalog_path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            store_path: PathBuf::from(DEFAULT_STORE_PATH),
            api_base_url: DEFAULT_API_BASE_URL.to_owned(),
            reviews_url: DEFAULT_REVIEWS_URL.to_owned(),
            starting_points: DEFAULT_STARTING_POINTS,
            request_timeout: Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS),
            catalog_path: None,
        }
    }
}

impl Config {
    /// Build config from environment variables.
    ///
    /// Optional:
    /// - `TASTEPOINTS_STORE_PATH`: default `.tastepoints/storage.json`
    /// - `TASTEPOINTS_API_BASE_URL`: default mock API base
    /// - `TASTEPOINTS_REVIEWS_URL`: default `http://localhost:3000/reviews`
    /// - `TASTEPOINTS_STARTING_POINTS`: default 120
    /// - `TASTEPOINTS_REQUEST_TIMEOUT_SECS`: default 10
    /// - `TASTEPOINTS_CATALOG_PATH`: JSON reward catalog replacing the built-in one
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] if a numeric variable does not parse.
    pub fn from_env() -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let store_path = env_nonempty("TASTEPOINTS_STORE_PATH").map_or(defaults.store_path, PathBuf::from);
        let api_base_url = env_nonempty("TASTEPOINTS_API_BASE_URL")
            .map_or(defaults.api_base_url, |url| trim_url(&url));
        let reviews_url = env_nonempty("TASTEPOINTS_REVIEWS_URL")
            .map_or(defaults.reviews_url, |url| trim_url(&url));
        let starting_points = env_parse(
            "TASTEPOINTS_STARTING_POINTS",
            defaults.starting_points,
            "non-negative integer",
        )?;
        let timeout_secs = env_parse(
            "TASTEPOINTS_REQUEST_TIMEOUT_SECS",
            DEFAULT_REQUEST_TIMEOUT_SECS,
            "number of seconds",
        )?;
        let catalog_path = env_nonempty("TASTEPOINTS_CATALOG_PATH").map(PathBuf::from);

        Ok(Self {
            store_path,
            api_base_url,
            reviews_url,
            starting_points,
            request_timeout: Duration::from_secs(timeout_secs),
            catalog_path,
        })
    }
}

/// Strip trailing slashes so endpoint paths can be appended directly.
#[must_use]
pub fn trim_url(url: &str) -> String {
    url.trim().trim_end_matches('/').to_owned()
}

fn env_nonempty(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}

fn env_parse<T: std::str::FromStr>(key: &'static str, default: T, expected: &'static str) -> Result<T, ConfigError> {
    match env_nonempty(key) {
        None => Ok(default),
        Some(raw) => raw.trim().parse().map_err(|_| ConfigError::Invalid {
            var: key,
            value: raw,
            expected,
        }),
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
