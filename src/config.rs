//! Server configuration parsed from environment variables.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_PHOTOS_UPSTREAM_URL: &str = "https://jsonplaceholder.typicode.com/photos";
pub const DEFAULT_PHOTOS_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    /// A variable was set but could not be parsed.
    #[error("invalid {var}: {value:?}")]
    Invalid { var: &'static str, value: String },

    /// A variable was set to an empty string.
    #[error("{var} must not be empty")]
    Empty { var: &'static str },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub port: u16,
    pub photos_upstream_url: String,
    pub photos_timeout_secs: u64,
}

impl Config {
    /// Build typed config from the process environment.
    ///
    /// Optional:
    /// - `PORT`: default 3000
    /// - `PHOTOS_UPSTREAM_URL`: default JSONPlaceholder `/photos`
    /// - `PHOTOS_TIMEOUT_SECS`: default 10
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build config from an arbitrary variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let port = parse_or("PORT", lookup("PORT"), DEFAULT_PORT)?;
        let photos_upstream_url = match lookup("PHOTOS_UPSTREAM_URL") {
            Some(raw) if raw.trim().is_empty() => return Err(ConfigError::Empty { var: "PHOTOS_UPSTREAM_URL" }),
            Some(raw) => raw.trim().to_owned(),
            None => DEFAULT_PHOTOS_UPSTREAM_URL.to_owned(),
        };
        let photos_timeout_secs = parse_or("PHOTOS_TIMEOUT_SECS", lookup("PHOTOS_TIMEOUT_SECS"), DEFAULT_PHOTOS_TIMEOUT_SECS)?;

        Ok(Self { port, photos_upstream_url, photos_timeout_secs })
    }
}

fn parse_or<T: std::str::FromStr>(var: &'static str, raw: Option<String>, default: T) -> Result<T, ConfigError> {
    match raw {
        None => Ok(default),
        Some(value) => value
            .trim()
            .parse::<T>()
            .map_err(|_| ConfigError::Invalid { var, value }),
    }
}
