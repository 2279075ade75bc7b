//! Runtime configuration.
//!
//! `FormConfig` is provided to the component tree as context and carries the
//! registration endpoint and toast timing. `HostConfig` is parsed from
//! environment variables by the SSR binary only.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const DEFAULT_REGISTER_URL: &str = "https://63b6557d58084a7af3af55c8.mockapi.io/api/users";
pub const DEFAULT_TOAST_DURATION_MS: u32 = 5_000;
pub const DEFAULT_PORT: u16 = 3000;

/// Settings consumed by the registration page.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FormConfig {
    /// Endpoint receiving the `POST` of each validated registration.
    pub register_url: String,
    /// How long a success toast stays on screen.
    pub toast_duration_ms: u32,
}

impl Default for FormConfig {
    fn default() -> Self {
        Self {
            register_url: DEFAULT_REGISTER_URL.to_owned(),
            toast_duration_ms: DEFAULT_TOAST_DURATION_MS,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid PORT '{0}': expected an integer in 0..=65535")]
    InvalidPort(String),
}

/// Settings for the SSR host process.
#[cfg(any(test, feature = "ssr"))]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HostConfig {
    pub port: u16,
}

#[cfg(any(test, feature = "ssr"))]
impl HostConfig {
    /// Build host config from environment variables.
    ///
    /// Optional:
    /// - `PORT`: listen port, default 3000
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidPort`] if `PORT` is set but not a valid port.
    pub fn from_env() -> Result<Self, ConfigError> {
        let port = match std::env::var("PORT") {
            Ok(value) => parse_port(Some(&value))?,
            Err(_) => parse_port(None)?,
        };
        Ok(Self { port })
    }
}

#[cfg(any(test, feature = "ssr"))]
fn parse_port(raw: Option<&str>) -> Result<u16, ConfigError> {
    match raw {
        None => Ok(DEFAULT_PORT),
        Some(value) => value
            .trim()
            .parse::<u16>()
            .map_err(|_| ConfigError::InvalidPort(value.to_owned())),
    }
}
