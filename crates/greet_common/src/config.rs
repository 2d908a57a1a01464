use std::{
    env,
    error::Error as StdError,
    fmt::{self, Display, Formatter},
};

use http::{uri::InvalidUri, Uri};

/// Base URL used when nothing else is configured.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8080";
/// Environment variable native binaries read the base URL from.
pub const BASE_URL_ENV: &str = "SERVER_URL";

/// Describes how to reach the greet service.
///
/// The service is spoken to with hRPC unary calls over HTTP. Building a
/// config never touches the network; an unreachable server only shows up
/// once a call is made.
#[derive(Debug, Clone)]
pub struct TransportConfig {
    base_url: Uri,
    check_spec_version: bool,
}

impl TransportConfig {
    /// Create a config pointing at the given base URL.
    ///
    /// The URL must use the `http` or `https` scheme and have a host. hRPC
    /// transports check the scheme again when they are built; checking here
    /// lets a bad URL fail with a [`ConfigError`] before any transport exists.
    pub fn new(base_url: &str) -> Result<Self, ConfigError> {
        let base_url: Uri = base_url.parse().map_err(ConfigError::InvalidUrl)?;

        if !matches!(base_url.scheme_str(), Some("http" | "https")) {
            return Err(ConfigError::InvalidScheme);
        }
        if base_url.host().is_none() {
            return Err(ConfigError::MissingHost);
        }

        Ok(Self {
            base_url,
            check_spec_version: true,
        })
    }

    /// Create a config from the [`BASE_URL_ENV`] environment variable,
    /// falling back to [`DEFAULT_BASE_URL`] if it is not set.
    pub fn from_env() -> Result<Self, ConfigError> {
        match env::var(BASE_URL_ENV) {
            Ok(url) => Self::new(&url),
            Err(_) => Self::new(DEFAULT_BASE_URL),
        }
    }

    /// Set whether the transport should check the server's hRPC spec version.
    ///
    /// Only the browser `Wasm` transport has this check; the native `Hyper`
    /// transport ignores it.
    pub fn check_spec_version(mut self, enabled: bool) -> Self {
        self.check_spec_version = enabled;
        self
    }

    /// The base URL of the service.
    pub fn base_url(&self) -> &Uri {
        &self.base_url
    }

    /// Whether the server's hRPC spec version will be checked.
    pub fn checks_spec_version(&self) -> bool {
        self.check_spec_version
    }
}

/// Errors that can occur while building a [`TransportConfig`].
#[derive(Debug)]
pub enum ConfigError {
    /// Occurs if the base URL can't be parsed.
    InvalidUrl(InvalidUri),
    /// Occurs if the base URL scheme isn't `http` or `https`.
    InvalidScheme,
    /// Occurs if the base URL has no host.
    MissingHost,
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidUrl(err) => write!(f, "invalid base url: {}", err),
            ConfigError::InvalidScheme => {
                f.write_str("invalid scheme, expected `http` or `https`")
            }
            ConfigError::MissingHost => f.write_str("base url has no host"),
        }
    }
}

impl StdError for ConfigError {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        match self {
            ConfigError::InvalidUrl(err) => Some(err),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_default_url() {
        let config = TransportConfig::new(DEFAULT_BASE_URL).unwrap();
        assert_eq!(config.base_url().host(), Some("localhost"));
        assert_eq!(config.base_url().port_u16(), Some(8080));
        assert!(config.checks_spec_version());
    }

    #[test]
    fn spec_version_check_can_be_disabled() {
        let config = TransportConfig::new("https://greet.example.org")
            .unwrap()
            .check_spec_version(false);
        assert!(!config.checks_spec_version());
    }

    #[test]
    fn rejects_non_http_scheme() {
        let err = TransportConfig::new("ws://localhost:8080").unwrap_err();
        assert!(matches!(err, ConfigError::InvalidScheme));
    }

    #[test]
    fn rejects_relative_url() {
        let err = TransportConfig::new("/greet").unwrap_err();
        assert!(matches!(err, ConfigError::InvalidScheme));
    }

    #[test]
    fn rejects_garbage() {
        let err = TransportConfig::new("http://exa mple").unwrap_err();
        assert!(matches!(err, ConfigError::InvalidUrl(_)));
    }
}
