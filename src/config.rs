//! Configuration constants and utilities for pokeget
//!
//! Everything the client needs to know about where PokeAPI lives and how
//! loudly to log. There is no configuration file; defaults cover the public
//! API and tests override the base URL to point at a stub server.

use std::time::Duration;

/// Default PokeAPI host
pub const DEFAULT_API_BASE_URL: &str = "https://pokeapi.co";

/// Path segments of the pokemon endpoint, appended to the base URL
pub const POKEMON_ENDPOINT_SEGMENTS: [&str; 3] = ["api", "v2", "pokemon"];

/// User agent sent with every request
pub const DEFAULT_USER_AGENT: &str = concat!("pokeget/", env!("CARGO_PKG_VERSION"));

/// Environment variable name for overriding the diagnostic log level
pub const LOG_LEVEL_ENV_VAR: &str = "POKEGET_LOG_LEVEL";

/// Log level used when neither `--verbose` nor the environment asks for more
pub const DEFAULT_LOG_LEVEL: tracing::Level = tracing::Level::WARN;

/// Settings for [`crate::pokeapi::PokeApiClient`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    base_url: String,
    user_agent: String,
    timeout: Option<Duration>,
}

impl ClientConfig {
    pub fn new() -> Self {
        Self {
            base_url: DEFAULT_API_BASE_URL.to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            timeout: None,
        }
    }

    /// Point the client at another host, e.g. a stub server
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Bound the whole request. Without this the client waits indefinitely.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn user_agent(&self) -> &str {
        &self.user_agent
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Map a level name to a tracing level, falling back to the default for anything unknown
pub fn parse_log_level(name: &str) -> tracing::Level {
    match name.trim().to_lowercase().as_str() {
        "trace" => tracing::Level::TRACE,
        "debug" => tracing::Level::DEBUG,
        "info" => tracing::Level::INFO,
        "warn" => tracing::Level::WARN,
        "error" => tracing::Level::ERROR,
        _ => DEFAULT_LOG_LEVEL,
    }
}

/// Get the log level, checking `--verbose` first, then the environment variable
pub fn get_log_level(verbose: bool) -> tracing::Level {
    if verbose {
        return tracing::Level::DEBUG;
    }

    std::env::var_os(LOG_LEVEL_ENV_VAR)
        .and_then(|val| val.into_string().ok())
        .map(|val| parse_log_level(&val))
        .unwrap_or(DEFAULT_LOG_LEVEL)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_client_config() {
        let config = ClientConfig::default();
        assert_eq!(config.base_url(), "https://pokeapi.co");
        assert!(config.user_agent().starts_with("pokeget/"));
        assert_eq!(config.timeout(), None);
    }

    #[test]
    fn test_client_config_builders() {
        let config = ClientConfig::new()
            .with_base_url("http://127.0.0.1:8080")
            .with_user_agent("tests")
            .with_timeout(Duration::from_secs(3));

        assert_eq!(config.base_url(), "http://127.0.0.1:8080");
        assert_eq!(config.user_agent(), "tests");
        assert_eq!(config.timeout(), Some(Duration::from_secs(3)));
    }

    #[test]
    fn test_parse_log_level_known_names() {
        assert_eq!(parse_log_level("trace"), tracing::Level::TRACE);
        assert_eq!(parse_log_level("DEBUG"), tracing::Level::DEBUG);
        assert_eq!(parse_log_level(" info "), tracing::Level::INFO);
        assert_eq!(parse_log_level("warn"), tracing::Level::WARN);
        assert_eq!(parse_log_level("error"), tracing::Level::ERROR);
    }

    #[test]
    fn test_parse_log_level_unknown_falls_back() {
        assert_eq!(parse_log_level("loud"), DEFAULT_LOG_LEVEL);
        assert_eq!(parse_log_level(""), DEFAULT_LOG_LEVEL);
    }

    #[test]
    fn test_verbose_overrides_log_level() {
        assert_eq!(get_log_level(true), tracing::Level::DEBUG);
    }

    #[test]
    fn test_get_log_level_env_override() {
        // Save current env var state
        let original = std::env::var_os(LOG_LEVEL_ENV_VAR);

        std::env::set_var(LOG_LEVEL_ENV_VAR, "trace");
        assert_eq!(get_log_level(false), tracing::Level::TRACE);
        assert_eq!(get_log_level(true), tracing::Level::DEBUG);

        std::env::set_var(LOG_LEVEL_ENV_VAR, "chatty");
        assert_eq!(get_log_level(false), DEFAULT_LOG_LEVEL);

        std::env::remove_var(LOG_LEVEL_ENV_VAR);
        assert_eq!(get_log_level(false), DEFAULT_LOG_LEVEL);

        // Restore original state
        if let Some(val) = original {
            std::env::set_var(LOG_LEVEL_ENV_VAR, val);
        }
    }
}
