//! # Runtime Configuration Module
//!
//! Process-level defaults loaded from environment variables. These only
//! affect values the caller did not set explicitly through options.
//!
//! ## Environment Variables
//!
//! ### `SCALAR_DOCS_HTTP_TIMEOUT`
//!
//! Timeout in whole seconds for fetching a spec over HTTP(S) when no
//! client was supplied with [`with_http_client`](crate::options::with_http_client).
//!
//! Default: `30`
//!
//! ### `SCALAR_DOCS_USER_AGENT`
//!
//! `User-Agent` sent when fetching remote specs.
//!
//! Default: `scalar-docs/<crate version>`
//!
//! ## Usage
//!
//! ```rust
//! use scalar_docs::runtime_config::RuntimeConfig;
//!
//! let config = RuntimeConfig::from_env();
//! println!("HTTP timeout: {:?}", config.http_timeout);
//! ```

use std::env;
use std::time::Duration;

/// Default documentation title.
pub const DEFAULT_TITLE: &str = "Scalar API Reference";
/// Default `lang` attribute of the rendered page.
pub const DEFAULT_LANGUAGE: &str = "en-US";
/// Default timeout for remote spec requests.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);
/// `Accept` header sent with remote spec requests.
pub const ACCEPT_HEADER: &str = "application/json, application/yaml, text/yaml, */*";

const DEFAULT_USER_AGENT: &str = concat!("scalar-docs/", env!("CARGO_PKG_VERSION"));

/// Runtime configuration loaded from environment variables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuntimeConfig {
    /// Request timeout for the default HTTP client (default: 30s)
    pub http_timeout: Duration,
    /// `User-Agent` header for remote spec requests
    pub user_agent: String,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            http_timeout: DEFAULT_TIMEOUT,
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

impl RuntimeConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through `lookup`, which maps a variable name to its value.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let http_timeout = match lookup("SCALAR_DOCS_HTTP_TIMEOUT") {
            Some(val) => match val.trim().parse::<u64>() {
                Ok(secs) if secs > 0 => Duration::from_secs(secs),
                _ => DEFAULT_TIMEOUT,
            },
            None => DEFAULT_TIMEOUT,
        };
        let user_agent = lookup("SCALAR_DOCS_USER_AGENT")
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| DEFAULT_USER_AGENT.to_string());
        RuntimeConfig {
            http_timeout,
            user_agent,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn load(vars: &[(&str, &str)]) -> RuntimeConfig {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        RuntimeConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_unset_uses_defaults() {
        assert_eq!(load(&[]), RuntimeConfig::default());
    }

    #[test]
    fn test_values_are_parsed() {
        let config = load(&[
            ("SCALAR_DOCS_HTTP_TIMEOUT", " 5 "),
            ("SCALAR_DOCS_USER_AGENT", "docs-bot/2.0"),
        ]);
        assert_eq!(config.http_timeout, Duration::from_secs(5));
        assert_eq!(config.user_agent, "docs-bot/2.0");
    }

    #[test]
    fn test_invalid_values_fall_back() {
        let config = load(&[
            ("SCALAR_DOCS_HTTP_TIMEOUT", "soon"),
            ("SCALAR_DOCS_USER_AGENT", "   "),
        ]);
        assert_eq!(config.http_timeout, DEFAULT_TIMEOUT);
        assert!(config.user_agent.starts_with("scalar-docs/"));

        assert_eq!(
            load(&[("SCALAR_DOCS_HTTP_TIMEOUT", "0")]).http_timeout,
            DEFAULT_TIMEOUT
        );
    }
}
