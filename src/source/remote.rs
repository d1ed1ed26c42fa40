use std::fmt;
use std::time::Duration;

use reqwest::header::{ACCEPT, USER_AGENT};
use tracing::debug;
use url::{ParseError, Url};

use crate::error::DocsError;
use crate::normalize::SpecContent;
use crate::runtime_config::{RuntimeConfig, ACCEPT_HEADER};

const HTTP_SCHEME: &str = "http";
const HTTPS_SCHEME: &str = "https";

/// Blocking HTTP client used to fetch remote specs.
///
/// Every request is bounded by [`HttpClient::timeout`]; there is no other
/// cancellation mechanism and failed requests are never retried.
#[derive(Clone)]
pub struct HttpClient {
    inner: reqwest::blocking::Client,
    timeout: Duration,
    user_agent: String,
}

impl HttpClient {
    /// Client with the given timeout and the environment's `User-Agent`.
    pub fn new(timeout: Duration) -> Result<Self, DocsError> {
        let runtime = RuntimeConfig::from_env();
        Self::build(timeout, runtime.user_agent)
    }

    /// Client with the timeout and `User-Agent` from `config`.
    pub fn from_runtime_config(config: &RuntimeConfig) -> Result<Self, DocsError> {
        Self::build(config.http_timeout, config.user_agent.clone())
    }

    /// Wrap a caller-configured client. `timeout` is applied per request.
    pub fn from_client(inner: reqwest::blocking::Client, timeout: Duration) -> Self {
        Self {
            inner,
            timeout,
            user_agent: RuntimeConfig::from_env().user_agent,
        }
    }

    fn build(timeout: Duration, user_agent: String) -> Result<Self, DocsError> {
        let inner = reqwest::blocking::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(DocsError::HttpClient)?;
        Ok(Self {
            inner,
            timeout,
            user_agent,
        })
    }

    /// Per-request timeout.
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// `User-Agent` sent with every request.
    pub fn user_agent(&self) -> &str {
        &self.user_agent
    }
}

impl fmt::Debug for HttpClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HttpClient")
            .field("timeout", &self.timeout)
            .field("user_agent", &self.user_agent)
            .finish_non_exhaustive()
    }
}

/// Check that `raw` is a non-blank `http://` or `https://` URL.
///
/// Text without any scheme (for example `not-a-url`) is reported as an
/// unsupported scheme rather than as a malformed URL.
pub fn validate_url(raw: &str) -> Result<Url, DocsError> {
    if raw.trim().is_empty() {
        return Err(DocsError::InvalidUrl("URL is empty".to_string()));
    }
    let url = match Url::parse(raw) {
        Ok(url) => url,
        Err(ParseError::RelativeUrlWithoutBase) => {
            return Err(DocsError::UnsupportedScheme {
                scheme: String::new(),
            })
        }
        Err(e) => return Err(DocsError::InvalidUrl(format!("{raw}: {e}"))),
    };
    match url.scheme() {
        HTTP_SCHEME | HTTPS_SCHEME => Ok(url),
        other => Err(DocsError::UnsupportedScheme {
            scheme: other.to_string(),
        }),
    }
}

/// GET `url` and return the body of a 2xx response.
pub fn fetch_from_url(url: &Url, client: &HttpClient) -> Result<Vec<u8>, DocsError> {
    debug!(url = %url, timeout_ms = client.timeout.as_millis() as u64, "fetching remote spec");
    let response = client
        .inner
        .get(url.clone())
        .header(ACCEPT, ACCEPT_HEADER)
        .header(USER_AGENT, client.user_agent.as_str())
        .timeout(client.timeout)
        .send()
        .map_err(|e| DocsError::HttpRequest {
            url: url.to_string(),
            status: None,
            reason: e.to_string(),
        })?;

    let status = response.status();
    if !status.is_success() {
        return Err(DocsError::HttpRequest {
            url: url.to_string(),
            status: Some(status.as_u16()),
            reason: format!("HTTP {status}"),
        });
    }

    let body = response.bytes().map_err(|e| DocsError::HttpRequest {
        url: url.to_string(),
        status: Some(status.as_u16()),
        reason: format!("failed to read response body: {e}"),
    })?;
    if body.is_empty() {
        return Err(DocsError::EmptyResponse {
            url: url.to_string(),
        });
    }
    debug!(url = %url, bytes = body.len(), "received remote spec");
    Ok(body.to_vec())
}

/// Resolve a remote spec to normalized JSON text.
///
/// Without a `client`, one is built from [`RuntimeConfig::from_env`].
/// Returns an empty string when the body is not JSON.
pub fn load_spec_from_url(spec_url: &str, client: Option<&HttpClient>) -> Result<String, DocsError> {
    let url = validate_url(spec_url)?;
    let body = match client {
        Some(client) => fetch_from_url(&url, client)?,
        None => {
            let client = HttpClient::from_runtime_config(&RuntimeConfig::from_env())?;
            fetch_from_url(&url, &client)?
        }
    };
    Ok(SpecContent::Json(String::from_utf8_lossy(&body).into_owned()).normalize())
}
