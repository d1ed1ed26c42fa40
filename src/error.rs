//! Error types for configuration and rendering.
//!
//! Construction of a [`Scalar`](crate::Scalar) fails with a [`DocsError`];
//! writing the page fails with a [`RenderError`]. The two never mix, so a
//! caller can tell a bad spec source apart from a broken output stream.

use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

/// Where a spec was being loaded from when a [`DocsError::Load`] occurred.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpecOrigin {
    File,
    Url,
}

impl fmt::Display for SpecOrigin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SpecOrigin::File => f.write_str("file"),
            SpecOrigin::Url => f.write_str("URL"),
        }
    }
}

/// Failure while building a documentation configuration.
#[derive(Debug, Error)]
pub enum DocsError {
    /// Title is empty or whitespace after trimming.
    #[error("title cannot be empty")]
    InvalidTitle,

    /// Spec content or document is absent, empty, or not usable.
    #[error("spec cannot be empty")]
    InvalidSpec,

    /// URL is blank or could not be parsed.
    #[error("invalid URL provided: {0}")]
    InvalidUrl(String),

    /// URL parsed but its scheme is not accepted in this context.
    #[error("unsupported URL scheme '{scheme}', only file://, http://, and https:// are supported")]
    UnsupportedScheme { scheme: String },

    /// All options were applied and no content was ever set.
    #[error("spec content is required, use with_file(), with_url(), or with_spec()")]
    SpecRequired,

    /// Transport failure, body read failure, or a non-2xx status.
    #[error("HTTP request to {url} failed: {reason}")]
    HttpRequest {
        url: String,
        status: Option<u16>,
        reason: String,
    },

    /// The server answered 2xx with a zero-length body.
    #[error("received empty response from {url}")]
    EmptyResponse { url: String },

    /// The spec file is missing or unreadable.
    #[error("failed to read file {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The blocking HTTP client could not be constructed.
    #[error("failed to build HTTP client: {0}")]
    HttpClient(#[source] reqwest::Error),

    /// A source option failed; `source` holds the underlying kind.
    #[error("failed to load spec from {origin}: {source}")]
    Load {
        origin: SpecOrigin,
        #[source]
        source: Box<DocsError>,
    },
}

impl DocsError {
    pub(crate) fn load(origin: SpecOrigin, source: DocsError) -> Self {
        DocsError::Load {
            origin,
            source: Box::new(source),
        }
    }

    /// Innermost error with any [`DocsError::Load`] context removed.
    pub fn root(&self) -> &DocsError {
        let mut current = self;
        while let DocsError::Load { source, .. } = current {
            current = source;
        }
        current
    }

    /// HTTP status carried by an [`DocsError::HttpRequest`], if any.
    pub fn status(&self) -> Option<u16> {
        match self.root() {
            DocsError::HttpRequest { status, .. } => *status,
            _ => None,
        }
    }
}

/// Failure while writing the rendered page.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("failed to parse template: {0}")]
    TemplateParse(#[source] minijinja::Error),

    #[error("failed to execute template: {0}")]
    TemplateExecute(#[source] minijinja::Error),

    #[error("failed to write rendered page: {0}")]
    Io(#[from] std::io::Error),
}
