//! Functional options for [`Scalar::new`](crate::Scalar::new).
//!
//! Each option is one fallible step over the configuration. Steps run in
//! the order given and the first failure aborts construction, so order is
//! significant: [`with_http_client`] only affects [`with_url`] steps that
//! come after it, and a later source option replaces the content of an
//! earlier one.
//!
//! Source options escape the resolved JSON with
//! [`escape_js_string`](crate::escape::escape_js_string) before storing it.

use std::fmt;

use crate::error::{DocsError, SpecOrigin};
use crate::escape::escape_js_string;
use crate::normalize::SpecContent;
use crate::runtime_config::{RuntimeConfig, DEFAULT_LANGUAGE};
use crate::scalar::DocsConfig;
use crate::source::{load_spec_from_file, load_spec_from_url, HttpClient, SpecDocument};

type ApplyFn = Box<dyn FnOnce(&mut DocsConfig) -> Result<(), DocsError> + Send>;

/// One configuration step.
pub struct ScalarOption(ApplyFn);

impl ScalarOption {
    /// Wrap an arbitrary step.
    pub fn new<F>(f: F) -> Self
    where
        F: FnOnce(&mut DocsConfig) -> Result<(), DocsError> + Send + 'static,
    {
        ScalarOption(Box::new(f))
    }

    pub(crate) fn apply(self, config: &mut DocsConfig) -> Result<(), DocsError> {
        (self.0)(config)
    }
}

impl fmt::Debug for ScalarOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ScalarOption(..)")
    }
}

/// Page title. Blank titles fail with [`DocsError::InvalidTitle`].
pub fn with_title(title: &str) -> ScalarOption {
    let title = title.trim().to_string();
    ScalarOption::new(move |config| {
        if title.is_empty() {
            return Err(DocsError::InvalidTitle);
        }
        config.title = title;
        Ok(())
    })
}

/// Page language tag. Blank values select the default language.
pub fn with_language(language: &str) -> ScalarOption {
    let language = language.trim().to_string();
    ScalarOption::new(move |config| {
        config.language = if language.is_empty() {
            DEFAULT_LANGUAGE.to_string()
        } else {
            language
        };
        Ok(())
    })
}

/// Load the spec from a path or `file://` URL.
///
/// A file that is readable but not JSON leaves the content empty, which
/// surfaces as [`DocsError::SpecRequired`] unless a later option sets it.
pub fn with_file(file_path: &str) -> ScalarOption {
    let file_path = file_path.to_string();
    ScalarOption::new(move |config| {
        let content =
            load_spec_from_file(&file_path).map_err(|e| DocsError::load(SpecOrigin::File, e))?;
        config.content = escape_js_string(&content);
        Ok(())
    })
}

/// Fetch the spec over HTTP(S) with the client configured so far.
pub fn with_url(spec_url: &str) -> ScalarOption {
    let spec_url = spec_url.to_string();
    ScalarOption::new(move |config| {
        let content = load_spec_from_url(&spec_url, config.http_client.as_ref())
            .map_err(|e| DocsError::load(SpecOrigin::Url, e))?;
        config.content = escape_js_string(&content);
        Ok(())
    })
}

/// Client used by subsequent [`with_url`] steps.
///
/// `None` installs a client built from [`RuntimeConfig::from_env`].
pub fn with_http_client(client: Option<HttpClient>) -> ScalarOption {
    ScalarOption::new(move |config| {
        let client = match client {
            Some(client) => client,
            None => HttpClient::from_runtime_config(&RuntimeConfig::from_env())?,
        };
        config.http_client = Some(client);
        Ok(())
    })
}

/// Load the spec from a document object.
///
/// Fails with [`DocsError::InvalidSpec`] when `spec` is `None` or renders
/// to an empty string. The document is read when the option is created.
pub fn with_spec<D>(spec: Option<&D>) -> ScalarOption
where
    D: SpecDocument + ?Sized,
{
    let doc = spec.map(|d| d.read_doc());
    ScalarOption::new(move |config| {
        let doc = match doc {
            Some(doc) if !doc.is_empty() => doc,
            _ => return Err(DocsError::InvalidSpec),
        };
        config.content = escape_js_string(&SpecContent::Json(doc).normalize());
        Ok(())
    })
}

/// Load the spec from raw text. Blank text fails with [`DocsError::InvalidSpec`].
pub fn with_spec_content(content: &str) -> ScalarOption {
    let content = content.trim().to_string();
    ScalarOption::new(move |config| {
        if content.is_empty() {
            return Err(DocsError::InvalidSpec);
        }
        config.content = escape_js_string(&SpecContent::Json(content).normalize());
        Ok(())
    })
}

/// Load the spec from an in-memory document or supplier.
///
/// Content that normalizes to nothing fails with [`DocsError::InvalidSpec`].
pub fn with_spec_object(content: SpecContent) -> ScalarOption {
    ScalarOption::new(move |config| {
        let normalized = content.normalize();
        if normalized.is_empty() {
            return Err(DocsError::InvalidSpec);
        }
        config.content = escape_js_string(&normalized);
        Ok(())
    })
}
