use std::io::Write;

use tracing::info;

use crate::error::{DocsError, RenderError};
use crate::options::{with_file, with_spec, with_spec_content, with_url, ScalarOption};
use crate::render::{render_page, PageContext, SCRIPT_TAG};
use crate::runtime_config::{DEFAULT_LANGUAGE, DEFAULT_TITLE};
use crate::source::{HttpClient, SpecDocument};

/// Settings consumed by the page template.
///
/// Built through [`ScalarOption`]s and read-only once a [`Scalar`] exists.
#[derive(Debug, Clone)]
pub struct DocsConfig {
    pub(crate) title: String,
    pub(crate) language: String,
    pub(crate) script: &'static str,
    pub(crate) content: String,
    pub(crate) http_client: Option<HttpClient>,
}

impl Default for DocsConfig {
    fn default() -> Self {
        Self {
            title: DEFAULT_TITLE.to_string(),
            language: DEFAULT_LANGUAGE.to_string(),
            script: SCRIPT_TAG.as_str(),
            content: String::new(),
            http_client: None,
        }
    }
}

impl DocsConfig {
    /// Page title.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// `lang` attribute of the page.
    pub fn language(&self) -> &str {
        &self.language
    }

    /// Escaped spec JSON, ready to sit inside a double-quoted JS string.
    pub fn content(&self) -> &str {
        &self.content
    }

    /// `<script>` element that loads the viewer.
    pub fn script(&self) -> &str {
        self.script
    }

    /// Client used by URL options, if one was configured.
    pub fn http_client(&self) -> Option<&HttpClient> {
        self.http_client.as_ref()
    }
}

/// A configured API reference page.
///
/// # Example
///
/// ```no_run
/// use scalar_docs::{options, Scalar};
///
/// let scalar = Scalar::new([
///     options::with_title("Pet Store"),
///     options::with_file("openapi.json"),
/// ])?;
/// let mut out = std::fs::File::create("docs.html")?;
/// scalar.render_docs(&mut out)?;
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone)]
pub struct Scalar {
    config: DocsConfig,
}

impl Scalar {
    /// Apply `options` in order to the default configuration.
    ///
    /// Stops at the first failing option. Fails with
    /// [`DocsError::SpecRequired`] if no option produced content.
    pub fn new<I>(options: I) -> Result<Self, DocsError>
    where
        I: IntoIterator<Item = ScalarOption>,
    {
        let mut config = DocsConfig::default();
        for option in options {
            option.apply(&mut config)?;
        }
        if config.content.is_empty() {
            return Err(DocsError::SpecRequired);
        }
        Ok(Self { config })
    }

    /// Load the spec from a path or `file://` URL, then apply `options`.
    pub fn from_file<I>(file_path: &str, options: I) -> Result<Self, DocsError>
    where
        I: IntoIterator<Item = ScalarOption>,
    {
        Self::new(std::iter::once(with_file(file_path)).chain(options))
    }

    /// Fetch the spec over HTTP(S), then apply `options`.
    pub fn from_url<I>(spec_url: &str, options: I) -> Result<Self, DocsError>
    where
        I: IntoIterator<Item = ScalarOption>,
    {
        Self::new(std::iter::once(with_url(spec_url)).chain(options))
    }

    /// Read the spec from a document, then apply `options`.
    pub fn from_spec<D, I>(spec: Option<&D>, options: I) -> Result<Self, DocsError>
    where
        D: SpecDocument + ?Sized,
        I: IntoIterator<Item = ScalarOption>,
    {
        Self::new(std::iter::once(with_spec(spec)).chain(options))
    }

    /// Use raw spec text, then apply `options`.
    ///
    /// ```
    /// use scalar_docs::{options, Scalar};
    ///
    /// let scalar = Scalar::from_content(r#"{"openapi": "3.1.0"}"#, [options::with_title("Pets")])?;
    /// assert!(scalar.render_to_string()?.contains("<title>Pets</title>"));
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn from_content<I>(content: &str, options: I) -> Result<Self, DocsError>
    where
        I: IntoIterator<Item = ScalarOption>,
    {
        Self::new(std::iter::once(with_spec_content(content)).chain(options))
    }

    /// Resolved configuration.
    pub fn config(&self) -> &DocsConfig {
        &self.config
    }

    /// Render the page and write it to `writer`.
    pub fn render_docs<W: Write>(&self, mut writer: W) -> Result<(), RenderError> {
        let html = self.render_to_string()?;
        writer.write_all(html.as_bytes())?;
        writer.flush()?;
        Ok(())
    }

    /// Render the page into a `String`.
    pub fn render_to_string(&self) -> Result<String, RenderError> {
        let html = render_page(&PageContext {
            title: &self.config.title,
            language: &self.config.language,
            script: self.config.script,
            content: &self.config.content,
        })?;
        info!(title = %self.config.title, bytes = html.len(), "rendered API reference page");
        Ok(html)
    }
}
