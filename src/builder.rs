use crate::error::DocsError;
use crate::normalize::SpecContent;
use crate::options::{
    with_file, with_http_client, with_language, with_spec, with_spec_content, with_spec_object,
    with_title, with_url, ScalarOption,
};
use crate::scalar::Scalar;
use crate::source::{HttpClient, SpecDocument};

/// Fluent front end over [`ScalarOption`]s.
///
/// Every method appends one option; nothing is resolved until
/// [`build()`](ScalarBuilder::build), which applies them in call order.
///
/// # Example
///
/// ```rust,ignore
/// use scalar_docs::{HttpClient, ScalarBuilder};
/// use std::time::Duration;
///
/// let scalar = ScalarBuilder::new()
///     .title("Pet Store")
///     .language("pt-BR")
///     .http_client(Some(HttpClient::new(Duration::from_secs(10))?))
///     .url("https://petstore3.swagger.io/api/v3/openapi.json")
///     .build()?;
/// ```
#[derive(Debug, Default)]
pub struct ScalarBuilder {
    options: Vec<ScalarOption>,
}

impl ScalarBuilder {
    /// Empty builder with default title and language.
    pub fn new() -> Self {
        Self::default()
    }

    /// See [`with_title`].
    pub fn title(self, title: &str) -> Self {
        self.option(with_title(title))
    }

    /// See [`with_language`].
    pub fn language(self, language: &str) -> Self {
        self.option(with_language(language))
    }

    /// Spec from a path or `file://` URL.
    pub fn file(self, file_path: &str) -> Self {
        self.option(with_file(file_path))
    }

    /// Spec fetched over HTTP(S).
    pub fn url(self, spec_url: &str) -> Self {
        self.option(with_url(spec_url))
    }

    /// Spec read from a document; `None` fails the build.
    pub fn spec<D>(self, spec: Option<&D>) -> Self
    where
        D: SpecDocument + ?Sized,
    {
        self.option(with_spec(spec))
    }

    /// Raw spec text.
    pub fn content(self, content: &str) -> Self {
        self.option(with_spec_content(content))
    }

    /// In-memory document or supplier.
    pub fn object(self, content: SpecContent) -> Self {
        self.option(with_spec_object(content))
    }

    /// Must precede [`url`](ScalarBuilder::url) to be used by it.
    pub fn http_client(self, client: Option<HttpClient>) -> Self {
        self.option(with_http_client(client))
    }

    /// Append a custom step.
    pub fn option(mut self, option: ScalarOption) -> Self {
        self.options.push(option);
        self
    }

    /// Apply every option in order.
    pub fn build(self) -> Result<Scalar, DocsError> {
        Scalar::new(self.options)
    }
}
