//! # scalar-docs
//!
//! **scalar-docs** turns an OpenAPI (or Swagger) document into a single,
//! self-contained HTML page that boots the Scalar API reference viewer.
//!
//! ## Overview
//!
//! A page is described by a [`Scalar`] value, built once from an ordered
//! list of [`options`] (or the fluent [`ScalarBuilder`]) and then rendered
//! any number of times to an [`std::io::Write`].
//!
//! The spec can come from:
//!
//! - a local path or `file://` URL ([`options::with_file`])
//! - an `http://`/`https://` URL ([`options::with_url`])
//! - raw JSON text ([`options::with_spec_content`])
//! - an in-memory map or map supplier ([`options::with_spec_object`])
//! - any [`SpecDocument`] implementation ([`options::with_spec`])
//!
//! ## Architecture
//!
//! - **[`source`]** - resolves a file, URL or document to text
//! - **[`normalize`]** - keeps only syntactically valid JSON
//! - **[`escape`]** - makes the JSON safe inside an inline script string
//! - **[`options`]** / **[`builder`]** - ordered, fail-fast configuration steps
//! - **[`scalar`]** - the finished configuration and the render call
//! - **[`runtime_config`]** / **[`logging`]** - environment-driven defaults and tracing setup
//!
//! ```mermaid
//! sequenceDiagram
//!     participant Caller
//!     participant Options as ScalarOption list
//!     participant Source as source::*
//!     participant Norm as SpecContent::normalize
//!     participant Esc as escape_js_string
//!     participant Page as Scalar::render_docs
//!
//!     Caller->>Options: Scalar::new([...])
//!     Options->>Source: load_spec_from_file / load_spec_from_url
//!     Source-->>Norm: raw text
//!     Norm-->>Esc: JSON text (or empty)
//!     Esc-->>Options: escaped content
//!     Options-->>Caller: Scalar (or first DocsError)
//!     Caller->>Page: render_docs(writer)
//!     Page-->>Caller: HTML written
//! ```
//!
//! ## Quick Start
//!
//! ```no_run
//! use scalar_docs::{options, Scalar};
//!
//! let scalar = Scalar::from_file("openapi.json", [options::with_title("Pet Store")])?;
//! scalar.render_docs(std::io::stdout())?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! ## Errors
//!
//! Construction failures are [`DocsError`]s. Failures inside a file or URL
//! option are wrapped in [`DocsError::Load`]; use [`DocsError::root`] to
//! match on the underlying kind. Rendering failures are [`RenderError`]s.
//! Nothing is retried.

pub mod builder;
pub mod error;
pub mod escape;
pub mod logging;
pub mod normalize;
pub mod options;
mod render;
pub mod runtime_config;
pub mod scalar;
pub mod source;

pub use builder::ScalarBuilder;
pub use error::{DocsError, RenderError, SpecOrigin};
pub use escape::escape_js_string;
pub use normalize::{is_valid_json, normalize_spec_content, SpecContent};
pub use options::ScalarOption;
pub use scalar::{DocsConfig, Scalar};
pub use source::{HttpClient, SpecDocument, StaticSpecDocument};
