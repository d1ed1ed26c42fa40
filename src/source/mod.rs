//! Spec source resolution.
//!
//! Each resolver turns one kind of reference into JSON text:
//!
//! - [`file`] - local paths and `file://` URLs
//! - [`remote`] - `http://` and `https://` URLs fetched with [`HttpClient`]
//! - [`document`] - objects implementing [`SpecDocument`]
//!
//! Resolved text is passed through [`SpecContent::normalize`](crate::SpecContent::normalize),
//! so a source that is readable but not JSON resolves to an empty string.

pub mod document;
pub mod file;
pub mod remote;

pub use document::{SpecDocument, StaticSpecDocument};
pub use file::{load_spec_from_file, normalize_file_url, read_file_from_url};
pub use remote::{fetch_from_url, load_spec_from_url, validate_url, HttpClient};
