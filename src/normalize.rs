//! Normalization of in-memory spec content to JSON text.

use std::fmt;

use serde_json::{Map, Value};
use tracing::warn;

type MapSupplier = Box<dyn Fn() -> Map<String, Value> + Send + Sync>;

/// Spec content supplied directly by the caller.
pub enum SpecContent {
    /// Raw text; kept only if it is a single valid JSON value.
    Json(String),
    /// Structured document serialized to compact JSON.
    Map(Map<String, Value>),
    /// Deferred producer of a structured document, invoked once per normalization.
    Supplier(MapSupplier),
}

impl SpecContent {
    /// Wrap a closure that produces the document on demand.
    pub fn supplier<F>(f: F) -> Self
    where
        F: Fn() -> Map<String, Value> + Send + Sync + 'static,
    {
        SpecContent::Supplier(Box::new(f))
    }

    /// JSON text for this content, or an empty string when it is unusable.
    pub fn normalize(&self) -> String {
        match self {
            SpecContent::Json(text) => {
                let text = text.trim();
                if is_valid_json(text) {
                    text.to_string()
                } else {
                    warn!(len = text.len(), "spec content is not valid JSON, discarding");
                    String::new()
                }
            }
            SpecContent::Map(map) => serialize_map(map),
            SpecContent::Supplier(f) => serialize_map(&f()),
        }
    }
}

impl fmt::Debug for SpecContent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SpecContent::Json(text) => f.debug_tuple("Json").field(text).finish(),
            SpecContent::Map(map) => f.debug_tuple("Map").field(map).finish(),
            SpecContent::Supplier(_) => f.write_str("Supplier(..)"),
        }
    }
}

impl From<String> for SpecContent {
    fn from(text: String) -> Self {
        SpecContent::Json(text)
    }
}

impl From<&str> for SpecContent {
    fn from(text: &str) -> Self {
        SpecContent::Json(text.to_string())
    }
}

impl From<Map<String, Value>> for SpecContent {
    fn from(map: Map<String, Value>) -> Self {
        SpecContent::Map(map)
    }
}

fn serialize_map(map: &Map<String, Value>) -> String {
    serde_json::to_string(map).unwrap_or_default()
}

/// Normalize optional content; `None` yields an empty string.
pub fn normalize_spec_content(content: Option<&SpecContent>) -> String {
    content.map(SpecContent::normalize).unwrap_or_default()
}

/// True when `s` parses as exactly one JSON value with nothing trailing.
pub fn is_valid_json(s: &str) -> bool {
    serde_json::from_str::<serde::de::IgnoredAny>(s).is_ok()
}
