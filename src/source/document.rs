use serde_json::Value;

/// An object that can render a complete spec document as text.
///
/// Implemented by generated-spec holders so they can be passed to
/// [`with_spec`](crate::options::with_spec) without going through a file.
pub trait SpecDocument {
    fn read_doc(&self) -> String;
}

impl SpecDocument for str {
    fn read_doc(&self) -> String {
        self.to_string()
    }
}

impl SpecDocument for String {
    fn read_doc(&self) -> String {
        self.clone()
    }
}

impl SpecDocument for Value {
    fn read_doc(&self) -> String {
        match self {
            Value::Null => String::new(),
            other => other.to_string(),
        }
    }
}

/// Spec document held as a fixed template string.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StaticSpecDocument {
    pub template: String,
}

impl StaticSpecDocument {
    /// Document that always reads as `template`.
    pub fn new(template: impl Into<String>) -> Self {
        Self {
            template: template.into(),
        }
    }
}

impl SpecDocument for StaticSpecDocument {
    fn read_doc(&self) -> String {
        self.template.clone()
    }
}
