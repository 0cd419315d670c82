use std::collections::HashMap;

use super::document_id::DocumentId;

/// Metadata key holding the name or URI of the resource a document was read from.
pub const METADATA_SOURCE: &str = "source";

/// Plain text extracted from a single resource, plus free-form string metadata.
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    pub id: DocumentId,
    pub content: String,
    pub metadata: HashMap<String, String>,
}

impl Document {
    pub fn new(content: String) -> Self {
        Self {
            id: DocumentId::new(),
            content,
            metadata: HashMap::new(),
        }
    }

    pub fn with_metadata(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.metadata.insert(key.into(), value.into());
        self
    }

    pub fn source(&self) -> Option<&str> {
        self.metadata.get(METADATA_SOURCE).map(String::as_str)
    }
}
