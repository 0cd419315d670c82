mod document;
mod document_id;

pub use document::{Document, METADATA_SOURCE};
pub use document_id::DocumentId;
