mod document_reader;
mod resource;
mod resource_loader;
mod text_extractor;
mod text_formatter;

pub use document_reader::DocumentReader;
pub use resource::{Resource, ResourceError};
pub use resource_loader::ResourceLoader;
pub use text_extractor::{TextExtractor, TextExtractorError};
pub use text_formatter::TextFormatter;
