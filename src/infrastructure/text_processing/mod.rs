mod extracted_text_formatter;

pub use extracted_text_formatter::{ExtractedTextFormatter, ExtractedTextFormatterBuilder};
