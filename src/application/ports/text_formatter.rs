/// Pure cleanup applied to extracted text before it is packaged into a document.
pub trait TextFormatter: Send + Sync {
    fn format(&self, text: &str) -> String;
}
