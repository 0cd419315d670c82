use async_trait::async_trait;

/// Converts raw document bytes into plain text.
///
/// `Ok(None)` means the service answered successfully but had no text to return.
#[async_trait]
pub trait TextExtractor: Send + Sync {
    async fn extract_text(&self, data: Vec<u8>) -> Result<Option<String>, TextExtractorError>;
}

#[derive(Debug, thiserror::Error)]
pub enum TextExtractorError {
    #[error("http client build failed: {0}")]
    ClientBuild(String),
    #[error("request failed: {0}")]
    Request(String),
    #[error("extraction service returned {status}: {body}")]
    UnexpectedStatus { status: u16, body: String },
    #[error("response body unreadable: {0}")]
    Body(String),
}
