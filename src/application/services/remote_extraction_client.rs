use std::sync::Arc;

use async_trait::async_trait;

use crate::application::ports::{
    DocumentReader, Resource, ResourceError, TextExtractor, TextExtractorError, TextFormatter,
};
use crate::domain::{Document, METADATA_SOURCE};

pub const INVALID_SOURCE_PREFIX: &str = "Invalid source URI";

/// Reads one resource, sends it to the extraction service and packages the answer
/// as a single [`Document`].
pub struct RemoteExtractionClient {
    resource: Arc<dyn Resource>,
    text_formatter: Arc<dyn TextFormatter>,
    text_extractor: Arc<dyn TextExtractor>,
}

impl RemoteExtractionClient {
    pub fn new(
        resource: Arc<dyn Resource>,
        text_formatter: Arc<dyn TextFormatter>,
        text_extractor: Arc<dyn TextExtractor>,
    ) -> Self {
        Self {
            resource,
            text_formatter,
            text_extractor,
        }
    }

    #[tracing::instrument(skip(self), fields(resource = %self.resource.description()))]
    pub async fn extract(&self) -> Result<Document, ExtractionError> {
        let data = self.resource.read_bytes().await?;
        let byte_count = data.len();

        let text = self
            .text_extractor
            .extract_text(data)
            .await?
            .unwrap_or_default();

        tracing::debug!(byte_count, text_len = text.len(), "Extraction service responded");

        Ok(self.to_document(&text))
    }

    /// File name of the resource when it has a non-blank one, its URI otherwise.
    pub fn resource_name(&self) -> Result<String, ResourceError> {
        match self.resource.filename() {
            Some(name) if !name.trim().is_empty() => Ok(name),
            _ => self.resource.uri().map(|uri| uri.to_string()),
        }
    }

    fn to_document(&self, text: &str) -> Document {
        let content = self.text_formatter.format(text);
        Document::new(content).with_metadata(METADATA_SOURCE, self.source_name())
    }

    fn source_name(&self) -> String {
        self.resource_name().unwrap_or_else(|e| {
            tracing::warn!(error = %e, "Falling back to placeholder source name");
            format!("{INVALID_SOURCE_PREFIX}: {e}")
        })
    }
}

#[async_trait]
impl DocumentReader for RemoteExtractionClient {
    type Error = ExtractionError;

    async fn get(&self) -> Result<Vec<Document>, ExtractionError> {
        let document = self.extract().await?;
        Ok(vec![document])
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ExtractionError {
    #[error("resource read failed")]
    ResourceRead(#[from] ResourceError),
    #[error("service call failed")]
    ServiceCall(#[from] TextExtractorError),
}
