use async_trait::async_trait;
use reqwest::header::ACCEPT;
use reqwest::{Client, StatusCode};

use crate::application::ports::{TextExtractor, TextExtractorError};
use crate::presentation::config::ServiceConfig;

pub const TIKA_PATH: &str = "/tika";
const TEXT_PLAIN: &str = "text/plain";

/// Sends documents to the `PUT /tika` resource of an Apache Tika server.
pub struct TikaServerClient {
    client: Client,
    endpoint: String,
}

impl TikaServerClient {
    pub fn new(config: &ServiceConfig) -> Result<Self, TextExtractorError> {
        let mut builder = Client::builder();
        if let Some(timeout) = config.timeout() {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|e| TextExtractorError::ClientBuild(e.to_string()))?;

        Ok(Self {
            client,
            endpoint: config.endpoint().as_str().trim_end_matches('/').to_string(),
        })
    }

    pub fn url(&self) -> String {
        format!("{}{}", self.endpoint, TIKA_PATH)
    }
}

#[async_trait]
impl TextExtractor for TikaServerClient {
    #[tracing::instrument(skip(self, data), fields(endpoint = %self.endpoint, byte_count = data.len()))]
    async fn extract_text(&self, data: Vec<u8>) -> Result<Option<String>, TextExtractorError> {
        let response = self
            .client
            .put(self.url())
            .header(ACCEPT, TEXT_PLAIN)
            .body(data)
            .send()
            .await
            .map_err(|e| TextExtractorError::Request(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(TextExtractorError::UnexpectedStatus {
                status: status.as_u16(),
                body,
            });
        }

        // Tika answers 204 when the document holds no extractable text.
        if status == StatusCode::NO_CONTENT {
            tracing::debug!("Tika returned no content");
            return Ok(None);
        }

        let text = response
            .text()
            .await
            .map_err(|e| TextExtractorError::Body(e.to_string()))?;

        Ok(Some(text))
    }
}
