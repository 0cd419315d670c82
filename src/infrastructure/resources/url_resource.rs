use async_trait::async_trait;
use reqwest::{Client, Url};

use crate::application::ports::{Resource, ResourceError};

/// Resource addressed by an `http`, `https` or `file` URL.
pub struct UrlResource {
    url: Url,
    client: Client,
}

impl UrlResource {
    pub fn new(url: Url) -> Self {
        Self::with_client(url, Client::new())
    }

    pub fn with_client(url: Url, client: Client) -> Self {
        Self { url, client }
    }

    pub fn parse(url: &str) -> Result<Self, ResourceError> {
        let url = Url::parse(url)
            .map_err(|e| ResourceError::InvalidLocation(format!("{url}: {e}")))?;
        Ok(Self::new(url))
    }

    async fn fetch(&self) -> Result<Vec<u8>, ResourceError> {
        let response = self
            .client
            .get(self.url.clone())
            .send()
            .await
            .map_err(|e| ResourceError::Fetch(format!("{}: {e}", self.url)))?;

        let status = response.status();
        if !status.is_success() {
            return Err(ResourceError::UnexpectedStatus {
                url: self.url.to_string(),
                status: status.as_u16(),
            });
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| ResourceError::Fetch(format!("{}: {e}", self.url)))?;

        Ok(bytes.to_vec())
    }
}

#[async_trait]
impl Resource for UrlResource {
    /// Last path segment, or `None` for URLs ending in `/`.
    fn filename(&self) -> Option<String> {
        self.url
            .path_segments()
            .and_then(|mut segments| segments.next_back())
            .filter(|segment| !segment.is_empty())
            .map(str::to_string)
    }

    fn uri(&self) -> Result<Url, ResourceError> {
        Ok(self.url.clone())
    }

    async fn read_bytes(&self) -> Result<Vec<u8>, ResourceError> {
        if self.url.scheme() != "file" {
            return self.fetch().await;
        }

        let path = self
            .url
            .to_file_path()
            .map_err(|()| ResourceError::InvalidLocation(self.url.to_string()))?;
        tokio::fs::read(&path)
            .await
            .map_err(|source| ResourceError::Read { path, source })
    }

    fn description(&self) -> String {
        format!("URL [{}]", self.url)
    }
}
