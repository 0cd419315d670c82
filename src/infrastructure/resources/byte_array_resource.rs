use async_trait::async_trait;
use reqwest::Url;

use crate::application::ports::{Resource, ResourceError};

const DEFAULT_DESCRIPTION: &str = "byte array resource";

/// In-memory resource. It has neither a file name nor a URI.
pub struct ByteArrayResource {
    data: Vec<u8>,
    description: String,
}

impl ByteArrayResource {
    pub fn new(data: impl Into<Vec<u8>>) -> Self {
        Self::with_description(data, DEFAULT_DESCRIPTION)
    }

    pub fn with_description(data: impl Into<Vec<u8>>, description: impl Into<String>) -> Self {
        Self {
            data: data.into(),
            description: description.into(),
        }
    }
}

#[async_trait]
impl Resource for ByteArrayResource {
    fn filename(&self) -> Option<String> {
        None
    }

    fn uri(&self) -> Result<Url, ResourceError> {
        Err(ResourceError::NoUri(self.description()))
    }

    async fn read_bytes(&self) -> Result<Vec<u8>, ResourceError> {
        Ok(self.data.clone())
    }

    fn description(&self) -> String {
        format!("{} ({} bytes)", self.description, self.data.len())
    }
}
