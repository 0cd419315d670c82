use std::path::PathBuf;

use async_trait::async_trait;
use reqwest::Url;

/// An addressable byte source: a local file, a classpath entry or a remote URL.
#[async_trait]
pub trait Resource: Send + Sync {
    /// File name of the resource, if it has one.
    fn filename(&self) -> Option<String>;

    /// Identifier used when there is no file name.
    fn uri(&self) -> Result<Url, ResourceError>;

    /// Reads the whole resource. Any handle opened for this is released before returning.
    async fn read_bytes(&self) -> Result<Vec<u8>, ResourceError>;

    fn description(&self) -> String;
}

#[derive(Debug, thiserror::Error)]
pub enum ResourceError {
    #[error("failed to read {path}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("fetch failed: {0}")]
    Fetch(String),
    #[error("{url} returned {status}")]
    UnexpectedStatus { url: String, status: u16 },
    #[error("{0} cannot be resolved to a URI")]
    NoUri(String),
    #[error("invalid resource location: {0}")]
    InvalidLocation(String),
}
