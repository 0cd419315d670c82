use std::path::{Path, PathBuf};

use async_trait::async_trait;
use reqwest::Url;

use crate::application::ports::{Resource, ResourceError};

pub struct FileResource {
    path: PathBuf,
}

impl FileResource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl Resource for FileResource {
    fn filename(&self) -> Option<String> {
        self.path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
    }

    fn uri(&self) -> Result<Url, ResourceError> {
        let absolute = std::path::absolute(&self.path)
            .map_err(|_| ResourceError::NoUri(self.description()))?;
        Url::from_file_path(&absolute).map_err(|()| ResourceError::NoUri(self.description()))
    }

    async fn read_bytes(&self) -> Result<Vec<u8>, ResourceError> {
        tokio::fs::read(&self.path)
            .await
            .map_err(|source| ResourceError::Read {
                path: self.path.clone(),
                source,
            })
    }

    fn description(&self) -> String {
        format!("file [{}]", self.path.display())
    }
}
