use std::path::PathBuf;
use std::sync::Arc;

use reqwest::{Client, Url};

use crate::application::ports::{Resource, ResourceError, ResourceLoader};

use super::file_resource::FileResource;
use super::url_resource::UrlResource;

pub const CLASSPATH_PREFIX: &str = "classpath:";

/// Resolves `classpath:` references, URLs and plain filesystem paths.
pub struct DefaultResourceLoader {
    classpath_root: PathBuf,
    client: Client,
}

impl DefaultResourceLoader {
    pub fn new(classpath_root: impl Into<PathBuf>) -> Self {
        Self {
            classpath_root: classpath_root.into(),
            client: Client::new(),
        }
    }
}

impl Default for DefaultResourceLoader {
    fn default() -> Self {
        Self::new(".")
    }
}

impl ResourceLoader for DefaultResourceLoader {
    fn get_resource(&self, location: &str) -> Result<Arc<dyn Resource>, ResourceError> {
        let location = location.trim();
        if location.is_empty() {
            return Err(ResourceError::InvalidLocation(
                "location must not be empty".to_string(),
            ));
        }

        if let Some(relative) = location.strip_prefix(CLASSPATH_PREFIX) {
            let path = self.classpath_root.join(relative.trim_start_matches('/'));
            return Ok(Arc::new(FileResource::new(path)));
        }

        match Url::parse(location) {
            Ok(url) if matches!(url.scheme(), "http" | "https" | "file") => {
                return Ok(Arc::new(UrlResource::with_client(url, self.client.clone())));
            }
            Ok(url) if url.scheme().len() > 1 => {
                return Err(ResourceError::InvalidLocation(format!(
                    "unsupported scheme `{}` in {location}",
                    url.scheme()
                )));
            }
            // Plain paths, and drive letters: `C:\docs\a.pdf` parses with scheme `c`.
            _ => {}
        }

        Ok(Arc::new(FileResource::new(location)))
    }
}
