use std::sync::Arc;

use crate::application::ports::{
    Resource, ResourceError, ResourceLoader, TextExtractorError, TextFormatter,
};
use crate::application::services::RemoteExtractionClient;
use crate::infrastructure::text_processing::ExtractedTextFormatter;
use crate::presentation::config::ServiceConfig;

use super::tika_server_client::TikaServerClient;

#[derive(Debug, thiserror::Error)]
pub enum ReaderFactoryError {
    #[error("resource resolution failed")]
    Resource(#[from] ResourceError),
    #[error("extraction client initialization failed")]
    Client(#[from] TextExtractorError),
}

/// Wires a resource, a formatter and a Tika client into a [`RemoteExtractionClient`].
pub struct ReaderFactory;

impl ReaderFactory {
    pub fn from_resource(
        resource: Arc<dyn Resource>,
        config: &ServiceConfig,
    ) -> Result<RemoteExtractionClient, ReaderFactoryError> {
        Self::with_formatter(resource, Arc::new(ExtractedTextFormatter::default()), config)
    }

    pub fn from_location(
        location: &str,
        loader: &dyn ResourceLoader,
        config: &ServiceConfig,
    ) -> Result<RemoteExtractionClient, ReaderFactoryError> {
        let resource = loader.get_resource(location)?;
        Self::from_resource(resource, config)
    }

    pub fn with_formatter(
        resource: Arc<dyn Resource>,
        text_formatter: Arc<dyn TextFormatter>,
        config: &ServiceConfig,
    ) -> Result<RemoteExtractionClient, ReaderFactoryError> {
        let extractor = TikaServerClient::new(config)?;
        tracing::debug!(
            endpoint = %config.endpoint(),
            resource = %resource.description(),
            "Creating Tika reader"
        );
        Ok(RemoteExtractionClient::new(
            resource,
            text_formatter,
            Arc::new(extractor),
        ))
    }
}
