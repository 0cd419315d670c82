use std::time::Duration;

use reqwest::Url;

/// Location of the Tika server, plus the optional client-side request timeout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceConfig {
    endpoint: Url,
    timeout: Option<Duration>,
}

impl ServiceConfig {
    pub fn new(endpoint: Url) -> Result<Self, ConfigError> {
        validate_endpoint(&endpoint)?;
        Ok(Self {
            endpoint,
            timeout: None,
        })
    }

    pub fn parse(endpoint: &str) -> Result<Self, ConfigError> {
        Self::builder().endpoint(endpoint).build()
    }

    pub fn builder() -> ServiceConfigBuilder {
        ServiceConfigBuilder::default()
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout
    }
}

#[derive(Debug, Clone, Default)]
pub struct ServiceConfigBuilder {
    endpoint: Option<String>,
    timeout: Option<Duration>,
}

impl ServiceConfigBuilder {
    pub fn endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = Some(endpoint.into());
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn build(self) -> Result<ServiceConfig, ConfigError> {
        let raw = self.endpoint.ok_or(ConfigError::MissingEndpoint)?;
        let endpoint = Url::parse(raw.trim()).map_err(|e| ConfigError::InvalidEndpoint {
            endpoint: raw.clone(),
            reason: e.to_string(),
        })?;
        validate_endpoint(&endpoint)?;

        Ok(ServiceConfig {
            endpoint,
            timeout: self.timeout,
        })
    }
}

fn validate_endpoint(endpoint: &Url) -> Result<(), ConfigError> {
    match endpoint.scheme() {
        "http" | "https" if endpoint.has_host() => Ok(()),
        "http" | "https" => Err(ConfigError::InvalidEndpoint {
            endpoint: endpoint.to_string(),
            reason: "missing host".to_string(),
        }),
        other => Err(ConfigError::UnsupportedScheme(other.to_string())),
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("tika endpoint is required")]
    MissingEndpoint,
    #[error("invalid tika endpoint {endpoint}: {reason}")]
    InvalidEndpoint { endpoint: String, reason: String },
    #[error("unsupported endpoint scheme: {0}")]
    UnsupportedScheme(String),
}
