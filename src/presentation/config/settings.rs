use std::path::PathBuf;
use std::time::Duration;

use ::config::{Config, File};
use serde::Deserialize;

use super::environment::Environment;
use super::service_config::{ConfigError, ServiceConfig};

pub const DEFAULT_TIKA_ENDPOINT: &str = "http://localhost:9998";
const DEFAULT_TIMEOUT_SECS: i64 = 30;

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub tika: TikaSettings,
    pub logging: LoggingSettings,
    #[serde(default)]
    pub formatter: FormatterSettings,
    #[serde(default)]
    pub resources: ResourceSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TikaSettings {
    pub endpoint: String,
    pub timeout_secs: Option<u64>,
}

impl TikaSettings {
    pub fn service_config(&self) -> Result<ServiceConfig, ConfigError> {
        let builder = ServiceConfig::builder().endpoint(self.endpoint.as_str());
        match self.timeout_secs {
            Some(0) | None => builder.build(),
            Some(secs) => builder.timeout(Duration::from_secs(secs)).build(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    pub level: String,
    pub enable_json: bool,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct FormatterSettings {
    pub left_align: bool,
    pub top_pages_to_skip_before_delete: usize,
    pub top_text_lines_to_delete: usize,
    pub bottom_text_lines_to_delete: usize,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ResourceSettings {
    /// Directory that `classpath:` locations are resolved against.
    pub classpath_root: Option<PathBuf>,
}

impl ResourceSettings {
    pub fn classpath_root(&self) -> PathBuf {
        self.classpath_root
            .clone()
            .unwrap_or_else(|| PathBuf::from("."))
    }
}

/// Layers built-in defaults, an optional `appsettings.<environment>` file and
/// `APP_`-prefixed environment variables (`APP_TIKA__ENDPOINT`, ...).
pub fn load_settings(environment: Environment) -> Result<Settings, ::config::ConfigError> {
    Config::builder()
        .set_default("tika.endpoint", DEFAULT_TIKA_ENDPOINT)?
        .set_default("tika.timeout_secs", DEFAULT_TIMEOUT_SECS)?
        .set_default("logging.level", "info")?
        .set_default("logging.enable_json", false)?
        .add_source(
            File::with_name(&format!("appsettings.{}", environment.as_str())).required(false),
        )
        .add_source(
            ::config::Environment::with_prefix("APP")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        )
        .build()?
        .try_deserialize()
}
