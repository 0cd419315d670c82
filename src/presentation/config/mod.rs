mod environment;
mod service_config;
mod settings;

pub use environment::Environment;
pub use service_config::{ConfigError, ServiceConfig, ServiceConfigBuilder};
pub use settings::{
    DEFAULT_TIKA_ENDPOINT, FormatterSettings, LoggingSettings, ResourceSettings, Settings,
    TikaSettings, load_settings,
};
