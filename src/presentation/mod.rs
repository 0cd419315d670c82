pub mod config;

pub use config::{ConfigError, Environment, ServiceConfig, Settings, load_settings};
