use std::sync::Arc;

use super::resource::{Resource, ResourceError};

pub trait ResourceLoader: Send + Sync {
    fn get_resource(&self, location: &str) -> Result<Arc<dyn Resource>, ResourceError>;
}
