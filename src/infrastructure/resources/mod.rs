mod byte_array_resource;
mod default_resource_loader;
mod file_resource;
mod url_resource;

pub use byte_array_resource::ByteArrayResource;
pub use default_resource_loader::{CLASSPATH_PREFIX, DefaultResourceLoader};
pub use file_resource::FileResource;
pub use url_resource::UrlResource;
