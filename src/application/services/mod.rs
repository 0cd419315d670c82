mod remote_extraction_client;

pub use remote_extraction_client::{ExtractionError, INVALID_SOURCE_PREFIX, RemoteExtractionClient};
