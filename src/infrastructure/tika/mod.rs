mod reader_factory;
mod tika_server_client;

pub use reader_factory::{ReaderFactory, ReaderFactoryError};
pub use tika_server_client::{TIKA_PATH, TikaServerClient};
