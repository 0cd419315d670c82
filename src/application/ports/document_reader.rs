use async_trait::async_trait;

use crate::domain::Document;

#[async_trait]
pub trait DocumentReader: Send + Sync {
    type Error: std::error::Error + Send + Sync + 'static;

    async fn get(&self) -> Result<Vec<Document>, Self::Error>;
}
