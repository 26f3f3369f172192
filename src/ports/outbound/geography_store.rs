use crate::domain::geography::Geography;
use async_trait::async_trait;
use thiserror::Error;

#[cfg(test)]
use mockall::automock;

#[cfg_attr(test, derive(Clone))]
#[derive(Debug, Error)]
#[error("Error loading map geographies: {0}")]
pub struct GeographyStoreError(String);

impl GeographyStoreError {
    #[must_use]
    pub fn new(msg: String) -> Self {
        Self(msg)
    }
}

#[cfg_attr(test, automock)]
#[async_trait]
pub trait GeographyStore {
    fn create() -> Self;
    async fn fetch_all(&self) -> Result<Vec<Geography>, GeographyStoreError>;
}
