use crate::domain::country::Country;
use async_trait::async_trait;
use thiserror::Error;

#[cfg(test)]
use mockall::automock;

#[cfg_attr(test, derive(Clone))]
#[derive(Debug, Error)]
#[error("Error loading countries: {0}")]
pub struct CountryStoreError(String);

impl CountryStoreError {
    #[must_use]
    pub fn new(msg: String) -> Self {
        Self(msg)
    }
}

#[cfg_attr(test, automock)]
#[async_trait]
pub trait CountryStore {
    fn create() -> Self;
    async fn fetch_all(&self) -> Result<Vec<Country>, CountryStoreError>;
}
