use crate::domain::country::Country;
use crate::ports::outbound::country_store::{CountryStore, CountryStoreError};
use async_trait::async_trait;
use std::env;

const DEFAULT_COUNTRIES_PATH: &str = "data/countries.json";

/// Reads a REST Countries v3.1 response saved to disk.
pub struct FileSystem {
    path: String,
}

fn parse_countries(json: &str) -> Result<Vec<Country>, CountryStoreError> {
    serde_json::from_str::<Vec<Country>>(json).map_err(|why| {
        log::warn!("Error parsing countries {why:?}");
        CountryStoreError::new(format!("invalid country list: {why}"))
    })
}

#[async_trait]
impl CountryStore for FileSystem {
    fn create() -> Self {
        let path = env::var("COUNTRIES_PATH").unwrap_or_else(|_| {
            log::info!("COUNTRIES_PATH not set, using {DEFAULT_COUNTRIES_PATH}");
            String::from(DEFAULT_COUNTRIES_PATH)
        });
        Self { path }
    }

    async fn fetch_all(&self) -> Result<Vec<Country>, CountryStoreError> {
        let json = match tokio::fs::read_to_string(&self.path).await {
            Err(why) => {
                log::warn!("Error reading countries {why:?}");
                return Err(CountryStoreError::new(format!(
                    "couldn't read {}",
                    self.path
                )));
            }
            Ok(json) => json,
        };

        let countries = parse_countries(&json)?;
        log::info!("Loaded {} countries from {}", countries.len(), self.path);
        Ok(countries)
    }
}
