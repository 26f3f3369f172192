pub mod country_store;
pub mod geography_store;
