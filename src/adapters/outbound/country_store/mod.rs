mod file_system;

use crate::adapters::outbound::country_store::file_system::FileSystem;
use crate::ports::outbound::country_store::CountryStore;

#[must_use]
pub fn init_country_store() -> impl CountryStore {
    FileSystem::create()
}
