mod file_system;

use crate::adapters::outbound::geography_store::file_system::FileSystem;
use crate::ports::outbound::geography_store::GeographyStore;

#[must_use]
pub fn init_geography_store() -> impl GeographyStore {
    FileSystem::create()
}
