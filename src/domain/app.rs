use crate::ports::outbound::country_store::CountryStore;
use crate::ports::outbound::geography_store::GeographyStore;

pub struct App<CS, GS> {
    pub country_store: CS,
    pub geography_store: GS,
}

impl<CS, GS> App<CS, GS>
where
    CS: CountryStore + Send + Sync,
    GS: GeographyStore + Send + Sync,
{
    pub fn new(country_store: CS, geography_store: GS) -> Self {
        Self {
            country_store,
            geography_store,
        }
    }
}
