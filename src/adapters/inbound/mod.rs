pub mod terminal;

use crate::adapters::inbound::terminal::client::Terminal;
use crate::domain::app::App;
use crate::ports::inbound::client::Client;
use crate::ports::outbound::country_store::CountryStore;
use crate::ports::outbound::geography_store::GeographyStore;

pub fn create_client<CS, GS>(app: App<CS, GS>) -> impl Client
where
    CS: CountryStore + Send + Sync + 'static,
    GS: GeographyStore + Send + Sync + 'static,
{
    Terminal::new(app)
}
