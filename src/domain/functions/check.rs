use crate::domain::app::App;
use crate::domain::continent::Continent;
use crate::domain::country::Country;
use crate::domain::geography::Geography;
use crate::domain::universe::Universe;
use crate::ports::inbound::client::GameInteraction;
use crate::ports::outbound::country_store::CountryStore;
use crate::ports::outbound::geography_store::GeographyStore;

/// How many map shapes found a country, and the labels of those that did not.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeographyReport {
    pub total: usize,
    pub matched: usize,
    pub unmatched: Vec<String>,
}

impl GeographyReport {
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.unmatched.is_empty()
    }
}

#[must_use]
pub fn check_geographies(countries: Vec<Country>, geographies: &[Geography]) -> GeographyReport {
    let universe = Universe::new(Continent::World.select(countries));

    let unmatched: Vec<String> = geographies
        .iter()
        .filter(|geography| universe.resolve(geography).is_none())
        .map(Geography::label)
        .collect();

    GeographyReport {
        total: geographies.len(),
        matched: geographies.len() - unmatched.len(),
        unmatched,
    }
}

impl<CS, GS> App<CS, GS>
where
    CS: CountryStore + Send + Sync,
    GS: GeographyStore + Send + Sync,
{
    pub async fn check_command<I: GameInteraction>(&self, interaction: &I) {
        let (countries, geographies) = match (
            self.country_store.fetch_all().await,
            self.geography_store.fetch_all().await,
        ) {
            (Ok(countries), Ok(geographies)) => (countries, geographies),
            (Err(why), _) => {
                log::error!("couldn't load countries: {why}");
                reply_failure(interaction).await;
                return;
            }
            (_, Err(why)) => {
                log::error!("couldn't load geographies: {why}");
                reply_failure(interaction).await;
                return;
            }
        };

        let report = check_geographies(countries, &geographies);
        if report.is_clean() {
            log::info!("All {} geographies matched a country", report.total);
        } else {
            for label in &report.unmatched {
                log::warn!("Unmatched geography: {label}");
            }
        }

        if let Err(why) = interaction.send_geography_report(report).await {
            log::warn!("couldn't send geography report: {why}");
        }
    }
}

async fn reply_failure<I: GameInteraction>(interaction: &I) {
    if let Err(why) = interaction
        .reply(String::from("Could not load the map data :("))
        .await
    {
        log::warn!("couldn't send load failure message: {why}");
    }
}
