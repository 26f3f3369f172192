use crate::domain::app::App;
use crate::domain::continent::Continent;
use crate::domain::functions::game::state::{GameState, ShapeStatus};
use crate::domain::geography::Geography;
use crate::ports::inbound::client::GameInteraction;
use crate::ports::outbound::country_store::CountryStore;
use crate::ports::outbound::geography_store::GeographyStore;

/// Every map shape with the colour it gets in the running round.
#[derive(Debug, Clone, PartialEq)]
pub struct MapReport {
    pub continent: Continent,
    pub shapes: Vec<(String, ShapeStatus)>,
}

impl MapReport {
    #[must_use]
    pub fn count(&self, status: ShapeStatus) -> usize {
        self.shapes.iter().filter(|(_, s)| *s == status).count()
    }

    #[must_use]
    pub fn labels(&self, status: ShapeStatus) -> Vec<&str> {
        self.shapes
            .iter()
            .filter(|(_, s)| *s == status)
            .map(|(label, _)| label.as_str())
            .collect()
    }
}

#[must_use]
pub fn colour_map(game_state: &GameState, geographies: &[Geography]) -> MapReport {
    MapReport {
        continent: game_state.continent(),
        shapes: geographies
            .iter()
            .map(|geography| (geography.label(), game_state.shape_status(geography)))
            .collect(),
    }
}

impl<CS, GS> App<CS, GS>
where
    CS: CountryStore + Send + Sync,
    GS: GeographyStore + Send + Sync,
{
    pub async fn map_command<I: GameInteraction>(
        &self,
        interaction: &I,
        game_state: Option<&GameState>,
    ) {
        let Some(game_state) = game_state else {
            if let Err(why) = interaction
                .reply(String::from("No round in progress :("))
                .await
            {
                log::warn!("couldn't send no round message: {why}");
            }
            return;
        };

        let geographies = match self.geography_store.fetch_all().await {
            Ok(geographies) => geographies,
            Err(why) => {
                log::error!("couldn't load geographies: {why}");
                if let Err(why) = interaction
                    .reply(String::from("Could not load the map data :("))
                    .await
                {
                    log::warn!("couldn't send load failure message: {why}");
                }
                return;
            }
        };

        let report = colour_map(game_state, &geographies);
        log::debug!(
            "Coloured {} shapes for {}: {} guessed, {} in play",
            report.shapes.len(),
            report.continent.id(),
            report.count(ShapeStatus::Guessed),
            report.count(ShapeStatus::InPlay)
        );

        if let Err(why) = interaction.send_map_report(report).await {
            log::warn!("couldn't send map report: {why}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::country::fixtures::*;
    use crate::domain::country::Country;
    use crate::domain::geography::fixtures::*;
    use crate::ports::inbound::client::MockGameInteraction;
    use crate::ports::outbound::country_store::MockCountryStore;
    use crate::ports::outbound::geography_store::{GeographyStoreError, MockGeographyStore};
    use mockall::predicate::*;
    use serde_json::json;

    fn countries() -> Vec<Country> {
        vec![
            france(),
            germany(),
            country("Czechia", "CZ", "CZE", "Europe"),
            country("Japan", "JP", "JPN", "Asia"),
        ]
    }

    fn geographies() -> Vec<Geography> {
        vec![
            geography(json!({ "ISO_A2": "-99", "ISO_A3": "FRA", "NAME": "France" })),
            geography(json!({ "iso_a2": "de", "NAME": "Germany" })),
            named("Czech Republic"),
            named("Japan"),
            named("N. Cyprus"),
        ]
    }

    fn game_state() -> GameState {
        let mut game_state = GameState::from(Continent::Europe, countries());
        game_state.guess("Allemagne");
        game_state
    }

    #[tokio::test]
    async fn test_colour_map() {
        let report = colour_map(&game_state(), &geographies());

        assert_eq!(report.continent, Continent::Europe);
        assert_eq!(report.labels(ShapeStatus::Guessed), vec!["Germany"]);
        assert_eq!(
            report.labels(ShapeStatus::InPlay),
            vec!["France", "Czech Republic"]
        );
        assert_eq!(
            report.labels(ShapeStatus::OutOfPlay),
            vec!["Japan", "N. Cyprus"]
        );
        assert_eq!(report.count(ShapeStatus::OutOfPlay), 2);
    }

    #[tokio::test]
    async fn test_map_command_sends_report() {
        let mut geography_store = MockGeographyStore::new();
        geography_store
            .expect_fetch_all()
            .times(1)
            .returning(|| Ok(geographies()));

        let mut interaction = MockGameInteraction::new();
        interaction
            .expect_send_map_report()
            .times(1)
            .withf(|report: &MapReport| {
                report.shapes.len() == 5
                    && report.count(ShapeStatus::Guessed) == 1
                    && report.count(ShapeStatus::InPlay) == 2
            })
            .returning(|_| Ok(()));

        let game_state = game_state();
        App::new(MockCountryStore::new(), geography_store)
            .map_command(&interaction, Some(&game_state))
            .await;
    }

    #[tokio::test]
    async fn test_map_command_without_round() {
        let mut interaction = MockGameInteraction::new();
        interaction
            .expect_reply()
            .times(1)
            .with(eq(String::from("No round in progress :(")))
            .returning(|_| Ok(()));

        App::new(MockCountryStore::new(), MockGeographyStore::new())
            .map_command(&interaction, None)
            .await;
    }

    #[tokio::test]
    async fn test_map_command_load_failure() {
        let mut geography_store = MockGeographyStore::new();
        geography_store
            .expect_fetch_all()
            .times(1)
            .returning(|| Err(GeographyStoreError::new(String::from("bad topology"))));

        let mut interaction = MockGameInteraction::new();
        interaction
            .expect_reply()
            .times(1)
            .with(eq(String::from("Could not load the map data :(")))
            .returning(|_| Ok(()));

        let game_state = game_state();
        App::new(MockCountryStore::new(), geography_store)
            .map_command(&interaction, Some(&game_state))
            .await;
    }
}
