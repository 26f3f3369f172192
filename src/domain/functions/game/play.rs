use crate::domain::app::App;
use crate::domain::continent::Continent;
use crate::domain::functions::game::state::GameState;
use crate::ports::inbound::client::GameInteraction;
use crate::ports::outbound::country_store::CountryStore;
use crate::ports::outbound::geography_store::GeographyStore;

impl<CS, GS> App<CS, GS>
where
    CS: CountryStore + Send + Sync,
    GS: GeographyStore + Send + Sync,
{
    pub async fn play_command<I: GameInteraction>(
        &self,
        interaction: &I,
        options: PlayOptions,
    ) -> Option<GameState> {
        let PlayOptions { continent } = options;

        let countries = match self.country_store.fetch_all().await {
            Ok(countries) => countries,
            Err(why) => {
                log::error!("couldn't load countries: {why}");
                if let Err(why) = interaction
                    .reply(String::from(
                        "Could not load countries. Please try again later.",
                    ))
                    .await
                {
                    log::warn!("couldn't send load failure message: {why}");
                }
                return None;
            }
        };

        let game_state = GameState::from(continent, countries);
        if game_state.total() == 0 {
            log::warn!("No countries in play for {}", continent.id());
            if let Err(why) = interaction
                .reply(format!("No countries found for {continent}"))
                .await
            {
                log::warn!("couldn't send empty round message: {why}");
            }
            return None;
        }

        log::info!(
            "Started {} round with {} countries",
            continent.id(),
            game_state.total()
        );

        if let Err(why) = interaction
            .send_new_game_message(game_state.summary())
            .await
        {
            log::error!("couldn't send new game message: {why:?}");
        }

        Some(game_state)
    }
}

pub struct PlayOptions {
    continent: Continent,
}

impl PlayOptions {
    pub fn new(continent: Continent) -> Self {
        Self { continent }
    }
}
