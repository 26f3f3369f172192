use crate::domain::app::App;
use crate::domain::functions::game::guess::send_round_over;
use crate::domain::functions::game::state::{GameState, RoundEnd};
use crate::ports::inbound::client::GameInteraction;
use crate::ports::outbound::country_store::CountryStore;
use crate::ports::outbound::geography_store::GeographyStore;

impl<CS, GS> App<CS, GS>
where
    CS: CountryStore + Send + Sync,
    GS: GeographyStore + Send + Sync,
{
    pub async fn give_up_command<I: GameInteraction>(
        &self,
        interaction: &I,
        game_state: Option<GameState>,
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

        let end = if game_state.is_expired() {
            RoundEnd::TimeUp
        } else {
            RoundEnd::GaveUp
        };
        send_round_over(interaction, end, &game_state).await;
    }
}
