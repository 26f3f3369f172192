use crate::domain::app::App;
use crate::domain::functions::game::state::{GameState, RoundEnd};
use crate::domain::guess::GuessOutcome;
use crate::ports::inbound::client::GameInteraction;
use crate::ports::outbound::country_store::CountryStore;
use crate::ports::outbound::geography_store::GeographyStore;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundStatus {
    Running,
    Over,
}

enum Reply {
    Correct(String),
    AlreadyGuessed(String),
    Incorrect,
}

impl<CS, GS> App<CS, GS>
where
    CS: CountryStore + Send + Sync,
    GS: GeographyStore + Send + Sync,
{
    pub async fn guess_command<I: GameInteraction>(
        &self,
        interaction: &I,
        game_state: &mut GameState,
        options: GuessOptions,
    ) -> RoundStatus {
        let GuessOptions { guess } = options;

        if game_state.is_expired() {
            send_round_over(interaction, RoundEnd::TimeUp, game_state).await;
            return RoundStatus::Over;
        }

        let reply = match game_state.guess(&guess) {
            None => return RoundStatus::Running,
            Some(GuessOutcome::Correct(country)) => Reply::Correct(country.name.common.clone()),
            Some(GuessOutcome::AlreadyGuessed(country)) => {
                Reply::AlreadyGuessed(country.name.common.clone())
            }
            Some(GuessOutcome::Incorrect) => Reply::Incorrect,
        };

        let sent = match reply {
            Reply::Correct(country) => {
                log::debug!("'{guess}' matched {country}");
                interaction
                    .send_correct_message(country, game_state.summary())
                    .await
            }
            Reply::AlreadyGuessed(country) => {
                interaction.send_already_guessed_message(country).await
            }
            Reply::Incorrect => interaction.send_incorrect_message(guess).await,
        };
        if let Err(why) = sent {
            log::warn!("couldn't send guess result: {why}");
        }

        if game_state.is_complete() {
            send_round_over(interaction, RoundEnd::Completed, game_state).await;
            return RoundStatus::Over;
        }

        RoundStatus::Running
    }
}

pub(crate) async fn send_round_over<I: GameInteraction>(
    interaction: &I,
    end: RoundEnd,
    game_state: &GameState,
) {
    log::info!(
        "{} round over ({end}): {}/{}",
        game_state.continent().id(),
        game_state.score(),
        game_state.total()
    );
    if let Err(why) = interaction
        .send_round_over_message(end, game_state.summary())
        .await
    {
        log::warn!("couldn't send round over message: {why}");
    }
}

pub struct GuessOptions {
    guess: String,
}

impl GuessOptions {
    pub fn new(guess: String) -> Self {
        Self { guess }
    }
}
