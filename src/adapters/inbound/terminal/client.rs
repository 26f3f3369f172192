use crate::adapters::inbound::terminal::interaction::TerminalInteraction;
use crate::adapters::inbound::terminal::utils::parse::{self, Command};
use crate::domain::app::App;
use crate::domain::continent::Continent;
use crate::domain::functions;
use crate::domain::functions::game::guess::{GuessOptions, RoundStatus};
use crate::domain::functions::game::play::PlayOptions;
use crate::domain::functions::game::state::GameState;
use crate::domain::functions::help::HELP;
use crate::domain::utils::normalise;
use crate::ports::inbound::client::{Client, GameInteraction};
use crate::ports::outbound::country_store::CountryStore;
use crate::ports::outbound::geography_store::GeographyStore;
use async_trait::async_trait;
use tokio::io::{AsyncBufReadExt, BufReader};

/// Plays rounds over stdin/stdout, one round at a time.
pub struct Terminal<CS, GS> {
    app: App<CS, GS>,
    game_state: Option<GameState>,
}

impl<CS, GS> Terminal<CS, GS>
where
    CS: CountryStore + Send + Sync,
    GS: GeographyStore + Send + Sync,
{
    pub fn new(app: App<CS, GS>) -> Self {
        Self {
            app,
            game_state: None,
        }
    }

    async fn handle<I: GameInteraction + Sync>(&mut self, interaction: &I, line: &str) {
        match parse::command(line) {
            Command::Play(continent) => self.play(interaction, continent).await,
            Command::GiveUp => {
                self.app
                    .give_up_command(interaction, self.game_state.take())
                    .await;
            }
            Command::Map => {
                self.app
                    .map_command(interaction, self.game_state.as_ref())
                    .await;
            }
            Command::Check => self.app.check_command(interaction).await,
            Command::Help => functions::help::run(interaction, HELP).await,
            Command::Unknown(name) => {
                let message = format!("Unknown command '!{name}'. Type !help for help.");
                reply(interaction, message).await;
            }
            Command::Guess(guess) => self.guess(interaction, guess).await,
        }
    }

    async fn play<I: GameInteraction + Sync>(
        &mut self,
        interaction: &I,
        continent: Option<String>,
    ) {
        let continent = match continent.as_deref().map(str::parse::<Continent>) {
            None => Continent::World,
            Some(Ok(continent)) => continent,
            Some(Err(why)) => {
                let ids: Vec<&str> = Continent::ALL.iter().map(Continent::id).collect();
                reply(interaction, format!("{why}. Pick one of: {}", ids.join(", "))).await;
                return;
            }
        };

        if self.game_state.is_some() {
            log::info!("Abandoning the running round for a new {} round", continent.id());
        }

        self.game_state = self
            .app
            .play_command(interaction, PlayOptions::new(continent))
            .await;
    }

    async fn guess<I: GameInteraction + Sync>(&mut self, interaction: &I, guess: String) {
        let Some(game_state) = self.game_state.as_mut() else {
            if !normalise(&guess).is_empty() {
                reply(
                    interaction,
                    String::from("No round in progress. Type !play <continent> to start."),
                )
                .await;
            }
            return;
        };

        let status = self
            .app
            .guess_command(interaction, game_state, GuessOptions::new(guess))
            .await;
        if status == RoundStatus::Over {
            self.game_state = None;
        }
    }
}

async fn reply<I: GameInteraction>(interaction: &I, message: String) {
    if let Err(why) = interaction.reply(message).await {
        log::warn!("couldn't send reply: {why}");
    }
}

#[async_trait]
impl<CS, GS> Client for Terminal<CS, GS>
where
    CS: CountryStore + Send + Sync + 'static,
    GS: GeographyStore + Send + Sync + 'static,
{
    async fn run(&mut self) {
        let interaction = TerminalInteraction::new();
        functions::help::run(&interaction, HELP).await;

        let mut lines = BufReader::new(tokio::io::stdin()).lines();
        loop {
            match lines.next_line().await {
                Ok(Some(line)) => self.handle(&interaction, &line).await,
                Ok(None) => break,
                Err(why) => {
                    log::error!("couldn't read from stdin: {why}");
                    break;
                }
            }
        }

        log::info!("Input closed, exiting");
    }
}
