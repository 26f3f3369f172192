use crate::adapters::inbound::terminal::utils::message;
use crate::domain::functions::check::GeographyReport;
use crate::domain::functions::game::map::MapReport;
use crate::domain::functions::game::state::{RoundEnd, RoundSummary};
use crate::ports::inbound::client::{GameInteraction, InteractionError};
use async_trait::async_trait;
use tokio::io::AsyncWriteExt;

pub struct TerminalInteraction;

impl TerminalInteraction {
    pub fn new() -> Self {
        Self
    }

    async fn write(&self, text: String) -> Result<(), InteractionError> {
        let mut stdout = tokio::io::stdout();
        stdout
            .write_all(format!("{text}\n").as_bytes())
            .await
            .map_err(|why| InteractionError::new(why.to_string()))?;
        stdout
            .flush()
            .await
            .map_err(|why| InteractionError::new(why.to_string()))
    }
}

#[async_trait]
impl GameInteraction for TerminalInteraction {
    async fn send_new_game_message(&self, summary: RoundSummary) -> Result<(), InteractionError> {
        self.write(message::new_game(&summary)).await
    }

    async fn send_correct_message(
        &self,
        country: String,
        summary: RoundSummary,
    ) -> Result<(), InteractionError> {
        self.write(message::correct(&country, &summary)).await
    }

    async fn send_already_guessed_message(&self, country: String) -> Result<(), InteractionError> {
        self.write(message::already_guessed(&country)).await
    }

    async fn send_incorrect_message(&self, guess: String) -> Result<(), InteractionError> {
        self.write(message::incorrect(&guess)).await
    }

    async fn send_round_over_message(
        &self,
        end: RoundEnd,
        summary: RoundSummary,
    ) -> Result<(), InteractionError> {
        self.write(message::round_over(end, &summary)).await
    }

    async fn send_geography_report(
        &self,
        report: GeographyReport,
    ) -> Result<(), InteractionError> {
        self.write(message::geography_report(&report)).await
    }

    async fn send_map_report(&self, report: MapReport) -> Result<(), InteractionError> {
        self.write(message::map_report(&report)).await
    }

    async fn reply(&self, message: String) -> Result<(), InteractionError> {
        self.write(message).await
    }
}
