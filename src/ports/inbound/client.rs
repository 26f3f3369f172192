use crate::domain::functions::check::GeographyReport;
use crate::domain::functions::game::map::MapReport;
use crate::domain::functions::game::state::{RoundEnd, RoundSummary};
use async_trait::async_trait;
use thiserror::Error;

#[cfg(test)]
use mockall::automock;

#[cfg_attr(test, derive(Clone))]
#[derive(Debug, Error)]
#[error("An error occurred while talking to the player")]
pub struct InteractionError(String);

impl InteractionError {
    #[must_use]
    pub fn new(msg: String) -> Self {
        Self(msg)
    }
}

#[cfg_attr(test, automock)]
#[async_trait]
pub trait GameInteraction {
    async fn send_new_game_message(&self, summary: RoundSummary) -> Result<(), InteractionError>;
    async fn send_correct_message(
        &self,
        country: String,
        summary: RoundSummary,
    ) -> Result<(), InteractionError>;
    async fn send_already_guessed_message(&self, country: String) -> Result<(), InteractionError>;
    async fn send_incorrect_message(&self, guess: String) -> Result<(), InteractionError>;
    async fn send_round_over_message(
        &self,
        end: RoundEnd,
        summary: RoundSummary,
    ) -> Result<(), InteractionError>;
    async fn send_geography_report(&self, report: GeographyReport)
        -> Result<(), InteractionError>;
    async fn send_map_report(&self, report: MapReport) -> Result<(), InteractionError>;
    async fn reply(&self, message: String) -> Result<(), InteractionError>;
}

#[async_trait]
pub trait Client {
    async fn run(&mut self);
}
