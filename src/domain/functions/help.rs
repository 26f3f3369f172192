use crate::ports::inbound::client::GameInteraction;

pub const HELP: &str = "\
Commands:
  !play <continent>  start a round (europe, asia-oceania, americas, africa, all-world)
  !giveup            end the current round and list the countries you missed
  !map               show which map shapes are guessed, still to find, or out of play
  !check             report map shapes that match no country
  !help              show this message
Anything else is a guess: a country name, a translation of it, or a demonym.";

pub async fn run<I: GameInteraction>(interaction: &I, text: &str) {
    if let Err(why) = interaction.reply(text.into()).await {
        log::error!("couldn't send help message: {why:?}");
    };
}
