use once_cell::sync::Lazy;
use regex::Regex;

const COMMAND_RE: &str = r"^\s*!(\S+)(?:\s+(.*?))?\s*$";

static COMMAND: Lazy<Regex> = Lazy::new(|| Regex::new(COMMAND_RE).expect("Invalid regex"));

#[derive(Debug, PartialEq, Eq)]
pub enum Command {
    Play(Option<String>),
    GiveUp,
    Check,
    Map,
    Help,
    Unknown(String),
    Guess(String),
}

/// Lines starting with `!` are commands, everything else is a guess.
#[must_use]
pub fn command(line: &str) -> Command {
    let Some(capture) = COMMAND.captures(line) else {
        return Command::Guess(line.to_string());
    };

    let name = capture[1].to_lowercase();
    let argument = capture
        .get(2)
        .map(|argument| argument.as_str().to_string())
        .filter(|argument| !argument.is_empty());

    match name.as_str() {
        "play" => Command::Play(argument),
        "giveup" | "give-up" => Command::GiveUp,
        "check" => Command::Check,
        "map" => Command::Map,
        "help" => Command::Help,
        _ => Command::Unknown(name),
    }
}
