use crate::domain::continent::Continent;
use crate::domain::country::Country;
use crate::domain::geography::Geography;
use crate::domain::guess::GuessOutcome;
use crate::domain::universe::Universe;
use crate::domain::utils::normalise;
use std::fmt::{Display, Formatter};
use std::time::Duration;
use tokio::time::Instant;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundEnd {
    Completed,
    TimeUp,
    GaveUp,
}

impl Display for RoundEnd {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let string = match self {
            RoundEnd::Completed => "Every country found!",
            RoundEnd::TimeUp => "Time's up!",
            RoundEnd::GaveUp => "Round abandoned",
        };

        write!(f, "{string}")
    }
}

/// How a map shape is drawn during a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShapeStatus {
    Guessed,
    InPlay,
    OutOfPlay,
}

/// Owned snapshot of a round, handed to whatever talks to the player.
#[derive(Debug, Clone, PartialEq)]
pub struct RoundSummary {
    pub continent: Continent,
    pub score: usize,
    pub total: usize,
    pub guesses: usize,
    pub time_left: Duration,
    pub time_taken: Duration,
    pub missed: Vec<String>,
}

#[derive(Debug)]
pub struct GameState {
    continent: Continent,
    universe: Universe,
    started_at: Instant,
    guess_number: usize,
}

impl GameState {
    #[must_use]
    pub fn from(continent: Continent, countries: Vec<Country>) -> Self {
        Self {
            universe: Universe::new(continent.select(countries)),
            continent,
            started_at: Instant::now(),
            guess_number: 0,
        }
    }

    #[must_use]
    pub fn continent(&self) -> Continent {
        self.continent
    }

    #[must_use]
    pub fn number_of_guesses(&self) -> usize {
        self.guess_number
    }

    /// Counts the attempt and checks it. Input that normalises to nothing is
    /// not an attempt.
    pub fn guess(&mut self, raw_input: &str) -> Option<GuessOutcome<'_>> {
        if normalise(raw_input).is_empty() {
            return None;
        }
        self.guess_number += 1;
        self.universe.submit_guess(raw_input)
    }

    #[must_use]
    pub fn score(&self) -> usize {
        self.universe.guessed_count()
    }

    #[must_use]
    pub fn total(&self) -> usize {
        self.universe.len()
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.total() > 0 && self.score() == self.total()
    }

    #[must_use]
    pub fn elapsed(&self) -> Duration {
        self.started_at.elapsed().min(self.continent.time_limit())
    }

    #[must_use]
    pub fn time_left(&self) -> Duration {
        self.continent
            .time_limit()
            .saturating_sub(self.started_at.elapsed())
    }

    #[must_use]
    pub fn is_expired(&self) -> bool {
        self.time_left().is_zero()
    }

    #[must_use]
    pub fn missed(&self) -> Vec<&str> {
        self.universe
            .countries()
            .iter()
            .filter(|c| !c.is_guessed())
            .map(Country::common_name)
            .collect()
    }

    /// Shapes that resolve to no country of this round are out of play.
    #[must_use]
    pub fn shape_status(&self, geography: &Geography) -> ShapeStatus {
        match self.universe.resolve(geography) {
            Some(country) if country.is_guessed() => ShapeStatus::Guessed,
            Some(_) => ShapeStatus::InPlay,
            None => ShapeStatus::OutOfPlay,
        }
    }

    #[must_use]
    pub fn summary(&self) -> RoundSummary {
        RoundSummary {
            continent: self.continent,
            score: self.score(),
            total: self.total(),
            guesses: self.guess_number,
            time_left: self.time_left(),
            time_taken: self.elapsed(),
            missed: self.missed().into_iter().map(String::from).collect(),
        }
    }
}
