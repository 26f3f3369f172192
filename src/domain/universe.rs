use crate::domain::country::Country;
use crate::domain::geography::Geography;
use crate::domain::guess::{self, GuessOutcome};
use crate::domain::index::CountryIndex;
use crate::domain::resolve;

/// The countries in play for one round together with their index.
///
/// The index is built once here. Guesses only flip `guessed`, which no index
/// key depends on, so it never needs rebuilding for the life of the round.
#[derive(Debug)]
pub struct Universe {
    countries: Vec<Country>,
    index: CountryIndex,
}

impl Universe {
    #[must_use]
    pub fn new(countries: Vec<Country>) -> Self {
        let index = CountryIndex::build(&countries);
        Self { countries, index }
    }

    #[must_use]
    pub fn countries(&self) -> &[Country] {
        &self.countries
    }

    #[must_use]
    pub fn resolve(&self, geography: &Geography) -> Option<&Country> {
        resolve::resolve(geography, &self.index).map(|position| &self.countries[position])
    }

    pub fn submit_guess(&mut self, raw_input: &str) -> Option<GuessOutcome<'_>> {
        guess::submit_guess(raw_input, &mut self.countries)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.countries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.countries.is_empty()
    }

    #[must_use]
    pub fn guessed_count(&self) -> usize {
        self.countries.iter().filter(|c| c.is_guessed()).count()
    }
}
