use crate::domain::country::Country;
use std::collections::HashSet;
use std::fmt::{Display, Formatter};
use std::str::FromStr;
use std::time::Duration;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Continent {
    Europe,
    AsiaOceania,
    Americas,
    Africa,
    World,
}

#[derive(Error, Debug)]
#[error("Unknown continent '{0}'")]
pub struct UnknownContinent(String);

impl Continent {
    pub const ALL: [Continent; 5] = [
        Continent::Europe,
        Continent::AsiaOceania,
        Continent::Americas,
        Continent::Africa,
        Continent::World,
    ];

    #[must_use]
    pub fn id(&self) -> &'static str {
        match self {
            Continent::Europe => "europe",
            Continent::AsiaOceania => "asia-oceania",
            Continent::Americas => "americas",
            Continent::Africa => "africa",
            Continent::World => "all-world",
        }
    }

    #[must_use]
    pub fn time_limit(&self) -> Duration {
        let seconds = match self {
            Continent::Europe => 360,
            Continent::AsiaOceania => 720,
            Continent::Americas => 600,
            Continent::Africa => 540,
            Continent::World => 900,
        };
        Duration::from_secs(seconds)
    }

    /// REST Countries regions in play. Empty means every region.
    #[must_use]
    pub fn regions(&self) -> &'static [&'static str] {
        match self {
            Continent::Europe => &["Europe"],
            Continent::AsiaOceania => &["Asia", "Oceania"],
            Continent::Americas => &["Americas"],
            Continent::Africa => &["Africa"],
            Continent::World => &[],
        }
    }

    #[must_use]
    pub fn contains(&self, country: &Country) -> bool {
        let regions = self.regions();
        regions.is_empty() || regions.iter().any(|region| *region == country.region)
    }

    /// Countries in play for this continent, in input order, one per `cca3`.
    #[must_use]
    pub fn select(&self, countries: Vec<Country>) -> Vec<Country> {
        let mut seen = HashSet::new();
        countries
            .into_iter()
            .filter(|country| self.contains(country))
            .filter(|country| country.cca3.is_empty() || seen.insert(country.cca3.clone()))
            .map(|mut country| {
                country.guessed = false;
                country
            })
            .collect()
    }
}

impl Display for Continent {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let string = match self {
            Continent::Europe => "Europe",
            Continent::AsiaOceania => "Asia & Oceania",
            Continent::Americas => "The Americas",
            Continent::Africa => "Africa",
            Continent::World => "Whole World",
        };

        write!(f, "{string}")
    }
}

impl FromStr for Continent {
    type Err = UnknownContinent;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let id = s.trim().to_lowercase();
        Continent::ALL
            .into_iter()
            .find(|continent| continent.id() == id)
            .ok_or_else(|| UnknownContinent(s.to_string()))
    }
}
