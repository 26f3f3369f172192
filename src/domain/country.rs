use serde::Deserialize;
use std::collections::BTreeMap;

#[cfg_attr(test, derive(PartialEq))]
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Name {
    pub common: String,
    #[serde(default)]
    pub official: String,
}

#[cfg_attr(test, derive(PartialEq))]
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Translation {
    #[serde(default)]
    pub common: String,
    #[serde(default)]
    pub official: String,
}

#[cfg_attr(test, derive(PartialEq))]
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Demonym {
    #[serde(default)]
    pub m: String,
    #[serde(default)]
    pub f: String,
}

/// One country as served by the REST Countries API.
///
/// `translations` and `demonyms` are keyed by language code. They are kept in
/// a `BTreeMap` so every walk over them is in the same order.
#[cfg_attr(test, derive(PartialEq))]
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Country {
    pub name: Name,
    #[serde(default)]
    pub cca2: String,
    #[serde(default)]
    pub cca3: String,
    #[serde(default)]
    pub region: String,
    #[serde(default)]
    pub subregion: String,
    #[serde(default)]
    pub translations: BTreeMap<String, Translation>,
    #[serde(default)]
    pub demonyms: BTreeMap<String, Demonym>,
    #[serde(default)]
    pub guessed: bool,
}

impl Country {
    #[must_use]
    pub fn common_name(&self) -> &str {
        &self.name.common
    }

    #[must_use]
    pub fn is_guessed(&self) -> bool {
        self.guessed
    }

    pub fn mark_guessed(&mut self) {
        self.guessed = true;
    }

    pub fn translation_names(&self) -> impl Iterator<Item = &str> {
        self.translations
            .values()
            .flat_map(|t| [t.common.as_str(), t.official.as_str()])
    }

    pub fn demonym_names(&self) -> impl Iterator<Item = &str> {
        self.demonyms
            .values()
            .flat_map(|d| [d.m.as_str(), d.f.as_str()])
    }

    /// Every name this country can be looked up by, in index order: common,
    /// official, translations, demonyms. May contain empty strings.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        [self.name.common.as_str(), self.name.official.as_str()]
            .into_iter()
            .chain(self.translation_names())
            .chain(self.demonym_names())
    }
}
