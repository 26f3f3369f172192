use crate::domain::country::Country;
use crate::domain::utils::normalise;
use std::collections::hash_map::Entry;
use std::collections::HashMap;

/// Lookup tables over a country list.
///
/// Every table maps to a position in the list the index was built from. The
/// first country to claim a key keeps it.
#[derive(Debug, Default)]
pub struct CountryIndex {
    by_cca2: HashMap<String, usize>,
    by_cca3: HashMap<String, usize>,
    by_name: HashMap<String, usize>,
}

fn claim(map: &mut HashMap<String, usize>, key: String, position: usize) {
    if key.is_empty() {
        return;
    }
    if let Entry::Vacant(entry) = map.entry(key) {
        entry.insert(position);
    }
}

impl CountryIndex {
    #[must_use]
    pub fn build(countries: &[Country]) -> Self {
        let mut index = Self::default();

        for (position, country) in countries.iter().enumerate() {
            claim(&mut index.by_cca2, country.cca2.to_uppercase(), position);
            claim(&mut index.by_cca3, country.cca3.to_uppercase(), position);
            for name in country.names() {
                claim(&mut index.by_name, normalise(name), position);
            }
        }

        log::debug!(
            "Indexed {} countries under {} names",
            countries.len(),
            index.by_name.len()
        );

        index
    }

    /// Expects an uppercased code.
    #[must_use]
    pub fn by_cca2(&self, code: &str) -> Option<usize> {
        self.by_cca2.get(code).copied()
    }

    /// Expects an uppercased code.
    #[must_use]
    pub fn by_cca3(&self, code: &str) -> Option<usize> {
        self.by_cca3.get(code).copied()
    }

    /// Expects a key produced by [`normalise`].
    #[must_use]
    pub fn by_name(&self, key: &str) -> Option<usize> {
        self.by_name.get(key).copied()
    }

    #[must_use]
    pub fn name_count(&self) -> usize {
        self.by_name.len()
    }
}
