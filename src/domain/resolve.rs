use crate::domain::alias;
use crate::domain::geography::Geography;
use crate::domain::index::CountryIndex;
use crate::domain::utils::{normalise, normalise_optional};

/// Finds the country a map shape stands for, as a position in the indexed list.
///
/// Codes are tried before names and the alias table is the last resort, since
/// it is hand-curated and the least precise.
#[must_use]
pub fn resolve(geography: &Geography, index: &CountryIndex) -> Option<usize> {
    if let Some(position) = geography.code2().and_then(|code| index.by_cca2(&code)) {
        return Some(position);
    }

    if let Some(position) = geography.code3().and_then(|code| index.by_cca3(&code)) {
        return Some(position);
    }

    let name = normalise_optional(geography.display_name().as_deref());
    if name.is_empty() {
        return None;
    }

    if let Some(position) = index.by_name(&name) {
        return Some(position);
    }

    let target = alias::lookup(&name)?;
    let found = index.by_name(&normalise(target));
    if found.is_none() {
        log::debug!("Alias '{name}' -> '{target}' has no country in this list");
    }
    found
}
