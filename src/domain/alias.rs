use crate::domain::utils::normalise;
use once_cell::sync::Lazy;
use std::collections::HashMap;

// Natural Earth name -> REST Countries name.
const ALIASES: &[(&str, &str)] = &[
    ("Czech Republic", "Czechia"),
    ("Swaziland", "Eswatini"),
    ("Cape Verde", "Cabo Verde"),
    ("Burma", "Myanmar"),
    ("Macedonia", "North Macedonia"),
    ("Ivory Coast", "Côte d'Ivoire"),
    ("Congo (Kinshasa)", "Congo (Democratic Republic of the)"),
    ("Dem. Rep. Congo", "Congo (Democratic Republic of the)"),
    ("Congo, Dem. Rep.", "Congo (Democratic Republic of the)"),
    ("Congo (Brazzaville)", "Congo"),
    ("Congo, Rep.", "Congo"),
    ("Bolivia", "Bolivia (Plurinational State of)"),
    ("Iran", "Iran (Islamic Republic of)"),
    ("Laos", "Lao People's Democratic Republic"),
    ("Moldova", "Moldova, Republic of"),
    ("Palestine", "Palestine, State of"),
    ("Russia", "Russian Federation"),
    ("Syria", "Syrian Arab Republic"),
    ("Tanzania", "Tanzania, United Republic of"),
    ("The Bahamas", "Bahamas"),
    ("The Gambia", "Gambia"),
    ("Vatican City", "Holy See"),
    ("Vietnam", "Viet Nam"),
    ("North Korea", "Korea (Democratic People's Republic of)"),
    ("South Korea", "Korea (Republic of)"),
    ("Micronesia", "Micronesia (Federated States of)"),
    ("Northern Cyprus", "Cyprus"),
    ("Somaliland", "Somalia"),
];

static ALIAS_TABLE: Lazy<HashMap<String, &'static str>> = Lazy::new(|| {
    ALIASES
        .iter()
        .map(|(source, target)| (normalise(source), *target))
        .collect()
});

/// Target name for a normalised source name, as written in the table.
#[must_use]
pub fn lookup(normalised_source: &str) -> Option<&'static str> {
    ALIAS_TABLE.get(normalised_source).copied()
}
