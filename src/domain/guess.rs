use crate::domain::country::Country;
use crate::domain::utils::normalise;

#[cfg_attr(test, derive(PartialEq))]
#[derive(Debug)]
pub enum GuessOutcome<'a> {
    AlreadyGuessed(&'a Country),
    Correct(&'a Country),
    Incorrect,
}

fn matches_guess(country: &Country, guess: &str) -> bool {
    normalise(country.common_name()) == guess
        || country.translation_names().any(|name| normalise(name) == guess)
        || country.demonym_names().any(|name| normalise(name) == guess)
}

/// Checks a typed guess against the countries in play.
///
/// Returns `None` for blank input, which changes nothing. A correct guess marks
/// the first matching unguessed country, in list order, as guessed.
pub fn submit_guess<'a>(
    raw_input: &str,
    universe: &'a mut [Country],
) -> Option<GuessOutcome<'a>> {
    let guess = normalise(raw_input);
    if guess.is_empty() {
        return None;
    }

    if let Some(position) = universe
        .iter()
        .position(|c| c.is_guessed() && normalise(c.common_name()) == guess)
    {
        return Some(GuessOutcome::AlreadyGuessed(&universe[position]));
    }

    let Some(position) = universe
        .iter()
        .position(|c| !c.is_guessed() && matches_guess(c, &guess))
    else {
        return Some(GuessOutcome::Incorrect);
    };

    let country = &mut universe[position];
    country.mark_guessed();
    Some(GuessOutcome::Correct(country))
}
