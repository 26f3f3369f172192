use crate::domain::functions::check::GeographyReport;
use crate::domain::functions::game::map::MapReport;
use crate::domain::functions::game::state::{RoundEnd, RoundSummary, ShapeStatus};
use std::time::Duration;

#[must_use]
pub fn format_time(duration: Duration) -> String {
    let seconds = duration.as_secs();
    format!("{}:{:02}", seconds / 60, seconds % 60)
}

fn progress(summary: &RoundSummary) -> String {
    format!(
        "{}/{} countries, {} left",
        summary.score,
        summary.total,
        format_time(summary.time_left)
    )
}

#[must_use]
pub fn new_game(summary: &RoundSummary) -> String {
    format!(
        "🌍 {} - find {} countries in {}. Type a country name to guess.",
        summary.continent,
        summary.total,
        format_time(summary.continent.time_limit())
    )
}

#[must_use]
pub fn correct(country: &str, summary: &RoundSummary) -> String {
    format!("✅ Correct! You've guessed {country}. ({})", progress(summary))
}

#[must_use]
pub fn already_guessed(country: &str) -> String {
    format!("🔁 Already guessed! You've already found {country}.")
}

#[must_use]
pub fn incorrect(guess: &str) -> String {
    format!("❌ Incorrect: '{guess}' is not a country in play. Try again!")
}

#[must_use]
pub fn round_over(end: RoundEnd, summary: &RoundSummary) -> String {
    let mut message = format!(
        "🏁 {end} {} - you found {}/{} in {} with {} guesses.",
        summary.continent,
        summary.score,
        summary.total,
        format_time(summary.time_taken),
        summary.guesses
    );

    if !summary.missed.is_empty() {
        message.push_str("\nMissed: ");
        message.push_str(&summary.missed.join(", "));
    }

    message
}

#[must_use]
pub fn geography_report(report: &GeographyReport) -> String {
    if report.is_clean() {
        return format!(
            "All {} geographies matched to guessable countries.",
            report.total
        );
    }

    let mut message = format!(
        "Unmatched geographies: {} of {}",
        report.unmatched.len(),
        report.total
    );
    for label in &report.unmatched {
        message.push_str("\n - ");
        message.push_str(label);
    }
    message
}

#[must_use]
pub fn map_report(report: &MapReport) -> String {
    let mut message = format!(
        "🗺️ {} map: {} guessed, {} to find, {} out of play",
        report.continent,
        report.count(ShapeStatus::Guessed),
        report.count(ShapeStatus::InPlay),
        report.count(ShapeStatus::OutOfPlay)
    );

    let guessed = report.labels(ShapeStatus::Guessed);
    if !guessed.is_empty() {
        message.push_str("\nGuessed: ");
        message.push_str(&guessed.join(", "));
    }
    message
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::continent::Continent;

    fn summary() -> RoundSummary {
        RoundSummary {
            continent: Continent::Europe,
            score: 1,
            total: 3,
            guesses: 4,
            time_left: Duration::from_secs(305),
            time_taken: Duration::from_secs(55),
            missed: vec![String::from("France"), String::from("Spain")],
        }
    }

    #[test]
    fn test_format_time() {
        assert_eq!(format_time(Duration::from_secs(0)), "0:00");
        assert_eq!(format_time(Duration::from_secs(65)), "1:05");
        assert_eq!(format_time(Duration::from_secs(900)), "15:00");
    }

    #[test]
    fn test_new_game() {
        assert_eq!(
            new_game(&summary()),
            "🌍 Europe - find 3 countries in 6:00. Type a country name to guess."
        );
    }

    #[test]
    fn test_correct() {
        assert_eq!(
            correct("Germany", &summary()),
            "✅ Correct! You've guessed Germany. (1/3 countries, 5:05 left)"
        );
    }

    #[test]
    fn test_round_over_lists_missed() {
        assert_eq!(
            round_over(RoundEnd::TimeUp, &summary()),
            "🏁 Time's up! Europe - you found 1/3 in 0:55 with 4 guesses.\nMissed: France, Spain"
        );
    }

    #[test]
    fn test_round_over_nothing_missed() {
        let mut summary = summary();
        summary.missed.clear();
        assert!(!round_over(RoundEnd::Completed, &summary).contains("Missed"));
    }

    #[test]
    fn test_geography_report() {
        let report = GeographyReport {
            total: 3,
            matched: 2,
            unmatched: vec![String::from("N. Cyprus")],
        };
        assert_eq!(
            geography_report(&report),
            "Unmatched geographies: 1 of 3\n - N. Cyprus"
        );

        let clean = GeographyReport {
            total: 3,
            matched: 3,
            unmatched: Vec::new(),
        };
        assert_eq!(
            geography_report(&clean),
            "All 3 geographies matched to guessable countries."
        );
    }

    #[test]
    fn test_map_report() {
        let report = MapReport {
            continent: Continent::Europe,
            shapes: vec![
                (String::from("Germany"), ShapeStatus::Guessed),
                (String::from("France"), ShapeStatus::InPlay),
                (String::from("Japan"), ShapeStatus::OutOfPlay),
                (String::from("Spain"), ShapeStatus::Guessed),
            ],
        };
        assert_eq!(
            map_report(&report),
            "🗺️ Europe map: 2 guessed, 1 to find, 1 out of play\nGuessed: Germany, Spain"
        );

        let fresh = MapReport {
            continent: Continent::Africa,
            shapes: vec![(String::from("Kenya"), ShapeStatus::InPlay)],
        };
        assert_eq!(
            map_report(&fresh),
            "🗺️ Africa map: 0 guessed, 1 to find, 0 out of play"
        );
    }
}
