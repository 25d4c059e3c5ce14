//! Text helpers for news cards and detail pages.

use std::sync::LazyLock;

use chrono::{DateTime, Datelike, Utc};
use misiones_core::news::Author;
use regex::Regex;

/// Reading speed used for the reading-time estimate.
pub const WORDS_PER_MINUTE: usize = 200;

/// Characters of plain text shown on a news card.
pub const EXCERPT_CHARS: usize = 150;

const MONTHS_ES: [&str; 12] = [
    "enero",
    "febrero",
    "marzo",
    "abril",
    "mayo",
    "junio",
    "julio",
    "agosto",
    "septiembre",
    "octubre",
    "noviembre",
    "diciembre",
];

static TAG: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<[^>]*>").expect("valid tag pattern"));

static WHITESPACE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("valid whitespace pattern"));

/// Removes every HTML tag from `body`.
#[must_use]
pub fn plain_text(body: &str) -> String {
    TAG.replace_all(body, "").into_owned()
}

/// The first `max_chars` characters of the body's plain text, with an
/// ellipsis when cut.
#[must_use]
pub fn excerpt(body: &str, max_chars: usize) -> String {
    let text = plain_text(body);
    let text = text.trim();
    match text.char_indices().nth(max_chars) {
        Some((cut, _)) => format!("{}...", &text[..cut]),
        None => text.to_owned(),
    }
}

/// Estimated reading time in whole minutes.
///
/// Counts the pieces left after splitting the raw body on whitespace runs,
/// so an empty body counts as one piece and leading or trailing whitespace
/// adds an empty piece.
#[must_use]
pub fn reading_minutes(body: &str) -> usize {
    WHITESPACE.split(body).count().div_ceil(WORDS_PER_MINUTE)
}

/// Reading-time label shown on the detail page.
#[must_use]
pub fn reading_time_label(body: &str) -> String {
    format!("{} min de lectura", reading_minutes(body))
}

/// Uppercased first letters of the author's names.
#[must_use]
pub fn author_initials(author: &Author) -> String {
    author
        .first_name
        .chars()
        .take(1)
        .chain(author.last_name.chars().take(1))
        .flat_map(char::to_uppercase)
        .collect()
}

/// Long Spanish date, e.g. `15 de enero de 2026`.
#[must_use]
pub fn long_date_es(date: DateTime<Utc>) -> String {
    let month = MONTHS_ES[date.month0() as usize];
    format!("{} de {month} de {}", date.day(), date.year())
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    #[test]
    fn test_plain_text_strips_tags() {
        assert_eq!(
            plain_text("<p>Hola <b>mundo</b></p><br/>"),
            "Hola mundo"
        );
    }

    #[test]
    fn test_excerpt_cuts_on_char_boundary() {
        let body = format!("<p>{}</p>", "ñ".repeat(200));

        let cut = excerpt(&body, EXCERPT_CHARS);

        assert_eq!(cut.chars().count(), EXCERPT_CHARS + 3);
        assert!(cut.ends_with("..."));
    }

    #[test]
    fn test_short_excerpt_has_no_ellipsis() {
        assert_eq!(excerpt("<p>Breve</p>", EXCERPT_CHARS), "Breve");
    }

    #[test]
    fn test_reading_minutes_rounds_up() {
        assert_eq!(reading_minutes(""), 1);
        assert_eq!(reading_minutes(&["palabra"; 200].join(" ")), 1);
        assert_eq!(reading_minutes(&["palabra"; 201].join(" ")), 2);
        assert_eq!(reading_time_label(&"palabra ".repeat(450)), "3 min de lectura");
    }

    #[test]
    fn test_reading_minutes_counts_trailing_whitespace_piece() {
        // 200 words plus the empty piece after the final space.
        assert_eq!(reading_minutes(&"palabra ".repeat(200)), 2);
    }

    #[test]
    fn test_author_initials() {
        let author = Author {
            id: "1".to_owned(),
            first_name: "ángela".to_owned(),
            last_name: "ruiz".to_owned(),
            email: String::new(),
        };

        assert_eq!(author_initials(&author), "ÁR");
    }

    #[test]
    fn test_long_date_es() {
        let date = Utc.with_ymd_and_hms(2026, 1, 15, 10, 0, 0).unwrap();

        assert_eq!(long_date_es(date), "15 de enero de 2026");
    }
}
