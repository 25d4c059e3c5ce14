//! News records and the source port they are fetched through.

use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// Author attached to a published news item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Author {
    /// Author identifier.
    pub id: String,
    /// Given name.
    pub first_name: String,
    /// Family name.
    pub last_name: String,
    /// Contact email.
    pub email: String,
}

impl Author {
    /// Returns "First Last".
    #[must_use]
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// A news item exactly as the public news API returns it.
///
/// Items are immutable snapshots; nothing writes them back.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewsItem {
    /// News identifier.
    pub id: i64,
    /// Headline.
    pub title: String,
    /// Secondary headline.
    #[serde(default)]
    pub subtitle: String,
    /// Alt text for the cover image.
    #[serde(default)]
    pub image_description: String,
    /// Rich-text (HTML) body.
    pub body: String,
    /// Cover image URL.
    #[serde(default)]
    pub image_url: String,
    /// Publication date as sent by the API.
    pub date: String,
    /// Identifier of the publishing user.
    #[serde(default)]
    pub user_id: String,
    /// Publishing author.
    pub author: Author,
}

impl NewsItem {
    /// Parses the publication date.
    ///
    /// Accepts RFC 3339 timestamps, naive `YYYY-MM-DDTHH:MM:SS[.f]`
    /// timestamps (read as UTC) and bare `YYYY-MM-DD` dates (midnight UTC).
    /// Returns `None` for anything else.
    #[must_use]
    pub fn published_at(&self) -> Option<DateTime<Utc>> {
        let raw = self.date.trim();
        if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
            return Some(parsed.with_timezone(&Utc));
        }
        if let Ok(naive) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
            return Some(naive.and_utc());
        }
        NaiveDate::parse_from_str(raw, "%Y-%m-%d")
            .ok()
            .and_then(|date| date.and_hms_opt(0, 0, 0))
            .map(|naive| naive.and_utc())
    }
}

/// Port through which the news collection is fetched.
#[async_trait]
pub trait NewsSource: Send + Sync {
    /// Fetches the full published collection in one request.
    ///
    /// Implementations map non-success statuses and transport failures to
    /// `DomainError::Upstream`.
    async fn fetch_news(&self) -> Result<Vec<NewsItem>, DomainError>;
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    fn item_dated(date: &str) -> NewsItem {
        NewsItem {
            id: 1,
            title: "Encuentro".to_owned(),
            subtitle: String::new(),
            image_description: String::new(),
            body: String::new(),
            image_url: String::new(),
            date: date.to_owned(),
            user_id: "u1".to_owned(),
            author: Author {
                id: "u1".to_owned(),
                first_name: "Ana".to_owned(),
                last_name: "Pérez".to_owned(),
                email: "ana@example.org".to_owned(),
            },
        }
    }

    #[test]
    fn test_published_at_accepts_rfc3339() {
        let expected = Utc.with_ymd_and_hms(2025, 3, 1, 12, 30, 0).unwrap();
        assert_eq!(
            item_dated("2025-03-01T09:30:00-03:00").published_at(),
            Some(expected)
        );
    }

    #[test]
    fn test_published_at_accepts_naive_timestamp_and_bare_date() {
        assert_eq!(
            item_dated("2025-03-01T12:30:00.123").published_at().map(|d| d.date_naive()),
            NaiveDate::from_ymd_opt(2025, 3, 1)
        );
        assert_eq!(
            item_dated("2025-03-01").published_at(),
            Some(Utc.with_ymd_and_hms(2025, 3, 1, 0, 0, 0).unwrap())
        );
    }

    #[test]
    fn test_published_at_rejects_garbage() {
        assert_eq!(item_dated("ayer").published_at(), None);
    }

    #[test]
    fn test_news_item_deserializes_api_shape_with_missing_optionals() {
        let json = serde_json::json!({
            "id": 7,
            "title": "Retiro",
            "body": "<p>Hola</p>",
            "date": "2025-01-01",
            "author": {
                "id": "a",
                "first_name": "Juan",
                "last_name": "Gómez",
                "email": "juan@example.org"
            }
        });

        let item: NewsItem = serde_json::from_value(json).unwrap();

        assert_eq!(item.id, 7);
        assert!(item.subtitle.is_empty());
        assert_eq!(item.author.full_name(), "Juan Gómez");
    }
}
