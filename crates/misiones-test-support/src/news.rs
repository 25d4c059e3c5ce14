//! Test news sources and fixtures.

use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use chrono::{Duration, TimeZone, Utc};
use misiones_core::error::DomainError;
use misiones_core::news::{Author, NewsItem, NewsSource};

/// Builds a news item with the given id and publication date string.
#[must_use]
pub fn news_item(id: i64, date: &str) -> NewsItem {
    NewsItem {
        id,
        title: format!("Noticia {id}"),
        subtitle: format!("Subtítulo {id}"),
        image_description: format!("Imagen {id}"),
        body: format!("<p>Cuerpo de la noticia {id}</p>"),
        image_url: format!("https://cdn.example.org/news/{id}.jpg"),
        date: date.to_owned(),
        user_id: "author-1".to_owned(),
        author: Author {
            id: "author-1".to_owned(),
            first_name: "María".to_owned(),
            last_name: "López".to_owned(),
            email: "maria@example.org".to_owned(),
        },
    }
}

/// Builds `count` items with ids `1..=count`, item `n` published `n` days
/// after 2025-01-01, so ids grow with publication date.
///
/// # Panics
///
/// Never panics for valid calendar input; the base date is a constant.
#[must_use]
pub fn numbered_news(count: i64) -> Vec<NewsItem> {
    let base = Utc.with_ymd_and_hms(2025, 1, 1, 9, 0, 0).unwrap();
    (1..=count)
        .map(|id| news_item(id, &(base + Duration::days(id)).to_rfc3339()))
        .collect()
}

/// A news source that returns a fixed collection and counts fetches.
#[derive(Debug)]
pub struct StubNewsSource {
    items: Vec<NewsItem>,
    fetches: AtomicUsize,
}

impl StubNewsSource {
    /// Creates a stub returning `items` on every fetch.
    #[must_use]
    pub fn new(items: Vec<NewsItem>) -> Self {
        Self {
            items,
            fetches: AtomicUsize::new(0),
        }
    }

    /// Number of fetches performed so far.
    pub fn fetch_count(&self) -> usize {
        self.fetches.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl NewsSource for StubNewsSource {
    async fn fetch_news(&self) -> Result<Vec<NewsItem>, DomainError> {
        self.fetches.fetch_add(1, Ordering::SeqCst);
        Ok(self.items.clone())
    }
}

/// A news source that always fails the way an HTTP 500 does, and counts
/// fetches.
#[derive(Debug, Default)]
pub struct FailingNewsSource {
    fetches: AtomicUsize,
}

impl FailingNewsSource {
    /// Creates a failing source.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of fetches performed so far.
    pub fn fetch_count(&self) -> usize {
        self.fetches.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl NewsSource for FailingNewsSource {
    async fn fetch_news(&self) -> Result<Vec<NewsItem>, DomainError> {
        self.fetches.fetch_add(1, Ordering::SeqCst);
        Err(DomainError::Upstream("HTTP error! status: 500".into()))
    }
}

/// A news source that answers with a fixed collection after a delay, and
/// counts fetches.
#[derive(Debug)]
pub struct DelayedNewsSource {
    items: Vec<NewsItem>,
    delay: std::time::Duration,
    fetches: AtomicUsize,
}

impl DelayedNewsSource {
    /// Creates a source returning `items` once `delay` has elapsed.
    #[must_use]
    pub fn new(items: Vec<NewsItem>, delay: std::time::Duration) -> Self {
        Self {
            items,
            delay,
            fetches: AtomicUsize::new(0),
        }
    }

    /// Number of fetches started so far.
    pub fn fetch_count(&self) -> usize {
        self.fetches.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl NewsSource for DelayedNewsSource {
    async fn fetch_news(&self) -> Result<Vec<NewsItem>, DomainError> {
        self.fetches.fetch_add(1, Ordering::SeqCst);
        tokio::time::sleep(self.delay).await;
        Ok(self.items.clone())
    }
}
