//! Query handlers for the news context.
//!
//! Handlers read the loaded feed and return read-only view DTOs.

use chrono::{DateTime, Utc};
use misiones_core::error::DomainError;
use misiones_core::news::NewsItem;
use serde::Serialize;

use crate::domain::feed::{FeedStatus, NewsFeed};
use crate::domain::pagination::{find, get_latest, get_page, total_pages};
use crate::domain::presentation::{
    EXCERPT_CHARS, author_initials, excerpt, long_date_es, reading_time_label,
};

/// Card shown in the listing and in the side list.
#[derive(Debug, Clone, Serialize)]
pub struct NewsCardView {
    pub id: i64,
    pub title: String,
    pub subtitle: String,
    pub image_url: String,
    pub image_description: String,
    /// Plain-text start of the body.
    pub excerpt: String,
    /// Raw publication date.
    pub date: String,
    /// Long Spanish date, or the raw date when it cannot be parsed.
    pub published_on: String,
    pub author_name: String,
}

impl From<&NewsItem> for NewsCardView {
    fn from(item: &NewsItem) -> Self {
        Self {
            id: item.id,
            title: item.title.clone(),
            subtitle: item.subtitle.clone(),
            image_url: item.image_url.clone(),
            image_description: item.image_description.clone(),
            excerpt: excerpt(&item.body, EXCERPT_CHARS),
            date: item.date.clone(),
            published_on: published_on(item),
            author_name: item.author.full_name(),
        }
    }
}

/// One page of the listing plus the side list.
#[derive(Debug, Serialize)]
pub struct NewsPageView {
    /// Requested page, 1-based.
    pub page: usize,
    pub page_size: usize,
    pub total_pages: usize,
    pub total_items: usize,
    /// Pagination controls are hidden with a single page.
    pub show_pagination: bool,
    pub items: Vec<NewsCardView>,
    /// Most recent items, newest first.
    pub latest: Vec<NewsCardView>,
    /// Fingerprint of the snapshot the page was cut from.
    pub version_hash: Option<String>,
}

/// Full article.
#[derive(Debug, Serialize)]
pub struct NewsDetailView {
    #[serde(flatten)]
    pub item: NewsItem,
    pub published_on: String,
    pub reading_time: String,
    pub author_initials: String,
}

/// Load status of the feed.
#[derive(Debug, Serialize)]
pub struct FeedStatusView {
    #[serde(flatten)]
    pub status: FeedStatus,
    pub generation: u64,
    pub loaded_at: Option<DateTime<Utc>>,
    pub version_hash: Option<String>,
}

fn published_on(item: &NewsItem) -> String {
    item.published_at()
        .map_or_else(|| item.date.clone(), long_date_es)
}

/// Returns page `page` of the listing with the `latest_count` newest items.
///
/// Out-of-range pages return an empty `items` list.
///
/// # Errors
///
/// Returns `DomainError::Upstream` when the feed failed or is not loaded.
pub fn get_news_page(
    feed: &NewsFeed,
    page: usize,
    page_size: usize,
    latest_count: usize,
) -> Result<NewsPageView, DomainError> {
    let items = feed.items()?;
    let total_pages = total_pages(items.len(), page_size);
    Ok(NewsPageView {
        page,
        page_size,
        total_pages,
        total_items: items.len(),
        show_pagination: total_pages > 1,
        items: get_page(items, page, page_size).iter().map(NewsCardView::from).collect(),
        latest: get_latest(items, latest_count).into_iter().map(NewsCardView::from).collect(),
        version_hash: feed.version_hash().map(str::to_owned),
    })
}

/// Returns the `n` most recent items.
///
/// # Errors
///
/// Returns `DomainError::Upstream` when the feed failed or is not loaded.
pub fn get_latest_news(feed: &NewsFeed, n: usize) -> Result<Vec<NewsCardView>, DomainError> {
    let items = feed.items()?;
    Ok(get_latest(items, n).into_iter().map(NewsCardView::from).collect())
}

/// Returns the article with id `id`.
///
/// # Errors
///
/// Returns `DomainError::NotFound` if no such article is loaded and
/// `DomainError::Upstream` when the feed failed or is not loaded.
pub fn get_news_detail(feed: &NewsFeed, id: i64) -> Result<NewsDetailView, DomainError> {
    let item = find(feed.items()?, id)
        .ok_or_else(|| DomainError::NotFound(format!("news {id} is not available")))?;
    Ok(NewsDetailView {
        published_on: published_on(item),
        reading_time: reading_time_label(&item.body),
        author_initials: author_initials(&item.author),
        item: item.clone(),
    })
}

/// Returns the feed's load status.
#[must_use]
pub fn get_feed_status(feed: &NewsFeed) -> FeedStatusView {
    FeedStatusView {
        status: feed.status().clone(),
        generation: feed.latest_generation(),
        loaded_at: feed.loaded_at(),
        version_hash: feed.version_hash().map(str::to_owned),
    }
}
