//! The in-memory news collection and its load lifecycle.
//!
//! Each load is identified by a generation number. Only the result of the
//! most recently issued load is applied; a slow earlier request that resolves
//! afterwards is dropped instead of overwriting fresher state.

use chrono::{DateTime, Utc};
use misiones_core::error::DomainError;
use misiones_core::news::NewsItem;
use serde::Serialize;
use sha2::{Digest, Sha256};

/// Load status of the feed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum FeedStatus {
    /// Never loaded.
    #[default]
    Idle,
    /// A load is in flight.
    Loading,
    /// The last applied load succeeded.
    Ready,
    /// The last applied load failed; the list is suppressed until a retry.
    Failed { message: String },
}

/// Handle for one issued load.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadTicket {
    generation: u64,
}

impl LoadTicket {
    /// Generation number of the load.
    #[must_use]
    pub fn generation(self) -> u64 {
        self.generation
    }
}

/// The news collection held for the session.
#[derive(Debug, Default)]
pub struct NewsFeed {
    status: FeedStatus,
    items: Vec<NewsItem>,
    version_hash: Option<String>,
    loaded_at: Option<DateTime<Utc>>,
    issued: u64,
}

impl NewsFeed {
    /// Creates an idle, empty feed.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current status.
    #[must_use]
    pub fn status(&self) -> &FeedStatus {
        &self.status
    }

    /// Generation of the most recently issued load (0 before any).
    #[must_use]
    pub fn latest_generation(&self) -> u64 {
        self.issued
    }

    /// SHA-256 over the applied snapshot, if one is held.
    #[must_use]
    pub fn version_hash(&self) -> Option<&str> {
        self.version_hash.as_deref()
    }

    /// When the held snapshot was applied.
    #[must_use]
    pub fn loaded_at(&self) -> Option<DateTime<Utc>> {
        self.loaded_at
    }

    /// Issues a new load, superseding any in flight.
    pub fn begin_load(&mut self) -> LoadTicket {
        self.issued += 1;
        self.status = FeedStatus::Loading;
        LoadTicket {
            generation: self.issued,
        }
    }

    /// Issues a load only if the feed has never been loaded.
    pub fn begin_load_if_idle(&mut self) -> Option<LoadTicket> {
        (self.status == FeedStatus::Idle).then(|| self.begin_load())
    }

    /// Whether a load is in flight with no snapshot to serve meanwhile.
    #[must_use]
    pub fn awaiting_snapshot(&self) -> bool {
        self.status == FeedStatus::Loading && self.version_hash.is_none()
    }

    /// Applies the outcome of a load.
    ///
    /// Success replaces the whole collection; failure discards it. Returns
    /// `false` without touching state when `ticket` is not the latest issued.
    pub fn complete(
        &mut self,
        ticket: LoadTicket,
        outcome: Result<Vec<NewsItem>, String>,
        now: DateTime<Utc>,
    ) -> bool {
        if ticket.generation != self.issued {
            return false;
        }
        match outcome {
            Ok(items) => {
                self.version_hash = Some(snapshot_hash(&items));
                self.items = items;
                self.loaded_at = Some(now);
                self.status = FeedStatus::Ready;
            }
            Err(message) => {
                self.items.clear();
                self.version_hash = None;
                self.loaded_at = None;
                self.status = FeedStatus::Failed { message };
            }
        }
        true
    }

    /// The collection in source order.
    ///
    /// While a reload is in flight the previous snapshot keeps being served.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Upstream` carrying the failure message when the
    /// last load failed, or when nothing has been loaded yet.
    pub fn items(&self) -> Result<&[NewsItem], DomainError> {
        match &self.status {
            FeedStatus::Ready => Ok(&self.items),
            FeedStatus::Loading if self.version_hash.is_some() => Ok(&self.items),
            FeedStatus::Idle | FeedStatus::Loading => {
                Err(DomainError::Upstream("news have not been loaded yet".to_owned()))
            }
            FeedStatus::Failed { message } => Err(DomainError::Upstream(message.clone())),
        }
    }
}

fn snapshot_hash(items: &[NewsItem]) -> String {
    let mut hasher = Sha256::new();
    for item in items {
        hasher.update(item.id.to_le_bytes());
        for field in [&item.date, &item.title, &item.subtitle, &item.body, &item.image_url] {
            hasher.update(field.as_bytes());
            hasher.update([0u8]);
        }
    }
    format!("{:x}", hasher.finalize())
}
