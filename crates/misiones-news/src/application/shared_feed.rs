//! The news feed as shared by concurrent requests.
//!
//! Besides the lock around [`NewsFeed`], it publishes the highest generation
//! whose fetch has finished, so a request can wait for a load started by
//! another one instead of reporting the feed as unavailable.

use misiones_core::error::DomainError;
use tokio::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard, watch};

use crate::domain::feed::NewsFeed;

/// A [`NewsFeed`] behind a lock, plus load-completion notifications.
#[derive(Debug)]
pub struct SharedNewsFeed {
    feed: RwLock<NewsFeed>,
    settled: watch::Sender<u64>,
}

impl SharedNewsFeed {
    /// Creates an idle, empty feed.
    #[must_use]
    pub fn new() -> Self {
        let (settled, _) = watch::channel(0);
        Self {
            feed: RwLock::new(NewsFeed::new()),
            settled,
        }
    }

    /// Read access to the feed.
    pub async fn read(&self) -> RwLockReadGuard<'_, NewsFeed> {
        self.feed.read().await
    }

    pub(crate) async fn write(&self) -> RwLockWriteGuard<'_, NewsFeed> {
        self.feed.write().await
    }

    /// Records that the fetch of `generation` has finished, applied or not.
    pub(crate) fn mark_settled(&self, generation: u64) {
        self.settled.send_modify(|settled| *settled = (*settled).max(generation));
    }

    /// Waits until the fetch of `generation` (or a later one) has finished.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Infrastructure` if the notification channel is
    /// closed, which cannot happen while `self` is alive.
    pub async fn wait_settled(&self, generation: u64) -> Result<(), DomainError> {
        let mut settled = self.settled.subscribe();
        settled
            .wait_for(|settled| *settled >= generation)
            .await
            .map(|_| ())
            .map_err(|e| DomainError::Infrastructure(format!("news load notification lost: {e}")))
    }
}

impl Default for SharedNewsFeed {
    fn default() -> Self {
        Self::new()
    }
}
