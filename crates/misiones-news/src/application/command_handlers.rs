//! Command handlers for the news context.
//!
//! A load takes the feed's write lock only to issue a ticket and to apply
//! the result; the fetch itself runs unlocked so readers keep being served.
//! Each fetch runs in its own task, so a caller that goes away mid-load
//! cannot leave the feed stuck in `Loading`.

use std::sync::Arc;

use misiones_core::clock::Clock;
use misiones_core::command::Command;
use misiones_core::error::DomainError;
use misiones_core::news::NewsSource;
use serde::Serialize;
use tokio::task::JoinHandle;
use tracing::{info, warn};

use super::shared_feed::SharedNewsFeed;
use crate::domain::commands::LoadNews;
use crate::domain::feed::LoadTicket;

/// Result of a handled load.
#[derive(Debug, Clone, Serialize)]
pub struct LoadNewsResult {
    /// Generation of this load.
    pub generation: u64,
    /// Whether the result was applied (false when superseded).
    pub applied: bool,
    /// Number of items fetched.
    pub item_count: usize,
}

fn failure_message(err: &DomainError) -> String {
    match err {
        DomainError::InvalidFields(_) => err.to_string(),
        DomainError::NotFound(msg)
        | DomainError::Validation(msg)
        | DomainError::Upstream(msg)
        | DomainError::Infrastructure(msg) => msg.clone(),
    }
}

async fn run_load(
    command: &LoadNews,
    ticket: LoadTicket,
    shared: &SharedNewsFeed,
    source: &dyn NewsSource,
    clock: &dyn Clock,
) -> Result<LoadNewsResult, DomainError> {
    info!(
        correlation_id = %command.correlation_id(),
        command_type = command.command_type(),
        generation = ticket.generation(),
        "fetching news"
    );

    match source.fetch_news().await {
        Ok(items) => {
            let item_count = items.len();
            let applied = shared.write().await.complete(ticket, Ok(items), clock.now());
            if !applied {
                info!(generation = ticket.generation(), "superseded news load discarded");
            }
            Ok(LoadNewsResult {
                generation: ticket.generation(),
                applied,
                item_count,
            })
        }
        Err(err) => {
            warn!(
                correlation_id = %command.correlation_id(),
                generation = ticket.generation(),
                error = %err,
                "news load failed"
            );
            let applied = shared
                .write()
                .await
                .complete(ticket, Err(failure_message(&err)), clock.now());
            if applied {
                Err(err)
            } else {
                Ok(LoadNewsResult {
                    generation: ticket.generation(),
                    applied,
                    item_count: 0,
                })
            }
        }
    }
}

fn spawn_load(
    command: LoadNews,
    ticket: LoadTicket,
    shared: Arc<SharedNewsFeed>,
    source: Arc<dyn NewsSource>,
    clock: Arc<dyn Clock + Send + Sync>,
) -> JoinHandle<Result<LoadNewsResult, DomainError>> {
    tokio::spawn(async move {
        let result = run_load(&command, ticket, &shared, source.as_ref(), clock.as_ref()).await;
        shared.mark_settled(ticket.generation());
        result
    })
}

async fn join_load(
    handle: JoinHandle<Result<LoadNewsResult, DomainError>>,
) -> Result<LoadNewsResult, DomainError> {
    handle
        .await
        .map_err(|e| DomainError::Infrastructure(format!("news load task failed: {e}")))?
}

/// Handles `LoadNews`: issues a new generation and performs exactly one
/// fetch. Used for manual retries.
///
/// # Errors
///
/// Returns the source's error when the fetch fails and this load is still the
/// latest issued.
pub async fn handle_load_news(
    command: &LoadNews,
    shared: &Arc<SharedNewsFeed>,
    source: &Arc<dyn NewsSource>,
    clock: &Arc<dyn Clock + Send + Sync>,
) -> Result<LoadNewsResult, DomainError> {
    let ticket = shared.write().await.begin_load();
    let handle = spawn_load(
        command.clone(),
        ticket,
        Arc::clone(shared),
        Arc::clone(source),
        Arc::clone(clock),
    );
    join_load(handle).await
}

/// Loads the feed on first use and waits for a load that has no earlier
/// snapshot to fall back on. Does nothing once a snapshot or a failure is
/// held, so a failed feed stays failed until an explicit retry.
///
/// Returns `Some` only to the caller that started the load.
///
/// # Errors
///
/// Returns the source's error to the caller that started the load when the
/// fetch fails.
pub async fn ensure_news_loaded(
    shared: &Arc<SharedNewsFeed>,
    source: &Arc<dyn NewsSource>,
    clock: &Arc<dyn Clock + Send + Sync>,
) -> Result<Option<LoadNewsResult>, DomainError> {
    loop {
        let pending = {
            let mut feed = shared.write().await;
            if let Some(ticket) = feed.begin_load_if_idle() {
                drop(feed);
                let handle = spawn_load(
                    LoadNews::new(),
                    ticket,
                    Arc::clone(shared),
                    Arc::clone(source),
                    Arc::clone(clock),
                );
                return join_load(handle).await.map(Some);
            }
            if !feed.awaiting_snapshot() {
                return Ok(None);
            }
            feed.latest_generation()
        };
        shared.wait_settled(pending).await?;
    }
}
