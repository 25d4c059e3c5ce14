//! Shared application state.

use std::sync::{Arc, Mutex};

use misiones_core::clock::Clock;
use misiones_core::news::NewsSource;
use misiones_core::relay::MessageRelay;
use misiones_core::rng::DeterministicRng;
use misiones_news::application::shared_feed::SharedNewsFeed;
use misiones_news::domain::pagination::DEFAULT_PAGE_SIZE;
use misiones_regions::application::map_loader::RegionMap;
use misiones_regions::domain::fills::DESKTOP_BREAKPOINT;

/// Tunables the handlers read.
#[derive(Debug, Clone, Copy)]
pub struct Settings {
    /// Viewport width (px) from which hover is enabled.
    pub desktop_breakpoint: f64,
    /// Items per listing page.
    pub news_page_size: usize,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            desktop_breakpoint: DESKTOP_BREAKPOINT,
            news_page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

/// Application state shared across all request handlers.
#[derive(Clone)]
pub struct AppState {
    /// Clock for load timestamps and banner deadlines.
    pub clock: Arc<dyn Clock + Send + Sync>,
    /// RNG for the tooltip jitter.
    pub rng: Arc<Mutex<dyn DeterministicRng + Send>>,
    /// Remote news collection.
    pub news_source: Arc<dyn NewsSource>,
    /// Loaded news, shared by every request.
    pub news_feed: Arc<SharedNewsFeed>,
    /// Outbound mail relay.
    pub message_relay: Arc<dyn MessageRelay>,
    /// Region catalog and map geometry.
    pub region_map: Arc<RegionMap>,
    pub settings: Settings,
}

impl AppState {
    /// Create new application state with an unloaded news feed.
    #[must_use]
    pub fn new(
        clock: Arc<dyn Clock + Send + Sync>,
        rng: Arc<Mutex<dyn DeterministicRng + Send>>,
        news_source: Arc<dyn NewsSource>,
        message_relay: Arc<dyn MessageRelay>,
        region_map: RegionMap,
        settings: Settings,
    ) -> Self {
        Self {
            clock,
            rng,
            news_source,
            news_feed: Arc::new(SharedNewsFeed::new()),
            message_relay,
            region_map: Arc::new(region_map),
            settings,
        }
    }
}
