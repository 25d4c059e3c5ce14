//! Shared test doubles and fixtures for the Misiones site backend.

mod clock;
mod news;
mod relay;
mod rng;

pub use clock::FixedClock;
pub use news::{DelayedNewsSource, FailingNewsSource, StubNewsSource, news_item, numbered_news};
pub use relay::{FailingMessageRelay, RecordingMessageRelay};
pub use rng::{MockRng, SequenceRng};
