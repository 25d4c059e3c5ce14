//! Application services for the news feed.

pub mod command_handlers;
pub mod query_handlers;
pub mod shared_feed;
