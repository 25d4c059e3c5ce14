//! Application services for the region map.

pub mod map_loader;
pub mod query_handlers;
