//! News domain model.

pub mod commands;
pub mod feed;
pub mod pagination;
pub mod presentation;
