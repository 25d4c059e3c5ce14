//! Misiones site — news listing and detail context.
//!
//! Loads the published news collection once, then serves pages, the
//! "latest N" side list and detail views from memory.

pub mod application;
pub mod domain;
