//! Route modules organized by context.

pub mod contact;
pub mod health;
pub mod news;
pub mod regions;
