//! Misiones Core — shared domain abstractions.
//!
//! This crate defines the traits and wire records that the region, news and
//! contact contexts depend on. It contains no infrastructure code.

pub mod clock;
pub mod command;
pub mod error;
pub mod news;
pub mod relay;
pub mod rng;
