//! Misiones site — regional directory and interactive map context.
//!
//! Owns the fixed list of coordination regions, resolves which region a
//! province belongs to, anchors the hover tooltip inside the map container
//! and decides the fill color of every province.

pub mod application;
pub mod domain;
