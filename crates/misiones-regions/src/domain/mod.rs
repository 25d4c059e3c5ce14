//! Region domain model.

pub mod color;
pub mod fills;
pub mod geometry;
pub mod map_controller;
pub mod region;
