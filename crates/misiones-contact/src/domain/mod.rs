//! Domain layer for the contact form.

pub mod commands;
pub mod form;
pub mod status;
