//! Application services for the contact form.

pub mod command_handlers;
