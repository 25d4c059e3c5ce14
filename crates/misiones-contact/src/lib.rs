//! Misiones site — contact form context.
//!
//! Validates contact submissions and hands them to the mail relay, reporting
//! a transient success or error banner back to the caller.

pub mod application;
pub mod domain;
