//! Misiones site — HTTP adapters.
//!
//! Implements the `NewsSource` and `MessageRelay` ports over `reqwest`.

pub mod email_relay;
pub mod news_source;

pub use email_relay::{EmailRelay, EmailRelayCredentials};
pub use news_source::HttpNewsSource;
