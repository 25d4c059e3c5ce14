//! Test relays — mock `MessageRelay` implementations for tests.

use std::sync::Mutex;

use async_trait::async_trait;
use misiones_core::error::DomainError;
use misiones_core::relay::{ContactMessage, MessageRelay};

/// A relay that records every delivered message and always succeeds.
#[derive(Debug, Default)]
pub struct RecordingMessageRelay {
    delivered: Mutex<Vec<ContactMessage>>,
}

impl RecordingMessageRelay {
    /// Creates an empty recording relay.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a snapshot of all delivered messages.
    ///
    /// # Panics
    ///
    /// Panics if the internal mutex is poisoned.
    pub fn delivered(&self) -> Vec<ContactMessage> {
        self.delivered.lock().unwrap().clone()
    }
}

#[async_trait]
impl MessageRelay for RecordingMessageRelay {
    async fn relay(&self, message: &ContactMessage) -> Result<(), DomainError> {
        self.delivered.lock().unwrap().push(message.clone());
        Ok(())
    }
}

/// A relay that always fails with an upstream error.
#[derive(Debug)]
pub struct FailingMessageRelay;

#[async_trait]
impl MessageRelay for FailingMessageRelay {
    async fn relay(&self, _message: &ContactMessage) -> Result<(), DomainError> {
        Err(DomainError::Upstream("relay rejected the message".into()))
    }
}
