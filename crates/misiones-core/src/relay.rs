//! Contact messages and the relay port they are delivered through.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// A validated contact message ready for delivery.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactMessage {
    /// Sender name.
    pub name: String,
    /// Sender email address.
    pub email: String,
    /// Message body.
    pub message: String,
}

/// Port to the transactional-email relay.
#[async_trait]
pub trait MessageRelay: Send + Sync {
    /// Delivers one message. Success or failure is binary.
    async fn relay(&self, message: &ContactMessage) -> Result<(), DomainError>;
}
