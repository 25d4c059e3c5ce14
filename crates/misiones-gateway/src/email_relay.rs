//! `MessageRelay` backed by an EmailJS-compatible REST endpoint.

use async_trait::async_trait;
use misiones_core::error::DomainError;
use misiones_core::relay::{ContactMessage, MessageRelay};
use serde::Serialize;
use tracing::{debug, instrument};

/// Public EmailJS send endpoint.
pub const DEFAULT_RELAY_URL: &str = "https://api.emailjs.com/api/v1.0/email/send";

/// Account identifiers the relay authenticates with.
#[derive(Debug, Clone)]
pub struct EmailRelayCredentials {
    pub service_id: String,
    pub template_id: String,
    pub public_key: String,
}

#[derive(Serialize)]
struct SendRequest<'a> {
    service_id: &'a str,
    template_id: &'a str,
    user_id: &'a str,
    template_params: &'a ContactMessage,
}

/// Sends each contact message as one templated email.
#[derive(Debug, Clone)]
pub struct EmailRelay {
    client: reqwest::Client,
    url: String,
    credentials: EmailRelayCredentials,
}

impl EmailRelay {
    /// Creates a relay posting to `url`.
    #[must_use]
    pub fn new(
        client: reqwest::Client,
        url: impl Into<String>,
        credentials: EmailRelayCredentials,
    ) -> Self {
        Self {
            client,
            url: url.into(),
            credentials,
        }
    }
}

#[async_trait]
impl MessageRelay for EmailRelay {
    #[instrument(skip_all, fields(url = %self.url))]
    async fn relay(&self, message: &ContactMessage) -> Result<(), DomainError> {
        let body = SendRequest {
            service_id: &self.credentials.service_id,
            template_id: &self.credentials.template_id,
            user_id: &self.credentials.public_key,
            template_params: message,
        };

        let response = self
            .client
            .post(&self.url)
            .json(&body)
            .send()
            .await
            .map_err(|e| DomainError::Upstream(format!("mail relay request failed: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            let detail = response.text().await.unwrap_or_default();
            return Err(DomainError::Upstream(format!(
                "mail relay rejected the message (status {}): {detail}",
                status.as_u16()
            )));
        }
        debug!("contact message relayed");
        Ok(())
    }
}
