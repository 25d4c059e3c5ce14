//! Command handlers for the contact context.

use misiones_core::clock::Clock;
use misiones_core::command::Command;
use misiones_core::error::DomainError;
use misiones_core::relay::MessageRelay;
use serde::Serialize;
use tracing::{info, warn};

use crate::domain::commands::SubmitContact;
use crate::domain::form::ContactForm;
use crate::domain::status::{StatusBanner, SubmitStatus};

/// Result of a submission that reached the relay.
#[derive(Debug, Clone, Serialize)]
pub struct SubmitOutcome {
    #[serde(flatten)]
    pub banner: StatusBanner,
    /// Form contents to show afterwards: cleared on success, the submitted
    /// input on failure so it can be resent.
    pub form: ContactForm,
}

/// Handles `SubmitContact`: validates the form and sends it through the relay.
///
/// A relay failure is not an error of this handler; it yields an outcome with
/// status `error` that keeps the input.
///
/// # Errors
///
/// Returns `DomainError::InvalidFields` listing every invalid field; nothing is
/// sent in that case.
pub async fn handle_submit_contact(
    command: &SubmitContact,
    relay: &dyn MessageRelay,
    clock: &dyn Clock,
) -> Result<SubmitOutcome, DomainError> {
    let message = command
        .form
        .validate()
        .map_err(|errors| {
            DomainError::InvalidFields(errors.into_iter().map(Into::into).collect())
        })?;

    info!(
        correlation_id = %command.correlation_id(),
        command_type = command.command_type(),
        "relaying contact message"
    );

    match relay.relay(&message).await {
        Ok(()) => Ok(SubmitOutcome {
            banner: StatusBanner::show(SubmitStatus::Success, clock.now()),
            form: ContactForm::default(),
        }),
        Err(err) => {
            warn!(
                correlation_id = %command.correlation_id(),
                error = %err,
                "contact relay failed"
            );
            Ok(SubmitOutcome {
                banner: StatusBanner::show(SubmitStatus::Error, clock.now()),
                form: command.form.clone(),
            })
        }
    }
}
