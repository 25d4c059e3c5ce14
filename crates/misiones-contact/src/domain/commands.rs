//! Commands for the contact context.

use misiones_core::command::Command;
use uuid::Uuid;

use super::form::ContactForm;

/// Command to submit the contact form.
#[derive(Debug, Clone)]
pub struct SubmitContact {
    /// The correlation ID for tracing.
    pub correlation_id: Uuid,
    /// The form as typed.
    pub form: ContactForm,
}

impl SubmitContact {
    /// Wraps `form` with a fresh correlation ID.
    #[must_use]
    pub fn new(form: ContactForm) -> Self {
        Self {
            correlation_id: Uuid::new_v4(),
            form,
        }
    }
}

impl Command for SubmitContact {
    fn command_type(&self) -> &'static str {
        "contact.submit"
    }

    fn correlation_id(&self) -> Uuid {
        self.correlation_id
    }
}
