//! Domain error types.

use serde::Serialize;
use thiserror::Error;

/// One rejected input field and the message to show next to it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldViolation {
    /// Field name as the client sends it.
    pub field: String,
    /// Human-readable message for that field.
    pub message: String,
}

fn join_messages(violations: &[FieldViolation]) -> String {
    violations
        .iter()
        .map(|v| v.message.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}

/// Top-level domain error type.
#[derive(Debug, Error)]
pub enum DomainError {
    /// A requested record does not exist.
    #[error("not found: {0}")]
    NotFound(String),

    /// Input rejected by domain validation.
    #[error("validation error: {0}")]
    Validation(String),

    /// Input rejected field by field; every failing field is listed.
    #[error("validation error: {}", join_messages(.0))]
    InvalidFields(Vec<FieldViolation>),

    /// A remote collaborator (news API, mail relay) failed or is not ready.
    #[error("upstream error: {0}")]
    Upstream(String),

    /// A local infrastructure failure (file access, parsing of local data).
    #[error("infrastructure error: {0}")]
    Infrastructure(String),
}
