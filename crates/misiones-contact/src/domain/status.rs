//! Submission status and the banner that reports it.

use chrono::{DateTime, Duration, Utc};
use serde::Serialize;

/// Seconds a success or error banner stays visible.
pub const BANNER_SECONDS: i64 = 5;

/// Outcome of the latest submission as shown to the visitor.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SubmitStatus {
    #[default]
    Idle,
    Success,
    Error,
}

/// A status banner that dismisses itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StatusBanner {
    pub status: SubmitStatus,
    pub dismiss_at: DateTime<Utc>,
}

impl StatusBanner {
    /// Shows `status` from `now` for [`BANNER_SECONDS`].
    #[must_use]
    pub fn show(status: SubmitStatus, now: DateTime<Utc>) -> Self {
        Self {
            status,
            dismiss_at: now + Duration::seconds(BANNER_SECONDS),
        }
    }

    /// Status visible at `now`; back to idle once the banner is dismissed.
    #[must_use]
    pub fn status_at(&self, now: DateTime<Utc>) -> SubmitStatus {
        if now < self.dismiss_at {
            self.status
        } else {
            SubmitStatus::Idle
        }
    }
}
