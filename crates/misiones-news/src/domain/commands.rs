//! Commands for the news context.

use misiones_core::command::Command;
use uuid::Uuid;

/// Command to (re)load the news collection from the remote source.
#[derive(Debug, Clone)]
pub struct LoadNews {
    /// The correlation ID for tracing.
    pub correlation_id: Uuid,
}

impl LoadNews {
    /// Creates a command with a fresh correlation ID.
    #[must_use]
    pub fn new() -> Self {
        Self {
            correlation_id: Uuid::new_v4(),
        }
    }
}

impl Default for LoadNews {
    fn default() -> Self {
        Self::new()
    }
}

impl Command for LoadNews {
    fn command_type(&self) -> &'static str {
        "news.load"
    }

    fn correlation_id(&self) -> Uuid {
        self.correlation_id
    }
}
