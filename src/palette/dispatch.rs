use std::collections::VecDeque;

use thiserror::Error;
use time::OffsetDateTime;
use tracing::{debug, warn};

use super::registry::CommandEntry;

/// A handler invocation that failed. The underlying error is carried as the
/// source and never propagates raw out of the executor.
#[derive(Debug, Error)]
#[error("command '{command_id}' failed: {cause}")]
pub struct HandlerError {
    pub command_id: String,
    #[source]
    pub cause: anyhow::Error,
}

/// One dispatched attempt, success or failure.
#[derive(Clone, Debug)]
pub struct HistoryEntry {
    pub query: String,
    pub command_id: String,
    pub timestamp: OffsetDateTime,
}

/// Executes resolved commands and keeps the bounded dispatch history.
///
/// History appends happen after the handler future completes, so entries are
/// ordered by completion, and an entry is recorded for every attempt whether
/// or not the handler succeeded.
#[derive(Debug, Default)]
pub struct DispatchExecutor {
    history: VecDeque<HistoryEntry>,
    cap: Option<usize>,
}

impl DispatchExecutor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Evict the oldest entries once the history grows past `cap`.
    pub fn with_history_cap(cap: usize) -> Self {
        Self {
            history: VecDeque::new(),
            cap: Some(cap),
        }
    }

    pub async fn execute(
        &mut self,
        entry: &CommandEntry,
        query_used: &str,
    ) -> Result<(), HandlerError> {
        debug!(command = %entry.id, query = query_used, "dispatching");
        let result = entry.handler.invoke().await;

        self.history.push_back(HistoryEntry {
            query: query_used.to_string(),
            command_id: entry.id.clone(),
            timestamp: OffsetDateTime::now_utc(),
        });
        if let Some(cap) = self.cap {
            while self.history.len() > cap {
                self.history.pop_front();
            }
        }

        result.map_err(|cause| {
            warn!(command = %entry.id, error = %cause, "handler failed");
            HandlerError {
                command_id: entry.id.clone(),
                cause,
            }
        })
    }

    pub fn history(&self) -> impl Iterator<Item = &HistoryEntry> {
        self.history.iter()
    }

    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    pub fn clear_history(&mut self) {
        self.history.clear();
    }
}

#[cfg(test)]
#[path = "../tests/palette/dispatch_tests.rs"]
mod tests;
