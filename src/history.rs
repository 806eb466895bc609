use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use chrono::{DateTime, Utc};

const CODE_SNIPPET_LIMIT: usize = 100;

#[derive(Debug, Clone, PartialEq)]
pub struct HistoryEntry {
    pub timestamp: DateTime<Utc>,
    pub code: String,
    pub query: String,
    pub response: String,
}

/// Bounded, write-only log of past analyze calls. Advisory telemetry for the
/// lifetime of the process: nothing on the request path ever reads it back,
/// and recording must never fail or block a response.
#[derive(Clone)]
pub struct HistoryLog {
    entries: Arc<Mutex<VecDeque<HistoryEntry>>>,
    capacity: usize,
}

impl HistoryLog {
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: Arc::new(Mutex::new(VecDeque::with_capacity(capacity))),
            capacity,
        }
    }

    /// Best-effort append. A poisoned lock is swallowed; the caller never
    /// sees a recording failure.
    pub fn record(&self, code: &str, query: &str, response: &str) {
        let entry = HistoryEntry {
            timestamp: Utc::now(),
            code: truncate_snippet(code),
            query: query.to_string(),
            response: response.to_string(),
        };

        if let Ok(mut entries) = self.entries.lock() {
            if self.capacity > 0 && entries.len() == self.capacity {
                entries.pop_front();
            }
            entries.push_back(entry);
        }
    }

    pub fn snapshot(&self) -> Vec<HistoryEntry> {
        self.entries
            .lock()
            .map(|entries| entries.iter().cloned().collect())
            .unwrap_or_default()
    }
}

fn truncate_snippet(code: &str) -> String {
    if code.chars().count() > CODE_SNIPPET_LIMIT {
        let truncated: String = code.chars().take(CODE_SNIPPET_LIMIT).collect();
        format!("{truncated}...")
    } else {
        code.to_string()
    }
}
