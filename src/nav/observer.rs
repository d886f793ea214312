//! Ready-made change observers.

use crate::nav::path::NavigationStack;
use crate::nav::selection::SelectionTab;
use parking_lot::Mutex;
use serde::Serialize;
use std::collections::VecDeque;
use std::fmt;
use std::sync::Arc;

/// Logs every change of `tab`'s stack at info level.
pub fn log_navigation_path(tab: SelectionTab) -> impl FnMut(&NavigationStack) + Send + 'static {
    move |stack| {
        tracing::info!(
            target: "stacknav::navigation",
            tab = %tab,
            depth = stack.len(),
            "navigation path {stack}"
        );
    }
}

/// One recorded notification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PathLogEntry {
    pub tab: SelectionTab,
    pub path: NavigationStack,
}

impl fmt::Display for PathLogEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] navigation path {}", self.tab, self.path)
    }
}

/// Bounded in-memory history of notifications, shared between the
/// recorders it hands out and whoever reads it.
#[derive(Debug, Clone)]
pub struct PathLog {
    entries: Arc<Mutex<VecDeque<PathLogEntry>>>,
    capacity: usize,
}

impl PathLog {
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: Arc::new(Mutex::new(VecDeque::new())),
            capacity: capacity.max(1),
        }
    }

    /// An observer that appends to this log, dropping the oldest entry
    /// once the log is full.
    pub fn recorder(&self, tab: SelectionTab) -> impl FnMut(&NavigationStack) + Send + 'static {
        let entries = Arc::clone(&self.entries);
        let capacity = self.capacity;
        move |stack| {
            let mut entries = entries.lock();
            if entries.len() == capacity {
                entries.pop_front();
            }
            entries.push_back(PathLogEntry {
                tab,
                path: stack.clone(),
            });
        }
    }

    /// Snapshot, oldest first.
    pub fn entries(&self) -> Vec<PathLogEntry> {
        self.entries.lock().iter().cloned().collect()
    }

    /// Remove and return everything recorded so far, oldest first.
    pub fn drain(&self) -> Vec<PathLogEntry> {
        self.entries.lock().drain(..).collect()
    }

    pub fn len(&self) -> usize {
        self.entries.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.lock().is_empty()
    }
}
