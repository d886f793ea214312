//! Shared helpers for navigation tests.

#![allow(dead_code)]

use stacknav::config::NavigatorSettings;
use stacknav::nav::{ClearMode, LayoutMode, NavigationPathStore, NavigationStack};
use std::sync::{Arc, Mutex};

/// Every stack value an observer was handed, in notification order.
#[derive(Clone, Default)]
pub struct Recorded(Arc<Mutex<Vec<NavigationStack>>>);

impl Recorded {
    pub fn attach(store: &mut NavigationPathStore) -> Self {
        let recorded = Self::default();
        let sink = Arc::clone(&recorded.0);
        store.observe(move |stack| sink.lock().unwrap().push(stack.clone()));
        recorded
    }

    pub fn snapshots(&self) -> Vec<NavigationStack> {
        self.0.lock().unwrap().clone()
    }

    pub fn count(&self) -> usize {
        self.0.lock().unwrap().len()
    }

    pub fn last_tags(&self) -> Vec<&'static str> {
        self.0
            .lock()
            .unwrap()
            .last()
            .map(|stack| stack.iter().map(|route| route.tag()).collect())
            .unwrap_or_default()
    }
}

pub fn settings(layout: LayoutMode, reset: bool) -> NavigatorSettings {
    NavigatorSettings {
        layout,
        reset_stack_on_tab_switch: reset,
        clear_mode: ClearMode::Reset,
        path_log_capacity: 16,
    }
}
