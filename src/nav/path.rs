//! Push-down navigation stack and the store that owns it.

use crate::nav::route::Route;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Callback invoked after every change with the new stack value.
pub type Observer = Box<dyn FnMut(&NavigationStack) + Send>;

/// Ordered routes, oldest push first.
///
/// Equality compares the whole sequence (values and order).
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NavigationStack(Vec<Route>);

impl NavigationStack {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The most recently pushed route (the visible screen).
    pub fn last(&self) -> Option<Route> {
        self.0.last().copied()
    }

    pub fn as_slice(&self) -> &[Route] {
        &self.0
    }

    pub fn iter(&self) -> impl Iterator<Item = Route> + '_ {
        self.0.iter().copied()
    }
}

impl From<Vec<Route>> for NavigationStack {
    fn from(routes: Vec<Route>) -> Self {
        Self(routes)
    }
}

impl FromIterator<Route> for NavigationStack {
    fn from_iter<I: IntoIterator<Item = Route>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl fmt::Display for NavigationStack {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, route) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{route}")?;
        }
        f.write_str("]")
    }
}

/// How `clear` reports itself to observers.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "snake_case")]
pub enum ClearMode {
    /// One notification carrying the empty stack.
    #[default]
    Reset,
    /// One notification per removed entry, newest first.
    RemoveLast,
}

/// Where a store sits in its `Empty` / `AtDepth(n)` state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DepthState {
    /// Root screen visible.
    Empty,
    /// `n` screens pushed, the deepest one visible.
    AtDepth(usize),
}

/// Owns the navigation stack of one screen instance.
///
/// Every mutation that changes the stack notifies the registered observers
/// synchronously, in registration order, after the mutation is applied.
/// Observers only see a shared borrow of the stack and cannot mutate it.
pub struct NavigationPathStore {
    stack: NavigationStack,
    clear_mode: ClearMode,
    observers: Vec<Observer>,
}

impl Default for NavigationPathStore {
    fn default() -> Self {
        Self::new(ClearMode::default())
    }
}

impl fmt::Debug for NavigationPathStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NavigationPathStore")
            .field("stack", &self.stack)
            .field("clear_mode", &self.clear_mode)
            .field("observers", &self.observers.len())
            .finish()
    }
}

impl NavigationPathStore {
    pub fn new(clear_mode: ClearMode) -> Self {
        Self {
            stack: NavigationStack::new(),
            clear_mode,
            observers: Vec::new(),
        }
    }

    pub fn stack(&self) -> &NavigationStack {
        &self.stack
    }

    pub fn len(&self) -> usize {
        self.stack.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stack.is_empty()
    }

    /// Route of the visible screen, `None` at the root.
    pub fn current(&self) -> Option<Route> {
        self.stack.last()
    }

    pub fn clear_mode(&self) -> ClearMode {
        self.clear_mode
    }

    pub fn depth_state(&self) -> DepthState {
        match self.stack.len() {
            0 => DepthState::Empty,
            n => DepthState::AtDepth(n),
        }
    }

    /// Register a change callback.
    pub fn observe<F>(&mut self, on_change: F)
    where
        F: FnMut(&NavigationStack) + Send + 'static,
    {
        self.observers.push(Box::new(on_change));
    }

    /// Append `route`. Duplicates are allowed.
    pub fn push(&mut self, route: Route) {
        self.stack.0.push(route);
        tracing::trace!(route = %route.qualified(), depth = self.stack.len(), "push");
        self.notify();
    }

    /// Remove the visible screen and return its route.
    pub fn pop(&mut self) -> Option<Route> {
        let route = self.stack.0.pop()?;
        tracing::trace!(route = %route.qualified(), depth = self.stack.len(), "pop");
        self.notify();
        Some(route)
    }

    /// Return to the root screen. No-op (and silent) when already empty.
    pub fn clear(&mut self) {
        if self.stack.is_empty() {
            return;
        }
        tracing::trace!(depth = self.stack.len(), mode = ?self.clear_mode, "clear");
        match self.clear_mode {
            ClearMode::Reset => {
                self.stack.0.clear();
                self.notify();
            }
            ClearMode::RemoveLast => {
                while self.stack.0.pop().is_some() {
                    self.notify();
                }
            }
        }
    }

    fn notify(&mut self) {
        for observer in &mut self.observers {
            observer(&self.stack);
        }
    }
}
