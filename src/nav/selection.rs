//! Tab/sidebar selection over parallel navigation stacks.

use crate::nav::path::{ClearMode, NavigationPathStore};
use crate::nav::route::{tagged_enum, Tagged};
use serde::{Deserialize, Serialize};
use std::fmt;

tagged_enum! {
    /// Which of the parallel navigation stacks is visible.
    pub enum SelectionTab in "tab" {
        First => "first",
        Second => "second",
    }
}

impl Default for SelectionTab {
    fn default() -> Self {
        SelectionTab::First
    }
}

/// Presentation width class, resolved once when the app is composed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LayoutMode {
    /// Tab bar; the tabs share one interaction surface.
    Compact,
    /// Persistent sidebar next to the detail screen.
    Expanded,
}

impl LayoutMode {
    /// Default reset-on-switch policy for this width class.
    pub fn resets_stack_on_tab_switch(self) -> bool {
        matches!(self, LayoutMode::Compact)
    }

    pub fn label(self) -> &'static str {
        match self {
            LayoutMode::Compact => "compact",
            LayoutMode::Expanded => "expanded",
        }
    }
}

impl fmt::Display for LayoutMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One [`NavigationPathStore`] per tab plus the active selection.
#[derive(Debug)]
pub struct TabCoordinator {
    selection: SelectionTab,
    stores: Vec<NavigationPathStore>,
    reset_stack_on_tab_switch: bool,
}

impl TabCoordinator {
    pub fn new(reset_stack_on_tab_switch: bool, clear_mode: ClearMode) -> Self {
        Self {
            selection: SelectionTab::default(),
            stores: SelectionTab::ALL
                .iter()
                .map(|_| NavigationPathStore::new(clear_mode))
                .collect(),
            reset_stack_on_tab_switch,
        }
    }

    pub fn selection(&self) -> SelectionTab {
        self.selection
    }

    pub fn resets_stack_on_tab_switch(&self) -> bool {
        self.reset_stack_on_tab_switch
    }

    /// Make `tab` the active one. Returns `false` when it already was.
    ///
    /// With the reset policy on, the stack of the tab being left is cleared
    /// before the switch.
    pub fn select(&mut self, tab: SelectionTab) -> bool {
        if tab == self.selection {
            return false;
        }
        let previous = self.selection;
        if self.reset_stack_on_tab_switch {
            self.store_mut(previous).clear();
        }
        self.selection = tab;
        tracing::debug!(from = %previous, to = %tab, reset = self.reset_stack_on_tab_switch, "tab selected");
        true
    }

    /// Select the tab after the active one, wrapping around.
    pub fn select_next(&mut self) -> bool {
        let all = SelectionTab::ALL;
        let next = all[(self.selection.index() + 1) % all.len()];
        self.select(next)
    }

    pub fn store(&self, tab: SelectionTab) -> &NavigationPathStore {
        &self.stores[tab.index()]
    }

    pub fn store_mut(&mut self, tab: SelectionTab) -> &mut NavigationPathStore {
        &mut self.stores[tab.index()]
    }

    pub fn current(&self) -> &NavigationPathStore {
        self.store(self.selection)
    }

    pub fn current_mut(&mut self) -> &mut NavigationPathStore {
        let tab = self.selection;
        self.store_mut(tab)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nav::route::{ButtonRoute, LinkRoute};

    #[test]
    fn first_tab_is_selected_initially() {
        let tabs = TabCoordinator::new(true, ClearMode::Reset);
        assert_eq!(tabs.selection(), SelectionTab::First);
        assert!(tabs.current().is_empty());
    }

    #[test]
    fn selecting_active_tab_keeps_stack() {
        let mut tabs = TabCoordinator::new(true, ClearMode::Reset);
        tabs.current_mut().push(LinkRoute::First.into());
        assert!(!tabs.select(SelectionTab::First));
        assert_eq!(tabs.current().len(), 1);
    }

    #[test]
    fn reset_clears_only_the_tab_being_left() {
        let mut tabs = TabCoordinator::new(true, ClearMode::Reset);
        tabs.store_mut(SelectionTab::Second)
            .push(ButtonRoute::First.into());
        tabs.current_mut().push(LinkRoute::Second.into());

        assert!(tabs.select(SelectionTab::Second));
        assert!(tabs.store(SelectionTab::First).is_empty());
        assert_eq!(tabs.store(SelectionTab::Second).len(), 1);
    }

    #[test]
    fn select_next_wraps() {
        let mut tabs = TabCoordinator::new(false, ClearMode::Reset);
        assert!(tabs.select_next());
        assert_eq!(tabs.selection(), SelectionTab::Second);
        assert!(tabs.select_next());
        assert_eq!(tabs.selection(), SelectionTab::First);
    }

    #[test]
    fn layout_mode_policy() {
        assert!(LayoutMode::Compact.resets_stack_on_tab_switch());
        assert!(!LayoutMode::Expanded.resets_stack_on_tab_switch());
    }
}
