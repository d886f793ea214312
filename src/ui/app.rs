use crate::config::NavigatorSettings;
use crate::nav::{
    destination, log_navigation_path, root_screen, LayoutMode, PathLog, PathLogEntry, Screen,
    SelectionTab, TabCoordinator, Tagged,
};
use crate::ui::focus::{FocusIntent, FocusReducer, FocusState};
use crate::ui::mvi::Reducer;

/// Generic MVI dispatch: takes current state, runs reducer, stores result.
macro_rules! dispatch_mvi {
    ($self:expr, $field:ident, $reducer:ty, $intent:expr) => {
        $self.$field = <$reducer>::reduce(std::mem::take(&mut $self.$field), $intent);
    };
}

/// Shell state around the navigation core.
///
/// Every navigation change goes through the [`TabCoordinator`]; the app only
/// keeps view-local state (focus, popup visibility) in sync with it.
pub struct App {
    should_quit: bool,
    layout: LayoutMode,
    tabs: TabCoordinator,
    focus: FocusState,
    path_log: PathLog,
    show_path_log: bool,
}

impl App {
    pub fn new(settings: &NavigatorSettings) -> Self {
        let mut tabs =
            TabCoordinator::new(settings.reset_stack_on_tab_switch, settings.clear_mode);
        let path_log = PathLog::new(settings.path_log_capacity);
        for tab in SelectionTab::ALL {
            let store = tabs.store_mut(*tab);
            store.observe(log_navigation_path(*tab));
            store.observe(path_log.recorder(*tab));
        }

        let mut app = Self {
            should_quit: false,
            layout: settings.layout,
            tabs,
            focus: FocusState::default(),
            path_log,
            show_path_log: false,
        };
        app.sync_focus();
        app
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn layout(&self) -> LayoutMode {
        self.layout
    }

    pub fn tabs(&self) -> &TabCoordinator {
        &self.tabs
    }

    pub fn focus(&self) -> &FocusState {
        &self.focus
    }

    /// The screen currently visible on the active tab.
    pub fn screen(&self) -> Screen {
        match self.tabs.current().current() {
            Some(route) => destination(route),
            None => root_screen(self.tabs.selection()),
        }
    }

    /// Push the route of the focused entry, if any.
    pub fn activate(&mut self) {
        let Some(index) = self.focus.index() else {
            return;
        };
        let Some(route) = self.screen().link_at(index) else {
            return;
        };
        self.tabs.current_mut().push(route);
        self.sync_focus();
    }

    pub fn back(&mut self) {
        if self.tabs.current_mut().pop().is_some() {
            self.sync_focus();
        }
    }

    pub fn pop_to_root(&mut self) {
        if !self.tabs.current().is_empty() {
            self.tabs.current_mut().clear();
            self.sync_focus();
        }
    }

    pub fn select_tab(&mut self, tab: SelectionTab) {
        if self.tabs.select(tab) {
            self.sync_focus();
        }
    }

    pub fn next_tab(&mut self) {
        if self.tabs.select_next() {
            self.sync_focus();
        }
    }

    pub fn focus_up(&mut self) {
        dispatch_mvi!(self, focus, FocusReducer, FocusIntent::MoveUp);
    }

    pub fn focus_down(&mut self) {
        dispatch_mvi!(self, focus, FocusReducer, FocusIntent::MoveDown);
    }

    pub fn show_path_log(&self) -> bool {
        self.show_path_log
    }

    pub fn toggle_path_log(&mut self) {
        self.show_path_log = !self.show_path_log;
    }

    pub fn close_path_log(&mut self) {
        self.show_path_log = false;
    }

    pub fn path_log_entries(&self) -> Vec<PathLogEntry> {
        self.path_log.entries()
    }

    fn sync_focus(&mut self) {
        let links = self.screen().links().len();
        dispatch_mvi!(self, focus, FocusReducer, FocusIntent::ScreenChanged { links });
    }
}
