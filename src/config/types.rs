use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::nav::{ClearMode, LayoutMode};

/// Root configuration container.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub layout: LayoutConfig,
    #[serde(default)]
    pub navigation: NavigationConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Requested layout; `Auto` is resolved against the terminal width.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum LayoutChoice {
    Compact,
    Expanded,
    #[default]
    Auto,
}

/// Layout and tab-switch policy.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LayoutConfig {
    #[serde(default)]
    pub mode: LayoutChoice,
    /// Minimum terminal width (columns) for `auto` to pick the sidebar layout.
    #[serde(default = "default_auto_expanded_min_width")]
    pub auto_expanded_min_width: u16,
    /// Overrides the policy implied by the layout mode.
    #[serde(default)]
    pub reset_stack_on_tab_switch: Option<bool>,
}

/// Navigation stack behaviour.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NavigationConfig {
    #[serde(default)]
    pub clear_mode: ClearMode,
    /// Number of change notifications kept for the path log popup.
    #[serde(default = "default_path_log_capacity")]
    pub path_log_capacity: usize,
}

/// Log output.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Level used when `RUST_LOG` is unset ("error" through "trace", or "off").
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Log file for the interactive UI. Defaults to the user cache directory.
    #[serde(default)]
    pub file: Option<PathBuf>,
}

fn default_auto_expanded_min_width() -> u16 {
    100
}

fn default_path_log_capacity() -> usize {
    50
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            mode: LayoutChoice::default(),
            auto_expanded_min_width: default_auto_expanded_min_width(),
            reset_stack_on_tab_switch: None,
        }
    }
}

impl Default for NavigationConfig {
    fn default() -> Self {
        Self {
            clear_mode: ClearMode::default(),
            path_log_capacity: default_path_log_capacity(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            file: None,
        }
    }
}

/// Fully resolved values the navigator is composed from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavigatorSettings {
    pub layout: LayoutMode,
    pub reset_stack_on_tab_switch: bool,
    pub clear_mode: ClearMode,
    pub path_log_capacity: usize,
}

impl LayoutConfig {
    /// Resolve the layout mode. Without a known width `auto` is compact.
    pub fn resolve(&self, terminal_width: Option<u16>) -> LayoutMode {
        match self.mode {
            LayoutChoice::Compact => LayoutMode::Compact,
            LayoutChoice::Expanded => LayoutMode::Expanded,
            LayoutChoice::Auto => match terminal_width {
                Some(width) if width >= self.auto_expanded_min_width => LayoutMode::Expanded,
                _ => LayoutMode::Compact,
            },
        }
    }
}

impl Config {
    /// Resolve layout and policy once, at composition time.
    pub fn navigator_settings(&self, terminal_width: Option<u16>) -> NavigatorSettings {
        let layout = self.layout.resolve(terminal_width);
        NavigatorSettings {
            layout,
            reset_stack_on_tab_switch: self
                .layout
                .reset_stack_on_tab_switch
                .unwrap_or_else(|| layout.resets_stack_on_tab_switch()),
            clear_mode: self.navigation.clear_mode,
            path_log_capacity: self.navigation.path_log_capacity,
        }
    }
}
