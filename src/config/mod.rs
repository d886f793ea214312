//! TOML configuration: file location, parsing, validation, and resolution of
//! the layout policy into [`NavigatorSettings`].

mod loader;
mod types;

pub use loader::ConfigError;
pub use types::{
    Config, LayoutChoice, LayoutConfig, LoggingConfig, NavigationConfig, NavigatorSettings,
};
