//! Stack-based navigation with value-driven destinations and a
//! tab/sidebar adaptive shell.
//!
//! - [`nav`]: route taxonomies, navigation stacks, tab coordinator
//! - [`config`]: TOML configuration and layout policy resolution
//! - [`replay`]: headless scripted driver
//! - [`ui`]: interactive terminal shell

pub mod config;
pub mod logging;
pub mod nav;
pub mod replay;
pub mod ui;
