//! Terminal presentation shell around the navigation core.

pub mod app;
pub mod events;
pub mod focus;
pub mod footer;
pub mod header;
pub mod input;
pub mod layout;
pub mod mvi;
pub mod render;
pub mod runtime;
pub mod sidebar;
pub mod terminal_guard;
pub mod theme;
