//! Navigation state: route taxonomies, per-screen navigation stacks, and the
//! tab coordinator that owns one stack per tab.
//!
//! # State machine
//!
//! ```text
//!            push                 push
//!   Empty ─────────→ AtDepth(1) ─────────→ AtDepth(n+1)
//!     ↑                  │ pop                 │
//!     └──────────────────┴──── clear ──────────┘
//! ```
//!
//! Everything here is synchronous and owned by a single thread; observers
//! fire after the mutation that caused them, in mutation order.

pub mod observer;
pub mod path;
pub mod route;
pub mod screen;
pub mod selection;

pub use observer::{log_navigation_path, PathLog, PathLogEntry};
pub use path::{ClearMode, DepthState, NavigationPathStore, NavigationStack, Observer};
pub use route::{ButtonRoute, DecodeError, LinkRoute, Route, StackedRoute, Tagged};
pub use screen::{destination, root_screen, Item, Screen, Section};
pub use selection::{LayoutMode, SelectionTab, TabCoordinator};
