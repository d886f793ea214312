//! Model-View-Intent (MVI) primitives for the terminal shell.
//!
//! ```text
//! Intent ──→ Reducer ──→ State ──→ View
//!    ↑                              │
//!    └──────────────────────────────┘
//! ```
//!
//! - **State**: immutable snapshot the view renders from
//! - **Intent**: a key press or a navigation change the state must follow
//! - **Reducer**: pure `(State, Intent) -> State`
//!
//! The navigation stacks themselves live in [`crate::nav`]; MVI only covers
//! view-local state such as which entry of the visible screen is focused.

mod intent;
mod reducer;
mod state;

pub use intent::Intent;
pub use reducer::Reducer;
pub use state::UiState;
