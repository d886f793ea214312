//! Reducer trait.

use super::intent::Intent;
use super::state::UiState;

/// The only place view state transitions happen.
///
/// `reduce` must stay pure; side effects such as pushing a route belong to
/// the caller around the dispatch.
pub trait Reducer {
    type State: UiState;
    type Intent: Intent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State;
}
