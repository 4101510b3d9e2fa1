//! Reducer trait.

use super::intent::Intent;
use super::state::UiState;

/// Turns `(state, intent)` into the next state.
///
/// Reducers do no I/O. Side effects such as spawning a request are decided by
/// the caller from the state the reducer returns.
pub trait Reducer {
    type State: UiState;
    type Intent: Intent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State;
}
