//! Model-View-Intent primitives for the form screens.
//!
//! ```text
//! key ──→ Intent ──→ Reducer ──→ State ──→ render
//! ```
//!
//! Reducers are pure. Anything with side effects, such as applying a
//! command to the slot registry, happens in `App` around the dispatch.

/// Snapshot of everything a view needs to draw itself.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}

/// A user action or system event fed to a reducer.
pub trait Intent: Send + 'static {}

/// Pure transition: `(State, Intent) -> State`.
pub trait Reducer {
    type State: UiState;
    type Intent: Intent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State;
}
