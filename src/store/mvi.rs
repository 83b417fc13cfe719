//! Unidirectional data flow primitives.
//!
//! ```text
//! Action ──→ Reducer ──→ State ──→ Subscribers
//!   ↑                                   │
//!   └───────────────────────────────────┘
//! ```

/// Marker trait for actions.
///
/// Actions describe something that happened (a fetch started, a response
/// arrived). They are dispatched once and discarded.
pub trait Action: Clone + Send + Sync + 'static {}

/// Marker trait for store state.
///
/// States should be:
/// - Immutable (Clone to create new states)
/// - Self-contained (everything a subscriber needs)
/// - Comparable (PartialEq for detecting changes)
pub trait StoreState: Clone + PartialEq + Default + Send + Sync + 'static {}

/// Reducer transforms state based on actions.
///
/// The reducer is the only place where state transitions happen.
/// It must be a pure function: (State, Action) -> State
pub trait Reducer {
    type State: StoreState;
    type Action: Action;

    fn reduce(state: Self::State, action: Self::Action) -> Self::State;
}
