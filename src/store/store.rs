//! State container that applies actions through a reducer.
//!
//! State lives inside a `watch` channel so subscribers always see the latest
//! snapshot. Every dispatched action is also published on a `broadcast`
//! channel, in the order it was applied.

use std::marker::PhantomData;

use tokio::sync::{broadcast, watch};

use crate::store::mvi::Reducer;

const ACTION_CHANNEL_CAPACITY: usize = 64;

pub struct Store<R: Reducer> {
    state: watch::Sender<R::State>,
    actions: broadcast::Sender<R::Action>,
    _reducer: PhantomData<fn() -> R>,
}

impl<R: Reducer> Store<R> {
    pub fn new() -> Self {
        Self::with_state(R::State::default())
    }

    pub fn with_state(state: R::State) -> Self {
        let (state, _) = watch::channel(state);
        let (actions, _) = broadcast::channel(ACTION_CHANNEL_CAPACITY);
        Self {
            state,
            actions,
            _reducer: PhantomData,
        }
    }

    /// Clone of the current state.
    pub fn state(&self) -> R::State {
        self.state.borrow().clone()
    }

    /// Apply `action` to the current state.
    pub fn dispatch(&self, action: R::Action) {
        self.dispatch_if(|_| true, action);
    }

    /// Apply `action` only if `predicate` holds for the current state.
    ///
    /// The check and the reduction happen under one lock, so no other
    /// dispatch can slip in between. Returns whether the action was applied.
    pub fn dispatch_if<P>(&self, predicate: P, action: R::Action) -> bool
    where
        P: FnOnce(&R::State) -> bool,
    {
        let mut applied = false;
        self.state.send_if_modified(|state| {
            if !predicate(state) {
                return false;
            }
            applied = true;
            // No subscribers is fine; the action log is best-effort.
            let _ = self.actions.send(action.clone());

            let next = R::reduce(state.clone(), action);
            if next == *state {
                return false;
            }
            *state = next;
            true
        });
        applied
    }

    /// Receiver notified whenever the state changes.
    pub fn subscribe(&self) -> watch::Receiver<R::State> {
        self.state.subscribe()
    }

    /// Receiver of every action applied from now on.
    pub fn actions(&self) -> broadcast::Receiver<R::Action> {
        self.actions.subscribe()
    }
}

impl<R: Reducer> Default for Store<R> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::{CollectionAction, CollectionReducer, CollectionState};
    use serde_json::json;

    type TestStore = Store<CollectionReducer>;

    #[test]
    fn starts_empty_and_idle() {
        let store = TestStore::new();
        assert_eq!(store.state(), CollectionState::default());
    }

    #[test]
    fn dispatch_if_skips_when_predicate_fails() {
        let store = TestStore::new();
        let applied = store.dispatch_if(|state| !state.is_fetching, CollectionAction::Request);
        assert!(applied);
        let applied = store.dispatch_if(|state| !state.is_fetching, CollectionAction::Request);
        assert!(!applied);
        assert!(store.state().is_fetching);
    }

    #[test]
    fn subscribers_see_changes() {
        let store = TestStore::new();
        let mut rx = store.subscribe();
        store.dispatch(CollectionAction::Receive {
            payload: vec![json!({"id": 1})],
        });
        assert!(rx.has_changed().unwrap());
        assert_eq!(rx.borrow_and_update().len(), 1);
    }

    #[test]
    fn ignored_action_does_not_notify() {
        let store = TestStore::new();
        let mut rx = store.subscribe();
        store.dispatch(CollectionAction::Other {
            kind: "@@router/LOCATION_CHANGE".to_string(),
        });
        assert!(!rx.has_changed().unwrap());
    }

    #[test]
    fn actions_are_published_in_order() {
        let store = TestStore::new();
        let mut rx = store.actions();
        store.dispatch(CollectionAction::Request);
        store.dispatch(CollectionAction::Receive { payload: vec![] });
        assert_eq!(rx.try_recv().unwrap(), CollectionAction::Request);
        assert_eq!(
            rx.try_recv().unwrap(),
            CollectionAction::Receive { payload: vec![] }
        );
    }
}
