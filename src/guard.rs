//! Decides whether the collection needs to be fetched.

use crate::store::CollectionState;

/// True when nothing has been loaded and no fetch is running.
///
/// There is no staleness check: once a fetch returns at least one record
/// this never fires again. Forced refreshes go through `create`.
pub fn should_fetch(state: &CollectionState) -> bool {
    state.is_empty() && !state.is_fetching
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn empty_and_idle_fetches() {
        assert!(should_fetch(&CollectionState::default()));
    }

    #[test]
    fn in_flight_fetch_blocks() {
        let state = CollectionState {
            is_fetching: true,
            ..CollectionState::default()
        };
        assert!(!should_fetch(&state));
    }

    #[test]
    fn loaded_collection_blocks() {
        let state = CollectionState {
            items: vec![json!({"id": 1})],
            ..CollectionState::default()
        };
        assert!(!should_fetch(&state));
    }
}
