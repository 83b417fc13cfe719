use crate::store::action::CollectionAction;
use crate::store::mvi::Reducer;
use crate::store::state::CollectionState;

pub struct CollectionReducer;

impl Reducer for CollectionReducer {
    type State = CollectionState;
    type Action = CollectionAction;

    fn reduce(state: Self::State, action: Self::Action) -> Self::State {
        match action {
            CollectionAction::Request => CollectionState {
                is_fetching: true,
                ..state
            },
            // Wholesale replacement, never a merge.
            CollectionAction::Receive { payload } => CollectionState {
                items: payload,
                is_fetching: false,
                last_error: None,
            },
            CollectionAction::FetchFailed { reason } => CollectionState {
                is_fetching: false,
                last_error: Some(reason),
                ..state
            },
            CollectionAction::Other { .. } => state,
        }
    }
}
