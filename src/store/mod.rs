//! Collection state, its actions and the reducer folding them together.

mod action;
pub mod mvi;
mod reducer;
mod state;
#[allow(clippy::module_inception)]
mod store;

pub use action::{
    CollectionAction, FETCH_FAILED_SVR_AUTH, RECEIVE_SVR_AUTH, REQUEST_SVR_AUTH,
};
pub use reducer::CollectionReducer;
pub use state::CollectionState;
pub use store::Store;

pub type CollectionStore = Store<CollectionReducer>;
