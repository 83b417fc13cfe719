use serde_json::Value;

use crate::store::mvi::Action;

pub const REQUEST_SVR_AUTH: &str = "REQUEST_SVR_AUTH";
pub const RECEIVE_SVR_AUTH: &str = "RECEIVE_SVR_AUTH";
pub const FETCH_FAILED_SVR_AUTH: &str = "FETCH_FAILED_SVR_AUTH";

#[derive(Debug, Clone, PartialEq)]
pub enum CollectionAction {
    /// A fetch of the collection has started.
    Request,
    /// The fetch completed with the full collection.
    Receive { payload: Vec<Value> },
    /// The fetch failed. Only dispatched when failure reset is enabled.
    FetchFailed { reason: String },
    /// An action meant for another part of the application.
    Other { kind: String },
}

impl CollectionAction {
    pub fn kind(&self) -> &str {
        match self {
            CollectionAction::Request => REQUEST_SVR_AUTH,
            CollectionAction::Receive { .. } => RECEIVE_SVR_AUTH,
            CollectionAction::FetchFailed { .. } => FETCH_FAILED_SVR_AUTH,
            CollectionAction::Other { kind } => kind,
        }
    }

    pub fn is_request(&self) -> bool {
        matches!(self, CollectionAction::Request)
    }
}

impl Action for CollectionAction {}
