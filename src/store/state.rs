use serde_json::Value;

use crate::model::ResourceRecord;
use crate::store::mvi::StoreState;

/// The server authorization collection as last fetched.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CollectionState {
    /// Raw records in server order.
    pub items: Vec<Value>,
    /// True between a `Request` and the matching `Receive`.
    pub is_fetching: bool,
    /// Reason of the last failed fetch, when failure reset is enabled.
    pub last_error: Option<String>,
}

impl StoreState for CollectionState {}

impl CollectionState {
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Typed view of the collection. Entries that do not parse are skipped.
    pub fn records(&self) -> impl Iterator<Item = ResourceRecord> + '_ {
        self.items.iter().filter_map(ResourceRecord::from_value)
    }
}
