//! Server authorization records as exchanged with the endpoint.

mod record;
mod status;

pub use record::{InvalidRecord, RecordId, ResourceRecord};
pub use status::AuthorizationStatus;
