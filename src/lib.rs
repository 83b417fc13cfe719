//! Client-side synchronization of server authorizations.
//!
//! ```text
//! intent ──→ ActionDispatcher ──→ ResourceClient ──→ endpoint
//!                 │    ↑
//!                 │  guard
//!                 ↓
//!              Store ──→ subscribers
//! ```

pub mod client;
pub mod config;
pub mod dispatch;
pub mod error;
pub mod form;
pub mod guard;
pub mod logging;
pub mod model;
pub mod store;

pub use client::{check_status, FormSubmission, ResourceClient};
pub use dispatch::{ActionDispatcher, Endpoints};
pub use error::SyncError;
pub use model::ResourceRecord;
pub use store::{CollectionAction, CollectionState, CollectionStore};
