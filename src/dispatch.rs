//! Async protocols that turn intents into store actions.
//!
//! `load_if_needed` is single-flight: the guard check and the `Request`
//! dispatch happen under the store lock, so of two overlapping calls only
//! one issues a fetch. `create` and `create_via_form` submit in a spawned
//! task, wait for it to settle, then always refetch without consulting the
//! guard. A submission failure is logged and does not stop the refetch.

use std::sync::Arc;

use tokio::task::JoinHandle;
use tracing::{debug, error, warn};

use crate::client::{check_status, ResourceClient};
use crate::config::Config;
use crate::error::SyncError;
use crate::guard;
use crate::model::ResourceRecord;
use crate::store::{CollectionAction, CollectionStore};

/// Resolved URLs of the server authorization resource.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoints {
    pub collection_url: String,
    pub form_url: String,
}

impl Endpoints {
    pub fn from_config(config: &Config) -> Self {
        Self {
            collection_url: config.endpoint.collection_url(),
            form_url: config.endpoint.form_url(),
        }
    }
}

#[derive(Clone)]
pub struct ActionDispatcher {
    store: Arc<CollectionStore>,
    client: ResourceClient,
    endpoints: Arc<Endpoints>,
    reset_on_failure: bool,
}

impl ActionDispatcher {
    pub fn new(store: Arc<CollectionStore>, client: ResourceClient, endpoints: Endpoints) -> Self {
        Self {
            store,
            client,
            endpoints: Arc::new(endpoints),
            reset_on_failure: false,
        }
    }

    pub fn from_config(config: &Config, store: Arc<CollectionStore>) -> Result<Self, SyncError> {
        let client = ResourceClient::from_config(&config.defaults)?;
        Ok(Self::new(store, client, Endpoints::from_config(config))
            .with_failure_reset(config.defaults.reset_on_fetch_failure))
    }

    /// Dispatch `FetchFailed` when a fetch fails, clearing the fetching flag.
    pub fn with_failure_reset(mut self, enabled: bool) -> Self {
        self.reset_on_failure = enabled;
        self
    }

    pub fn store(&self) -> &Arc<CollectionStore> {
        &self.store
    }

    /// Fetch the collection unless it is loaded or already loading.
    ///
    /// Returns `Ok(None)` when the guard declines. On fetch failure the
    /// error is returned and, unless failure reset is enabled, the store
    /// stays in the fetching state.
    pub async fn load_if_needed(&self) -> Result<Option<CollectionAction>, SyncError> {
        if !self
            .store
            .dispatch_if(guard::should_fetch, CollectionAction::Request)
        {
            debug!("Collection loaded or loading, skipping fetch");
            return Ok(None);
        }
        self.receive().await.map(Some)
    }

    /// Submit `record` as JSON, then refetch the collection.
    pub async fn create(&self, record: &ResourceRecord) -> Result<CollectionAction, SyncError> {
        let client = self.client.clone();
        let url = self.endpoints.collection_url.clone();
        let record = record.clone();

        let submission = tokio::spawn(async move {
            let response = client.submit_as_json(&url, &record).await?;
            check_status(response)?;
            Ok::<(), SyncError>(())
        });
        settle(submission, "json").await;

        self.refetch().await
    }

    /// Submit `record` as a form body, then refetch the collection.
    pub async fn create_via_form(
        &self,
        record: &ResourceRecord,
    ) -> Result<CollectionAction, SyncError> {
        let client = self.client.clone();
        let url = self.endpoints.form_url.clone();
        let record = record.clone();

        let submission = tokio::spawn(async move {
            let submission = client.submit_as_form(&url, &record).await?;
            let status = submission.status();
            let text = submission.text().await?;
            if status.is_success() {
                debug!(status = status.as_u16(), response = %text, "Form accepted");
            } else {
                warn!(status = status.as_u16(), response = %text, "Form rejected");
            }
            Ok::<(), SyncError>(())
        });
        settle(submission, "form").await;

        self.refetch().await
    }

    async fn refetch(&self) -> Result<CollectionAction, SyncError> {
        self.store.dispatch(CollectionAction::Request);
        self.receive().await
    }

    async fn receive(&self) -> Result<CollectionAction, SyncError> {
        let url = &self.endpoints.collection_url;
        match self.client.fetch_collection(url).await {
            Ok(payload) => {
                let action = CollectionAction::Receive { payload };
                self.store.dispatch(action.clone());
                Ok(action)
            }
            Err(err) => {
                if self.reset_on_failure {
                    self.store.dispatch(CollectionAction::FetchFailed {
                        reason: err.to_string(),
                    });
                } else {
                    warn!(
                        error = %err,
                        error_type = err.error_type(),
                        "Fetch failed, collection stays in fetching state"
                    );
                }
                Err(err)
            }
        }
    }
}

/// Wait for a submission task and log its outcome.
async fn settle(submission: JoinHandle<Result<(), SyncError>>, encoding: &str) {
    match submission.await {
        Ok(Ok(())) => debug!(encoding, "Submission settled"),
        Ok(Err(err)) => error!(
            encoding,
            error = %err,
            error_type = err.error_type(),
            "Server authorization submission failed"
        ),
        Err(err) => error!(encoding, error = %err, "Submission task aborted"),
    }
}
