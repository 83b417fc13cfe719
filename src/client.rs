//! HTTP access to the server authorization resource.
//!
//! All requests share one `reqwest::Client` with a cookie store, so session
//! cookies set by the adapter are sent back on later requests.

use std::time::Duration;

use reqwest::header::{ACCEPT, CONTENT_TYPE};
use reqwest::{Client, Response, StatusCode};
use serde::Serialize;
use serde_json::Value;
use tracing::debug;

use crate::config::Defaults;
use crate::error::SyncError;
use crate::form::{self, FormValue};

const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded; charset=utf-8";
const FORM_ACCEPT: &str = "application/json, application/xml, text/plain, text/html, */*";

#[derive(Clone)]
pub struct ResourceClient {
    client: Client,
}

impl ResourceClient {
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    pub fn from_config(defaults: &Defaults) -> Result<Self, SyncError> {
        let client = Client::builder()
            .cookie_store(true)
            .connect_timeout(Duration::from_secs(defaults.connect_timeout_seconds.into()))
            .timeout(Duration::from_secs(defaults.timeout_seconds.into()))
            .build()
            .map_err(SyncError::ClientBuild)?;
        Ok(Self::new(client))
    }

    /// GET the collection and parse it as a JSON array.
    pub async fn fetch_collection(&self, url: &str) -> Result<Vec<Value>, SyncError> {
        debug!(url, "Fetching collection");
        let response = self
            .client
            .get(url)
            .header(ACCEPT, "application/json")
            .send()
            .await
            .map_err(|source| SyncError::Transport {
                url: url.to_string(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = unread_body(response.text().await);
            return Err(SyncError::Unsuccessful {
                url: url.to_string(),
                status: status.as_u16(),
                body,
            });
        }

        let items: Vec<Value> = response.json().await.map_err(|source| SyncError::Decode {
            url: url.to_string(),
            source,
        })?;
        debug!(url, count = items.len(), "Collection received");
        Ok(items)
    }

    /// POST `record` as a form body.
    ///
    /// Non-2xx responses are not errors here; the returned submission
    /// carries the status and the unread body.
    pub async fn submit_as_form(
        &self,
        url: &str,
        record: impl Into<FormValue>,
    ) -> Result<FormSubmission, SyncError> {
        let value = record.into();
        let body = form::to_body(&form::encode(&value)?);
        debug!(url, bytes = body.len(), "Submitting form");

        let response = self
            .client
            .post(url)
            .header(ACCEPT, FORM_ACCEPT)
            .header(CONTENT_TYPE, FORM_CONTENT_TYPE)
            .body(body)
            .send()
            .await
            .map_err(|source| SyncError::Transport {
                url: url.to_string(),
                source,
            })?;

        Ok(FormSubmission {
            url: url.to_string(),
            response,
        })
    }

    /// POST `record` as JSON. The caller validates the status.
    pub async fn submit_as_json<T>(&self, url: &str, record: &T) -> Result<Response, SyncError>
    where
        T: Serialize + ?Sized,
    {
        debug!(url, "Submitting JSON");
        self.client
            .post(url)
            .header(ACCEPT, "application/json")
            .json(record)
            .send()
            .await
            .map_err(|source| SyncError::Transport {
                url: url.to_string(),
                source,
            })
    }
}

/// Body of an unsuccessful response, or why it could not be read.
fn unread_body<E: std::fmt::Display>(body: Result<String, E>) -> String {
    body.unwrap_or_else(|err| {
        debug!(error = %err, "Failed to read error response body");
        format!("<body unavailable: {err}>")
    })
}

/// Pass 2xx responses through; anything else becomes `HttpStatus`.
pub fn check_status(response: Response) -> Result<Response, SyncError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    Err(SyncError::HttpStatus {
        status: status.as_u16(),
        status_text: status.canonical_reason().unwrap_or_default().to_string(),
        response: Box::new(response),
    })
}

/// Response to a form submission whose body has not been read yet.
#[derive(Debug)]
pub struct FormSubmission {
    url: String,
    response: Response,
}

impl FormSubmission {
    pub fn status(&self) -> StatusCode {
        self.response.status()
    }

    /// Read the body as plain text, without interpreting it.
    pub async fn text(self) -> Result<String, SyncError> {
        let url = self.url;
        self.response
            .text()
            .await
            .map_err(|source| SyncError::Decode { url, source })
    }

    pub fn into_response(self) -> Response {
        self.response
    }
}
