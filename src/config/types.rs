use serde::{Deserialize, Serialize};

/// Root configuration container.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub defaults: Defaults,
    #[serde(default)]
    pub endpoint: EndpointConfig,
}

/// Client behavior settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Defaults {
    /// Request timeout in seconds (default: 30).
    #[serde(default = "default_timeout")]
    pub timeout_seconds: u32,
    /// Connection timeout in seconds (default: 5).
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout_seconds: u32,
    /// Clear the fetching flag when a load fails (default: false).
    ///
    /// When off, a failed load leaves the collection marked as fetching and
    /// no further guarded load is attempted.
    #[serde(default)]
    pub reset_on_fetch_failure: bool,
}

/// Location of the server authorization resource.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EndpointConfig {
    /// Scheme, host and port of the adapter (e.g., "http://127.0.0.1:8080").
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Collection path, used for GET and JSON POST.
    #[serde(default = "default_resource_path")]
    pub resource_path: String,
    /// Path accepting form-encoded submissions. Defaults to `{resource_path}Form`.
    #[serde(default)]
    pub form_path: Option<String>,
}

fn default_timeout() -> u32 {
    30
}

fn default_connect_timeout() -> u32 {
    5
}

fn default_base_url() -> String {
    "http://127.0.0.1:8080".to_string()
}

fn default_resource_path() -> String {
    "/mgr/serverAuthorization".to_string()
}

impl EndpointConfig {
    pub fn collection_url(&self) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), self.resource_path)
    }

    pub fn form_url(&self) -> String {
        match &self.form_path {
            Some(path) => format!("{}{}", self.base_url.trim_end_matches('/'), path),
            None => format!("{}Form", self.collection_url()),
        }
    }
}

impl Default for Defaults {
    fn default() -> Self {
        Self {
            timeout_seconds: default_timeout(),
            connect_timeout_seconds: default_connect_timeout(),
            reset_on_fetch_failure: false,
        }
    }
}

impl Default for EndpointConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            resource_path: default_resource_path(),
            form_path: None,
        }
    }
}
