//! Shared test utilities and mock infrastructure.

#![allow(dead_code, unused_imports)]

pub mod mock_backend;

use authsync::config::{Config, Defaults, EndpointConfig};
use authsync::{ActionDispatcher, CollectionStore};
use std::path::PathBuf;
use std::sync::Arc;
use tempfile::TempDir;

pub const RESOURCE_PATH: &str = "/mgr/serverAuthorization";
pub const FORM_PATH: &str = "/mgr/serverAuthForm";

/// Config pointing at `base_url` with short timeouts.
pub fn test_config(base_url: &str) -> Config {
    Config {
        defaults: Defaults {
            timeout_seconds: 5,
            connect_timeout_seconds: 2,
            reset_on_fetch_failure: false,
        },
        endpoint: EndpointConfig {
            base_url: base_url.to_string(),
            resource_path: RESOURCE_PATH.to_string(),
            form_path: Some(FORM_PATH.to_string()),
        },
    }
}

/// Dispatcher over a fresh store, wired to `config`.
pub fn make_dispatcher(config: &Config) -> (ActionDispatcher, Arc<CollectionStore>) {
    let store = Arc::new(CollectionStore::new());
    let dispatcher =
        ActionDispatcher::from_config(config, store.clone()).expect("Failed to build dispatcher");
    (dispatcher, store)
}

/// Write `content` to a config file in a fresh temp dir.
pub fn temp_config(content: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config_path = temp_dir.path().join("config.toml");
    std::fs::write(&config_path, content).expect("Failed to write config");
    (temp_dir, config_path)
}
