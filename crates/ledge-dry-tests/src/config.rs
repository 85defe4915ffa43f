// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! In-memory config store fake for testing without filesystem I/O.

use ledge_config::{ConfigError, ConfigStore};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// In-memory implementation of [`ConfigStore`] for testing.
///
/// Clones share storage, so a test can hand one clone to a
/// `ConfigService` and inspect another. Call counts are tracked for
/// verification.
///
/// # Example
///
/// ```
/// use ledge_dry_tests::InMemoryConfigStore;
/// use ledge_config::ConfigService;
///
/// let store = InMemoryConfigStore::new();
/// let service = ConfigService::new(store.clone());
///
/// service.save("physics", &serde_json::json!({"gravity": 500.0})).unwrap();
/// assert_eq!(store.load_count(), 0);
/// assert_eq!(store.save_count(), 1);
/// ```
#[derive(Clone, Default)]
pub struct InMemoryConfigStore {
    inner: Arc<Mutex<Inner>>,
}

#[derive(Default)]
struct Inner {
    data: HashMap<String, Vec<u8>>,
    load_count: usize,
    save_count: usize,
    fail_on_load: bool,
}

impl InMemoryConfigStore {
    /// Create a new empty in-memory config store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store holding one JSON document under `key`.
    pub fn with_json(key: &str, json: &str) -> Self {
        let store = Self::new();
        store
            .lock()
            .data
            .insert(key.to_owned(), json.as_bytes().to_vec());
        store
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Inner> {
        self.inner.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// Configure the store to fail on load operations.
    pub fn set_fail_on_load(&self, fail: bool) {
        self.lock().fail_on_load = fail;
    }

    /// Number of `load_raw` calls, failed ones included.
    pub fn load_count(&self) -> usize {
        self.lock().load_count
    }

    /// Number of `save_raw` calls.
    pub fn save_count(&self) -> usize {
        self.lock().save_count
    }

    /// Check if a key exists in the store.
    pub fn contains_key(&self, key: &str) -> bool {
        self.lock().data.contains_key(key)
    }
}

impl ConfigStore for InMemoryConfigStore {
    fn load_raw(&self, key: &str) -> Result<Vec<u8>, ConfigError> {
        let mut inner = self.lock();
        inner.load_count += 1;
        if inner.fail_on_load {
            return Err(ConfigError::Other("simulated load failure".into()));
        }
        inner.data.get(key).cloned().ok_or(ConfigError::NotFound)
    }

    fn save_raw(&self, key: &str, data: &[u8]) -> Result<(), ConfigError> {
        let mut inner = self.lock();
        inner.save_count += 1;
        inner.data.insert(key.to_string(), data.to_vec());
        Ok(())
    }
}
