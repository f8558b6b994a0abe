//! In-memory fake store for handler tests: records call counts and can be
//! switched into a failing mode to exercise the 500 paths.

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use anyhow::{Result, anyhow};
use async_trait::async_trait;

use crate::config::Config;
use crate::state::AppState;
use crate::store::KeyValue;

#[derive(Default)]
pub struct MemoryStore {
    entries: Mutex<HashMap<String, String>>,
    fail: AtomicBool,
    set_calls: AtomicUsize,
    get_calls: AtomicUsize,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every subsequent set/get return an error.
    pub fn fail_next_calls(&self, fail: bool) {
        self.fail.store(fail, Ordering::SeqCst);
    }

    pub fn set_calls(&self) -> usize {
        self.set_calls.load(Ordering::SeqCst)
    }

    pub fn get_calls(&self) -> usize {
        self.get_calls.load(Ordering::SeqCst)
    }

    pub fn entry(&self, key: &str) -> Option<String> {
        self.entries.lock().unwrap().get(key).cloned()
    }

    pub fn len(&self) -> usize {
        self.entries.lock().unwrap().len()
    }

    /// Seed an entry directly, bypassing the call counters.
    pub fn insert(&self, key: &str, value: &str) {
        self.entries
            .lock()
            .unwrap()
            .insert(key.to_string(), value.to_string());
    }
}

#[async_trait]
impl KeyValue for MemoryStore {
    async fn set(&self, key: &str, value: &str) -> Result<()> {
        self.set_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail.load(Ordering::SeqCst) {
            return Err(anyhow!("injected store failure"));
        }
        self.entries
            .lock()
            .unwrap()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    async fn get(&self, key: &str) -> Result<Option<String>> {
        self.get_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail.load(Ordering::SeqCst) {
            return Err(anyhow!("injected store failure"));
        }
        Ok(self.entries.lock().unwrap().get(key).cloned())
    }
}

/// Build an `AppState` around a fresh fake store, returning the store
/// separately so tests can inspect and control it.
pub fn test_state() -> (Arc<MemoryStore>, AppState) {
    let store = Arc::new(MemoryStore::new());
    let config = Config {
        listen_host: "0.0.0.0".to_string(),
        listen_port: 9000,
        redis_host: "127.0.0.1".to_string(),
        redis_port: 6379,
        redis_auth_pass: None,
    };
    let state = AppState {
        store: store.clone(),
        config: Arc::new(config),
    };
    (store, state)
}
