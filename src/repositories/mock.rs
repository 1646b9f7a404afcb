use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::Mutex;

use super::{KeyValueStore, Result};

pub struct InMemoryStore(Mutex<HashMap<String, String>>);

impl InMemoryStore {
    pub fn new() -> Self { Self(Mutex::new(HashMap::new())) }
}
impl Default for InMemoryStore {
    fn default() -> Self { Self::new() }
}

#[async_trait]
impl KeyValueStore for InMemoryStore {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        let guard = self.0.lock().await;

        let found = guard.get(key).cloned();
        tracing::trace!("get {} - {:?}", key, found);

        Ok(found)
    }

    async fn set(&self, key: &str, value: String) -> Result<()> {
        tracing::trace!("set {} - {:?}", key, value);

        self.0.lock().await.insert(key.to_string(), value);
        Ok(())
    }
}
