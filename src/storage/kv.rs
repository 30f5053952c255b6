use std::collections::HashMap;

use redis::Commands;

// ============================================================================
// Key-Value Store Abstraction
// ============================================================================
//
// The cart snapshot lives in a string-keyed, string-valued durable store.
// Backends implement the one trait below: the in-memory variant backs unit
// tests and sessions with nothing to outlive, the Redis variant is the
// durable default.
//
// ============================================================================

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Storage backend failure: {0}")]
    Backend(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl From<redis::RedisError> for StoreError {
    fn from(error: redis::RedisError) -> Self {
        StoreError::Backend(error.to_string())
    }
}

/// Durable string-keyed store with get/set/remove semantics.
pub trait KeyValueStore {
    fn get(&mut self, key: &str) -> Result<Option<String>, StoreError>;
    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError>;
    fn remove(&mut self, key: &str) -> Result<(), StoreError>;
}

/// Lending a store keeps ownership with the caller.
impl<S: KeyValueStore + ?Sized> KeyValueStore for &mut S {
    fn get(&mut self, key: &str) -> Result<Option<String>, StoreError> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        (**self).set(key, value)
    }

    fn remove(&mut self, key: &str) -> Result<(), StoreError> {
        (**self).remove(key)
    }
}

/// Process-local store with no durability.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    entries: HashMap<String, String>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for InMemoryStore {
    fn get(&mut self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), StoreError> {
        self.entries.remove(key);
        Ok(())
    }
}

/// Redis-backed store over a synchronous connection.
pub struct RedisStore {
    connection: redis::Connection,
}

impl RedisStore {
    /// Connect to a Redis server, e.g. `redis://127.0.0.1:6379`.
    pub fn connect(url: &str) -> Result<Self, StoreError> {
        let client = redis::Client::open(url)?;
        let connection = client.get_connection()?;
        Ok(Self { connection })
    }
}

impl KeyValueStore for RedisStore {
    fn get(&mut self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.connection.get(key)?)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        let _: () = self.connection.set(key, value)?;
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), StoreError> {
        let _: () = self.connection.del(key)?;
        Ok(())
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
