use std::collections::HashSet;

use crate::domain::cart::CartLine;

use super::kv::{KeyValueStore, StoreError};

// ============================================================================
// Cart Store - Persistence Adapter
// ============================================================================
//
// Reads, writes and deletes the single cart entry in the backing store.
// Anything unreadable degrades to "no prior cart": startup never fails
// because of what a previous session left behind.
//
// ============================================================================

/// Fixed key the cart snapshot is stored under.
pub const CART_KEY: &str = "cart";

pub struct CartStore<S: KeyValueStore> {
    store: S,
}

impl<S: KeyValueStore> CartStore<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Load the persisted cart, or `None` when there is nothing usable.
    ///
    /// An absent key, a backend failure, a corrupt payload, an out-of-range
    /// quantity and a duplicated identifier all normalize to `None`; the
    /// caller starts from an empty cart.
    pub fn load(&mut self) -> Option<Vec<CartLine>> {
        let raw = match self.store.get(CART_KEY) {
            Ok(Some(raw)) => raw,
            Ok(None) => return None,
            Err(error) => {
                tracing::warn!(error = %error, "Failed to read persisted cart, starting empty");
                return None;
            }
        };

        let lines = match serde_json::from_str::<Vec<CartLine>>(&raw) {
            Ok(lines) => lines,
            Err(error) => {
                tracing::warn!(error = %error, "Persisted cart is corrupt, starting empty");
                return None;
            }
        };

        if has_duplicate_ids(&lines) {
            tracing::warn!("Persisted cart holds duplicate line identifiers, starting empty");
            return None;
        }

        tracing::debug!(line_count = lines.len(), "Loaded persisted cart");
        Some(lines)
    }

    /// Persist the given lines under the cart key.
    ///
    /// Not called by the state machine itself; exposed for subscribers that
    /// snapshot the cart on every change. Whatever they write round-trips
    /// through `load`.
    pub fn save(&mut self, lines: &[CartLine]) -> Result<(), StoreError> {
        let encoded = serde_json::to_string(lines)?;
        self.store.set(CART_KEY, &encoded)?;
        tracing::debug!(line_count = lines.len(), "Persisted cart snapshot");
        Ok(())
    }

    /// Delete the persisted cart. Idempotent when already absent; a backend
    /// failure is logged and swallowed.
    pub fn clear(&mut self) {
        match self.store.remove(CART_KEY) {
            Ok(()) => tracing::debug!("Deleted persisted cart"),
            Err(error) => {
                tracing::error!(error = %error, "Failed to delete persisted cart");
            }
        }
    }
}

fn has_duplicate_ids(lines: &[CartLine]) -> bool {
    let mut seen = HashSet::new();
    lines.iter().any(|line| !seen.insert(line.id()))
}

// ============================================================================
// Unit Tests
// ============================================================================
