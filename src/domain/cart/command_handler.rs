use crate::storage::{CartStore, KeyValueStore};

use super::commands::CartCommand;
use super::state::CartState;
use super::value_objects::CatalogItem;

// ============================================================================
// Cart Command Handler
// ============================================================================
//
// Orchestrates: Command → State Machine → new snapshot
//
// The backing store is read exactly once, at construction. The only write
// side effect this core issues is the delete on ClearCart; every other
// transition is effect-free and persisting it is a subscriber's job.
//
// ============================================================================

pub struct CartCommandHandler<S: KeyValueStore> {
    store: CartStore<S>,
    state: CartState,
}

impl<S: KeyValueStore> CartCommandHandler<S> {
    /// Pair the explicitly passed catalog with whatever survived in the
    /// store. A missing or unreadable snapshot starts an empty cart.
    pub fn new(catalog: Vec<CatalogItem>, mut store: CartStore<S>) -> Self {
        let cart = store.load().unwrap_or_default();
        let state = CartState::new(catalog, cart);
        Self { store, state }
    }

    /// Current snapshot.
    pub fn state(&self) -> &CartState {
        &self.state
    }

    /// Apply one command and return the resulting snapshot.
    pub fn handle(&mut self, command: CartCommand) -> &CartState {
        if matches!(command, CartCommand::ClearCart) {
            self.store.clear();
        }

        tracing::debug!(command = ?command, "Applying cart command");
        self.state = self.state.apply(&command);
        &self.state
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
