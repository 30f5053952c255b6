// ============================================================================
// cart_state - Shopping Cart State Machine with Durable Snapshots
// ============================================================================
//
// A catalog of purchasable items plus a cart of selected quantities, driven
// by a closed set of user commands. Transitions are pure; the one write-side
// effect is deleting the persisted snapshot on ClearCart. The persisted cart
// survives sessions in a string-keyed key-value store.
//
// ============================================================================

pub mod domain;
pub mod storage;

/// Re-export important types for easier access
pub use domain::cart::{
    CartCommand, CartCommandHandler, CartError, CartLine, CartState, CatalogItem, Quantity,
    MAX_ITEMS, MIN_ITEMS,
};
pub use storage::{CartStore, InMemoryStore, KeyValueStore, RedisStore, StoreError, CART_KEY};
