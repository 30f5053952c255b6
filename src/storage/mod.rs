// ============================================================================
// Storage - Persistence Layer
// ============================================================================
//
// Generic key-value persistence for the cart snapshot. Domain-specific code
// lives in src/domain/.
//
// ============================================================================

pub mod cart_store;
pub mod kv;

pub use cart_store::{CartStore, CART_KEY};
pub use kv::{InMemoryStore, KeyValueStore, RedisStore, StoreError};
