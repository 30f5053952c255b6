use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::errors::CartError;

// ============================================================================
// Cart Value Objects
// ============================================================================

/// Smallest quantity a cart line can hold.
pub const MIN_ITEMS: u32 = 1;

/// Largest quantity a cart line can hold.
pub const MAX_ITEMS: u32 = 5;

/// Immutable descriptor of a purchasable item.
///
/// Owned by the external catalog source; the cart references items by `id`
/// only and never mutates catalog entries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogItem {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    pub image: String,
    pub price: f64,
}

/// Quantity of one catalog item held in the cart.
///
/// Always within `MIN_ITEMS..=MAX_ITEMS`. Out-of-range values cannot be
/// constructed, deserialization included.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct Quantity(u32);

impl Quantity {
    /// The quantity every line starts with.
    pub const ONE: Quantity = Quantity(MIN_ITEMS);

    pub fn new(value: u32) -> Result<Self, CartError> {
        if (MIN_ITEMS..=MAX_ITEMS).contains(&value) {
            Ok(Self(value))
        } else {
            Err(CartError::QuantityOutOfRange(value))
        }
    }

    pub fn get(self) -> u32 {
        self.0
    }

    /// Add one, frozen at `MAX_ITEMS`.
    pub fn saturating_increment(self) -> Self {
        if self.0 < MAX_ITEMS {
            Self(self.0 + 1)
        } else {
            self
        }
    }

    /// Subtract one, frozen at `MIN_ITEMS`.
    pub fn saturating_decrement(self) -> Self {
        if self.0 > MIN_ITEMS {
            Self(self.0 - 1)
        } else {
            self
        }
    }

    pub fn is_at_max(self) -> bool {
        self.0 == MAX_ITEMS
    }

    pub fn is_at_min(self) -> bool {
        self.0 == MIN_ITEMS
    }
}

impl TryFrom<u32> for Quantity {
    type Error = CartError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Quantity> for u32 {
    fn from(quantity: Quantity) -> u32 {
        quantity.0
    }
}

/// One catalog item plus the quantity of it currently selected.
///
/// Serializes flat, so a persisted record reads
/// `{ id, name, description, image, price, quantity }`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartLine {
    #[serde(flatten)]
    pub item: CatalogItem,
    pub quantity: Quantity,
}

impl CartLine {
    /// First addition always enters the cart with quantity 1.
    pub fn new(item: CatalogItem) -> Self {
        Self {
            item,
            quantity: Quantity::ONE,
        }
    }

    pub fn id(&self) -> Uuid {
        self.item.id
    }
}

// ============================================================================
// Unit Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_item() -> CatalogItem {
        CatalogItem {
            id: Uuid::new_v4(),
            name: "SRV".to_string(),
            description: "Vintage sunburst".to_string(),
            image: "guitar_01".to_string(),
            price: 299.99,
        }
    }

    #[test]
    fn test_quantity_accepts_values_in_range() {
        for value in MIN_ITEMS..=MAX_ITEMS {
            assert_eq!(Quantity::new(value).unwrap().get(), value);
        }
    }

    #[test]
    fn test_quantity_rejects_values_out_of_range() {
        assert!(matches!(
            Quantity::new(0),
            Err(CartError::QuantityOutOfRange(0))
        ));
        assert!(matches!(
            Quantity::new(MAX_ITEMS + 1),
            Err(CartError::QuantityOutOfRange(_))
        ));
    }

    #[test]
    fn test_quantity_increment_freezes_at_max() {
        let mut quantity = Quantity::ONE;
        for _ in 0..10 {
            quantity = quantity.saturating_increment();
        }
        assert_eq!(quantity.get(), MAX_ITEMS);
        assert!(quantity.is_at_max());
    }

    #[test]
    fn test_quantity_decrement_freezes_at_min() {
        let quantity = Quantity::ONE.saturating_decrement();
        assert_eq!(quantity.get(), MIN_ITEMS);
        assert!(quantity.is_at_min());
    }

    #[test]
    fn test_quantity_rejects_out_of_range_on_deserialize() {
        assert!(serde_json::from_str::<Quantity>("3").is_ok());
        assert!(serde_json::from_str::<Quantity>("0").is_err());
        assert!(serde_json::from_str::<Quantity>("9").is_err());
    }

    #[test]
    fn test_cart_line_starts_at_one() {
        let item = create_test_item();
        let line = CartLine::new(item.clone());

        assert_eq!(line.id(), item.id);
        assert_eq!(line.quantity, Quantity::ONE);
    }

    #[test]
    fn test_cart_line_serializes_flat() {
        let line = CartLine::new(create_test_item());

        let json = serde_json::to_value(&line).unwrap();
        assert!(json.get("id").is_some());
        assert!(json.get("price").is_some());
        assert_eq!(json.get("quantity").unwrap(), 1);
        assert!(json.get("item").is_none());

        let deserialized: CartLine = serde_json::from_value(json).unwrap();
        assert_eq!(deserialized, line);
    }
}
