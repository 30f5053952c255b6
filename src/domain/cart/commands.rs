use uuid::Uuid;

use super::value_objects::CatalogItem;

// ============================================================================
// Cart Commands - Represent user intent
// ============================================================================

#[derive(Debug, Clone)]
pub enum CartCommand {
    AddToCart { item: CatalogItem },
    RemoveFromCart { id: Uuid },
    IncreaseQuantity { id: Uuid },
    DecreaseQuantity { id: Uuid },
    ClearCart,
}
