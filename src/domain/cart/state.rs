use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::commands::CartCommand;
use super::value_objects::{CartLine, CatalogItem};

// ============================================================================
// Cart State Machine - Domain Logic
// ============================================================================
//
// Transitions are pure: every command yields a fresh snapshot and leaves the
// input untouched. Quantity bounds are enforced at each mutation site, so no
// reachable snapshot holds an out-of-range line. Unknown identifiers and
// saturated quantities degrade to no-ops rather than errors.
//
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartState {
    /// Read-only catalog, carried through every transition untouched.
    pub catalog: Vec<CatalogItem>,
    /// Selected lines, unique by item id, in first-added order.
    pub cart: Vec<CartLine>,
}

impl CartState {
    pub fn new(catalog: Vec<CatalogItem>, cart: Vec<CartLine>) -> Self {
        Self { catalog, cart }
    }

    pub fn empty(catalog: Vec<CatalogItem>) -> Self {
        Self::new(catalog, Vec::new())
    }

    /// Apply one command and return the next snapshot.
    pub fn apply(&self, command: &CartCommand) -> CartState {
        match command {
            CartCommand::AddToCart { item } => self.add_to_cart(item),
            CartCommand::RemoveFromCart { id } => self.remove_from_cart(*id),
            CartCommand::IncreaseQuantity { id } => self.increase_quantity(*id),
            CartCommand::DecreaseQuantity { id } => self.decrease_quantity(*id),
            CartCommand::ClearCart => self.clear_cart(),
        }
    }

    /// Line holding the given item, if any.
    pub fn line(&self, id: Uuid) -> Option<&CartLine> {
        self.cart.iter().find(|line| line.id() == id)
    }

    pub fn is_empty(&self) -> bool {
        self.cart.is_empty()
    }

    fn add_to_cart(&self, item: &CatalogItem) -> CartState {
        let mut cart = self.cart.clone();
        match cart.iter_mut().find(|line| line.id() == item.id) {
            // Existing lines keep their position; the bound check lives in
            // the saturating increment.
            Some(line) => line.quantity = line.quantity.saturating_increment(),
            None => cart.push(CartLine::new(item.clone())),
        }
        self.with_cart(cart)
    }

    fn remove_from_cart(&self, id: Uuid) -> CartState {
        let cart = self
            .cart
            .iter()
            .filter(|line| line.id() != id)
            .cloned()
            .collect();
        self.with_cart(cart)
    }

    fn increase_quantity(&self, id: Uuid) -> CartState {
        self.update_line(id, |line| {
            line.quantity = line.quantity.saturating_increment();
        })
    }

    fn decrease_quantity(&self, id: Uuid) -> CartState {
        // Reaching the floor freezes the line; removal is only ever explicit.
        self.update_line(id, |line| {
            line.quantity = line.quantity.saturating_decrement();
        })
    }

    fn clear_cart(&self) -> CartState {
        self.with_cart(Vec::new())
    }

    fn update_line(&self, id: Uuid, update: impl FnOnce(&mut CartLine)) -> CartState {
        let mut cart = self.cart.clone();
        if let Some(line) = cart.iter_mut().find(|line| line.id() == id) {
            update(line);
        }
        self.with_cart(cart)
    }

    fn with_cart(&self, cart: Vec<CartLine>) -> CartState {
        CartState {
            catalog: self.catalog.clone(),
            cart,
        }
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
