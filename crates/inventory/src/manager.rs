use std::collections::BTreeMap;
use std::collections::btree_map::Entry;

use stockroom_core::{DomainError, DomainResult};

use crate::item::{Item, ItemKey};
use crate::query::SearchQuery;

/// In-memory inventory catalog keyed by normalized (category, brand).
///
/// Owned by its caller; wrap it in [`crate::SharedInventory`] for
/// multi-threaded access.
#[derive(Debug, Clone, Default)]
pub struct InventoryManager {
    items: BTreeMap<ItemKey, Item>,
}

impl InventoryManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an item with zero stock.
    ///
    /// Registering an existing (category, brand) pair again is a no-op: the
    /// stored price and quantity are kept.
    pub fn register_item(&mut self, category: &str, brand: &str, price: i64) -> DomainResult<()> {
        if price <= 0 {
            tracing::warn!(category, brand, price, "rejected registration: non-positive price");
            return Err(DomainError::invalid_argument("price must be positive"));
        }

        match self.items.entry(ItemKey::new(category, brand)) {
            Entry::Occupied(entry) => {
                tracing::debug!(key = %entry.key(), "item already registered; ignoring");
            }
            Entry::Vacant(entry) => {
                tracing::debug!(key = %entry.key(), price, "item registered");
                entry.insert(Item::new(category, brand, price, 0)?);
            }
        }
        Ok(())
    }

    /// Increase the stock of a registered item.
    pub fn add_stock(&mut self, category: &str, brand: &str, quantity: i64) -> DomainResult<()> {
        if quantity <= 0 {
            tracing::warn!(category, brand, quantity, "rejected stock addition: non-positive quantity");
            return Err(DomainError::invalid_argument("quantity must be positive"));
        }

        let key = ItemKey::new(category, brand);
        let Some(item) = self.items.get_mut(&key) else {
            tracing::warn!(key = %key, "rejected stock addition: item not registered");
            return Err(DomainError::not_found("item does not exist; register it first"));
        };

        item.add_quantity(quantity)?;
        tracing::debug!(key = %key, added = quantity, quantity = item.quantity(), "stock added");
        Ok(())
    }

    /// Filter and sort a snapshot of the catalog. Never fails; no match yields
    /// an empty vector.
    pub fn search(&self, query: &SearchQuery) -> Vec<Item> {
        let mut result: Vec<Item> = self
            .items
            .values()
            .filter(|item| query.matches(item))
            .cloned()
            .collect();
        result.sort_by(|a, b| query.compare(a, b));
        result
    }

    pub fn get(&self, category: &str, brand: &str) -> Option<&Item> {
        self.items.get(&ItemKey::new(category, brand))
    }

    /// All items in key order.
    pub fn items(&self) -> impl Iterator<Item = &Item> {
        self.items.values()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
