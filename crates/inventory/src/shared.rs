use std::sync::{Arc, RwLock};

use stockroom_core::{DomainError, DomainResult};

use crate::item::Item;
use crate::manager::InventoryManager;
use crate::query::SearchQuery;

/// Cloneable, thread-safe handle over an [`InventoryManager`].
///
/// Mutations take the write lock; searches share the read lock.
#[derive(Debug, Clone, Default)]
pub struct SharedInventory {
    inner: Arc<RwLock<InventoryManager>>,
}

impl SharedInventory {
    pub fn new(manager: InventoryManager) -> Self {
        Self {
            inner: Arc::new(RwLock::new(manager)),
        }
    }

    pub fn register_item(&self, category: &str, brand: &str, price: i64) -> DomainResult<()> {
        let mut manager = self.inner.write().map_err(|_| poisoned())?;
        manager.register_item(category, brand, price)
    }

    pub fn add_stock(&self, category: &str, brand: &str, quantity: i64) -> DomainResult<()> {
        let mut manager = self.inner.write().map_err(|_| poisoned())?;
        manager.add_stock(category, brand, quantity)
    }

    pub fn search(&self, query: &SearchQuery) -> Vec<Item> {
        match self.inner.read() {
            Ok(manager) => manager.search(query),
            Err(_) => vec![],
        }
    }

    pub fn get(&self, category: &str, brand: &str) -> Option<Item> {
        let manager = self.inner.read().ok()?;
        manager.get(category, brand).cloned()
    }

    pub fn len(&self) -> usize {
        self.inner.read().map(|m| m.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

fn poisoned() -> DomainError {
    tracing::error!("inventory lock poisoned");
    DomainError::invariant("inventory lock poisoned")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    #[test]
    fn concurrent_stock_additions_are_not_lost() {
        let shared = SharedInventory::default();
        shared.register_item("Milk", "Amul", 100).unwrap();

        let handles: Vec<_> = (0..8)
            .map(|_| {
                let inv = shared.clone();
                thread::spawn(move || {
                    for _ in 0..100 {
                        inv.add_stock("milk", "AMUL", 1).unwrap();
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }

        assert_eq!(shared.get("Milk", "Amul").unwrap().quantity(), 800);
    }

    #[test]
    fn errors_pass_through_unchanged() {
        let shared = SharedInventory::new(InventoryManager::new());
        let err = shared.add_stock("Milk", "Amul", 1).unwrap_err();
        assert!(matches!(err, DomainError::NotFound(_)));

        let err = shared.register_item("Milk", "Amul", 0).unwrap_err();
        assert!(matches!(err, DomainError::InvalidArgument(_)));
        assert!(shared.is_empty());
    }

    #[test]
    fn search_sees_writes_from_clones() {
        let shared = SharedInventory::default();
        let writer = shared.clone();
        writer.register_item("Curd", "Nestle", 90).unwrap();
        writer.add_stock("Curd", "Nestle", 10).unwrap();

        let result = shared.search(&SearchQuery::new().brand("nestle"));
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].quantity(), 10);
        assert_eq!(shared.len(), 1);
    }

    #[test]
    fn poisoned_lock_surfaces_as_invariant_violation() {
        let shared = SharedInventory::default();
        let inv = shared.clone();
        let _ = thread::spawn(move || {
            let _guard = inv.inner.write().unwrap();
            panic!("poison the lock");
        })
        .join();

        let err = shared.register_item("Milk", "Amul", 10).unwrap_err();
        assert_eq!(err, DomainError::invariant("inventory lock poisoned"));
        assert!(shared.search(&SearchQuery::new()).is_empty());
    }
}
