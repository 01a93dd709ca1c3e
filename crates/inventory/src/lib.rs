//! Inventory catalog domain module.
//!
//! Items are keyed by case-insensitive (category, brand), carry a fixed
//! positive price and a non-negative stock quantity, and can be searched with
//! optional filters and a sort order. Pure in-memory logic: no IO, no storage.

pub mod item;
pub mod manager;
pub mod query;
pub mod shared;

pub use item::{Item, ItemKey};
pub use manager::InventoryManager;
pub use query::{OrderBy, SearchQuery};
pub use shared::SharedInventory;
