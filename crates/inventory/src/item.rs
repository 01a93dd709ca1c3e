use serde::{Deserialize, Serialize};

use stockroom_core::{DomainError, DomainResult, Entity, ValueObject};

/// Composite inventory key: `lowercase(category) + ":" + lowercase(brand)`.
///
/// Normalization happens here, at the boundary, so every lookup and insert
/// agrees on one spelling regardless of the caller's casing.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemKey(String);

impl ItemKey {
    pub fn new(category: &str, brand: &str) -> Self {
        Self(format!("{}:{}", category.to_lowercase(), brand.to_lowercase()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl ValueObject for ItemKey {}

impl core::fmt::Display for ItemKey {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

/// A category+brand stock record.
///
/// `price` is fixed at creation and always positive; `quantity` never goes
/// negative and only grows through [`crate::InventoryManager::add_stock`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "ItemRecord")]
pub struct Item {
    #[serde(skip_serializing)]
    key: ItemKey,
    category: String,
    brand: String,
    price: i64,
    quantity: i64,
}

impl Item {
    pub fn new(
        category: impl Into<String>,
        brand: impl Into<String>,
        price: i64,
        quantity: i64,
    ) -> DomainResult<Self> {
        if price <= 0 {
            return Err(DomainError::invalid_argument("price must be positive"));
        }
        if quantity < 0 {
            return Err(DomainError::invalid_argument("quantity cannot be negative"));
        }

        let category = category.into();
        let brand = brand.into();
        Ok(Self {
            key: ItemKey::new(&category, &brand),
            category,
            brand,
            price,
            quantity,
        })
    }

    pub fn key(&self) -> &ItemKey {
        &self.key
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn brand(&self) -> &str {
        &self.brand
    }

    pub fn price(&self) -> i64 {
        self.price
    }

    pub fn quantity(&self) -> i64 {
        self.quantity
    }

    /// Increase stock by `delta`, leaving the item untouched on overflow.
    pub(crate) fn add_quantity(&mut self, delta: i64) -> DomainResult<()> {
        self.quantity = self
            .quantity
            .checked_add(delta)
            .ok_or_else(|| DomainError::invariant("quantity overflow"))?;
        Ok(())
    }
}

impl Entity for Item {
    type Id = ItemKey;

    fn id(&self) -> &Self::Id {
        &self.key
    }
}

impl core::fmt::Display for Item {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "Brand: {}, category: {}, Price: {}, Quantity: {}",
            self.brand, self.category, self.price, self.quantity
        )
    }
}

/// Wire shape of an [`Item`]; converted through [`Item::new`] so
/// deserialized records obey the same invariants.
#[derive(Deserialize)]
struct ItemRecord {
    category: String,
    brand: String,
    price: i64,
    #[serde(default)]
    quantity: i64,
}

impl TryFrom<ItemRecord> for Item {
    type Error = DomainError;

    fn try_from(record: ItemRecord) -> Result<Self, Self::Error> {
        Item::new(record.category, record.brand, record.price, record.quantity)
    }
}
