//! Search parameters: optional filters plus ordering.

use core::cmp::Ordering;

use serde::{Deserialize, Serialize};

use stockroom_core::ValueObject;

use crate::item::Item;

/// Sort key for search results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum OrderBy {
    #[default]
    Price,
    Quantity,
}

impl OrderBy {
    /// Infallible parse: `"quantity"` in any casing selects quantity,
    /// everything else falls back to price.
    pub fn parse(s: &str) -> Self {
        if s.eq_ignore_ascii_case("quantity") {
            OrderBy::Quantity
        } else {
            OrderBy::Price
        }
    }
}

impl From<&str> for OrderBy {
    fn from(value: &str) -> Self {
        Self::parse(value)
    }
}

impl From<String> for OrderBy {
    fn from(value: String) -> Self {
        Self::parse(&value)
    }
}

/// Filters and ordering for [`crate::InventoryManager::search`].
///
/// `None` on a filter means "do not filter on this dimension", which keeps
/// an empty-string or zero filter distinct from no filter at all.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchQuery {
    pub category: Option<String>,
    pub brand: Option<String>,
    pub price_from: Option<i64>,
    pub price_to: Option<i64>,
    pub order_by: OrderBy,
    pub ascending: bool,
}

impl Default for SearchQuery {
    fn default() -> Self {
        Self {
            category: None,
            brand: None,
            price_from: None,
            price_to: None,
            order_by: OrderBy::Price,
            ascending: true,
        }
    }
}

impl ValueObject for SearchQuery {}

impl SearchQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn brand(mut self, brand: impl Into<String>) -> Self {
        self.brand = Some(brand.into());
        self
    }

    pub fn price_from(mut self, price: i64) -> Self {
        self.price_from = Some(price);
        self
    }

    pub fn price_to(mut self, price: i64) -> Self {
        self.price_to = Some(price);
        self
    }

    pub fn order_by(mut self, order_by: impl Into<OrderBy>) -> Self {
        self.order_by = order_by.into();
        self
    }

    pub fn ascending(mut self) -> Self {
        self.ascending = true;
        self
    }

    pub fn descending(mut self) -> Self {
        self.ascending = false;
        self
    }

    /// True iff `item` satisfies every provided filter.
    pub fn matches(&self, item: &Item) -> bool {
        let category_ok = self
            .category
            .as_deref()
            .is_none_or(|c| c.to_lowercase() == item.category().to_lowercase());
        let brand_ok = self
            .brand
            .as_deref()
            .is_none_or(|b| b.to_lowercase() == item.brand().to_lowercase());
        let from_ok = self.price_from.is_none_or(|from| item.price() >= from);
        let to_ok = self.price_to.is_none_or(|to| item.price() <= to);

        category_ok && brand_ok && from_ok && to_ok
    }

    /// Result ordering. Equal sort values fall back to the item key, and the
    /// descending order is the exact reverse of the ascending one.
    pub fn compare(&self, a: &Item, b: &Item) -> Ordering {
        let primary = match self.order_by {
            OrderBy::Price => a.price().cmp(&b.price()),
            OrderBy::Quantity => a.quantity().cmp(&b.quantity()),
        };
        let ordering = primary.then_with(|| a.key().cmp(b.key()));

        if self.ascending { ordering } else { ordering.reverse() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(category: &str, brand: &str, price: i64, quantity: i64) -> Item {
        Item::new(category, brand, price, quantity).unwrap()
    }

    #[test]
    fn order_by_parses_quantity_case_insensitively() {
        assert_eq!(OrderBy::parse("quantity"), OrderBy::Quantity);
        assert_eq!(OrderBy::parse("QuAnTiTy"), OrderBy::Quantity);
        assert_eq!(OrderBy::parse("price"), OrderBy::Price);
        assert_eq!(OrderBy::parse("anything"), OrderBy::Price);
        assert_eq!(OrderBy::parse(""), OrderBy::Price);
    }

    #[test]
    fn default_query_matches_everything_ascending_by_price() {
        let q = SearchQuery::default();
        assert!(q.ascending);
        assert_eq!(q.order_by, OrderBy::Price);
        assert!(q.matches(&item("Milk", "Amul", 1, 0)));
    }

    #[test]
    fn text_filters_ignore_case() {
        let milk = item("Milk", "Amul", 100, 0);
        assert!(SearchQuery::new().category("MILK").matches(&milk));
        assert!(SearchQuery::new().brand("amul").matches(&milk));
        assert!(!SearchQuery::new().brand("Nestle").matches(&milk));
    }

    #[test]
    fn empty_string_filter_is_not_absent() {
        let milk = item("Milk", "Amul", 100, 0);
        assert!(!SearchQuery::new().category("").matches(&milk));
    }

    #[test]
    fn price_bounds_are_inclusive() {
        let milk = item("Milk", "Amul", 100, 0);
        assert!(SearchQuery::new().price_from(100).price_to(100).matches(&milk));
        assert!(!SearchQuery::new().price_from(101).matches(&milk));
        assert!(!SearchQuery::new().price_to(99).matches(&milk));
    }

    #[test]
    fn ties_break_on_key_and_reverse_when_descending() {
        let a = item("Curd", "Amul", 50, 5);
        let b = item("Milk", "Amul", 50, 5);

        let asc = SearchQuery::new();
        assert_eq!(asc.compare(&a, &b), Ordering::Less);

        let desc = SearchQuery::new().descending();
        assert_eq!(desc.compare(&a, &b), Ordering::Greater);
    }

    #[test]
    fn deserializes_with_defaults() {
        let q: SearchQuery = serde_json::from_str(r#"{"brand":"Nestle"}"#).unwrap();
        assert_eq!(q, SearchQuery::new().brand("Nestle"));

        let q: SearchQuery =
            serde_json::from_str(r#"{"order_by":"QUANTITY","ascending":false}"#).unwrap();
        assert_eq!(q.order_by, OrderBy::Quantity);
        assert!(!q.ascending);

        let q: SearchQuery = serde_json::from_str(r#"{"order_by":"name"}"#).unwrap();
        assert_eq!(q.order_by, OrderBy::Price);
    }
}
