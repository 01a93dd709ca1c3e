//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// Value objects carry no identity of their own; two instances holding the
/// same attribute values are the same value. Inventory keys and search
/// queries are modelled this way:
///
/// ```ignore
/// let a = ItemKey::new("Milk", "Amul");
/// let b = ItemKey::new("MILK", "amul");
/// assert_eq!(a, b);
/// ```
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
