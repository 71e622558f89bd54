//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// Value objects carry no identity: two values with the same attributes are
/// the same value. Item categories are the canonical example here; an
/// `AgedCheese` classification is interchangeable with any other.
///
/// The trait requires:
/// - **Copy/Clone**: values are cheap to duplicate
/// - **PartialEq**: compared by their attribute values
/// - **Debug**: printable in logs and test failures
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
