//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// Value objects are **immutable** records defined entirely by their
/// attribute values - they have no identity of their own. Two `Amount`s of
/// 100 MWh are the same amount; two `Location`s with the same fields are the
/// same place. Contrast with entities (`Document`, `EacCertificate`, ...),
/// which are referenced by id.
///
/// Exchanged entity values are snapshots, so value objects never mutate in
/// place: to "change" one, build a new one.
///
/// The trait requires:
/// - **Clone**: values are copied around freely
/// - **PartialEq**: compared by their attribute values
/// - **Debug**: loggable and assertable in tests
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
