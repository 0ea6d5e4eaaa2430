//! Entity trait: records with identity.

/// Entity marker + minimal interface.
///
/// Entities are records that carry a nominal identifier and are referenced by
/// it from elsewhere (events point at documents, certificates at other
/// certificates). Two snapshots with the same id describe the same entity.
pub trait Entity {
    /// Strongly-typed entity identifier.
    type Id: Clone + Eq + core::hash::Hash + core::fmt::Debug;

    /// Returns the entity identifier.
    fn id(&self) -> &Self::Id;
}
