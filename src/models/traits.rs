//! Trait definitions for domain models

use std::hash::Hash;

/// A trait that all catalog entities implement.
///
/// The `EntityModel` trait provides identifier access so collections and
/// grouping code can label records without knowing their concrete type.
pub trait EntityModel: Clone + Send + Sync + std::fmt::Debug {
    /// The type of identifier used for this model
    type Id: Clone + Eq + Hash + Send + Sync + std::fmt::Debug;

    /// Get the identifier for this model
    fn id(&self) -> &Self::Id;
}
