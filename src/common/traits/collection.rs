//! Standardized collection traits
//!
//! Read-only interfaces over collections of domain models. Collections hand
//! out shared `Arc` handles; nothing in these traits can modify a model.

use std::hash::Hash;
use std::sync::Arc;

use crate::collections::{GroupedMap, group_by};
use crate::models::EntityModel;

/// Core trait for model collections
pub trait ModelCollection<T: EntityModel>: Send + Sync + std::fmt::Debug {
    /// Get all models in the collection, in collection order
    fn all(&self) -> Vec<Arc<T>>;

    /// Count the total number of models in the collection
    fn count(&self) -> usize;

    /// Filter models by a predicate function, preserving collection order
    fn filter<F>(&self, predicate: F) -> Vec<Arc<T>>
    where
        F: Fn(&T) -> bool;
}

/// Trait for creating lookups from collections
pub trait LookupCollection<T: EntityModel>: ModelCollection<T> {
    /// Group models under a key, keys in first-seen order
    fn create_multi_lookup<K, F>(&self, key_fn: F) -> GroupedMap<K, Vec<Arc<T>>>
    where
        K: Eq + Hash + Clone,
        F: Fn(&T) -> K,
    {
        group_by(&self.all(), |model| key_fn(model))
    }

    /// Distinct keys in first-seen order
    fn distinct<K, F>(&self, key_fn: F) -> Vec<K>
    where
        K: Eq + Hash + Clone,
        F: Fn(&T) -> K,
    {
        self.create_multi_lookup(key_fn)
            .into_iter()
            .map(|(key, _)| key)
            .collect()
    }
}
