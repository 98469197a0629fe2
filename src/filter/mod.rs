//! Record filtering framework
//!
//! A trait-based approach to selecting records. Concrete predicates over cars
//! live in [`car`]; the combinators here work for any record type.

use std::collections::BTreeSet;
use std::fmt::Debug;
use std::sync::Arc;

pub mod car;

pub use car::{BodyTypeFilter, ComponentsFilter, EngineTypeFilter, PriceRange, PriceRangeFilter};

/// A predicate over records of type `T`
pub trait Filter<T>: Debug + Send + Sync {
    /// Whether the record passes the filter
    fn matches(&self, record: &T) -> bool;

    /// Names of the record fields this filter reads
    fn required_fields(&self) -> BTreeSet<&'static str>;

    /// Keep the records that pass, in their original order
    fn apply<R>(&self, records: &[R]) -> Vec<R>
    where
        R: AsRef<T> + Clone,
        Self: Sized,
    {
        records
            .iter()
            .filter(|record| self.matches(record.as_ref()))
            .cloned()
            .collect()
    }
}

/// A filter that accepts every record
#[derive(Debug, Clone, Copy, Default)]
pub struct IncludeAllFilter;

impl<T> Filter<T> for IncludeAllFilter {
    fn matches(&self, _record: &T) -> bool {
        true
    }

    fn required_fields(&self) -> BTreeSet<&'static str> {
        BTreeSet::new()
    }
}

/// A filter that combines multiple filters with a logical AND
///
/// An empty conjunction accepts every record.
#[derive(Debug, Clone)]
pub struct AndFilter<T> {
    filters: Vec<Arc<dyn Filter<T>>>,
}

impl<T> AndFilter<T> {
    /// Create a new AND filter
    #[must_use]
    pub fn new(filters: Vec<Arc<dyn Filter<T>>>) -> Self {
        Self { filters }
    }

    /// Add another filter to the conjunction
    #[must_use]
    pub fn and(mut self, filter: impl Filter<T> + 'static) -> Self {
        self.filters.push(Arc::new(filter));
        self
    }
}

impl<T> Default for AndFilter<T> {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl<T: Debug> Filter<T> for AndFilter<T> {
    fn matches(&self, record: &T) -> bool {
        self.filters.iter().all(|filter| filter.matches(record))
    }

    fn required_fields(&self) -> BTreeSet<&'static str> {
        self.filters
            .iter()
            .flat_map(|filter| filter.required_fields())
            .collect()
    }
}
