//! Algorithm implementations for the catalog
//!
//! Ordering (`sorting`, driven by a `key` extractor) and grouped statistics
//! (`statistics`) over in-memory record sets.

pub mod key;
pub mod sorting;
pub mod statistics;

pub use key::{KeyExtractor, SortCriterion, SortField, SortKey};
pub use sorting::{
    BubbleSort, InsertionSort, MergeSort, SortAlgorithm, SortDirection, SortStrategy, sort,
};
pub use statistics::{
    NumericAttribute, NumericValue, Quantity, Reduction, Statistic, Summary, aggregate, summarize,
};
