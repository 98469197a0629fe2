//! Interchangeable sorting strategies
//!
//! Every strategy is stable and returns a new vector, leaving its input
//! untouched. Strategies only see a three-way comparison; direction is folded
//! into that comparison before dispatch, so ties keep their input order in
//! both directions and all strategies produce identical output.

use std::cmp::Ordering;
use std::str::FromStr;

use catalog_macros::CatalogEnum;
use log::debug;

use crate::error::CatalogError;

/// Tag selecting one of the sorting strategies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, CatalogEnum)]
pub enum SortAlgorithm {
    /// Top-down merge sort, O(n log n)
    #[default]
    #[catalog(alias = "MERGE", alias = "MERGESORT")]
    MergeSort,
    /// Exchange sort over adjacent pairs, O(n^2)
    #[catalog(alias = "BUBBLE", alias = "BUBBLESORT", alias = "EXCHANGE")]
    BubbleSort,
    /// Insertion sort, O(n^2)
    #[catalog(alias = "INSERTION", alias = "INSERTIONSORT")]
    InsertionSort,
}

impl FromStr for SortAlgorithm {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s).ok_or_else(|| CatalogError::UnknownAlgorithm(s.trim().to_string()))
    }
}

/// Sort direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, CatalogEnum)]
pub enum SortDirection {
    /// Smallest first
    #[default]
    #[catalog(alias = "ASC")]
    Ascending,
    /// Largest first
    #[catalog(alias = "DESC")]
    Descending,
}

impl SortDirection {
    /// Apply the direction to a comparison result; `Equal` stays `Equal`
    #[must_use]
    pub const fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            Self::Ascending => ordering,
            Self::Descending => ordering.reverse(),
        }
    }
}

impl FromStr for SortDirection {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s).ok_or_else(|| CatalogError::unknown_variant("sort direction", s))
    }
}

/// A stable sorting algorithm over a caller-supplied comparison
pub trait SortStrategy: std::fmt::Debug {
    /// Return `items` ordered by `compare`; equal items keep their input order
    fn sort<T: Clone>(&self, items: &[T], compare: &dyn Fn(&T, &T) -> Ordering) -> Vec<T>;
}

/// Top-down merge sort
#[derive(Debug, Clone, Copy, Default)]
pub struct MergeSort;

impl SortStrategy for MergeSort {
    fn sort<T: Clone>(&self, items: &[T], compare: &dyn Fn(&T, &T) -> Ordering) -> Vec<T> {
        if items.len() <= 1 {
            return items.to_vec();
        }

        let (left, right) = items.split_at(items.len() / 2);
        let (left, right) = (self.sort(left, compare), self.sort(right, compare));
        merge(left, right, compare)
    }
}

/// Merge two sorted runs, taking from the left run on ties
fn merge<T>(left: Vec<T>, right: Vec<T>, compare: &dyn Fn(&T, &T) -> Ordering) -> Vec<T> {
    let mut merged = Vec::with_capacity(left.len() + right.len());
    let mut left = left.into_iter().peekable();
    let mut right = right.into_iter().peekable();

    loop {
        let take_right = match (left.peek(), right.peek()) {
            (Some(l), Some(r)) => compare(l, r) == Ordering::Greater,
            (Some(_), None) => false,
            (None, Some(_)) => true,
            (None, None) => break,
        };
        let source = if take_right { &mut right } else { &mut left };
        merged.extend(source.next());
    }

    merged
}

/// Bubble sort; swaps only strictly out-of-order neighbours
#[derive(Debug, Clone, Copy, Default)]
pub struct BubbleSort;

impl SortStrategy for BubbleSort {
    fn sort<T: Clone>(&self, items: &[T], compare: &dyn Fn(&T, &T) -> Ordering) -> Vec<T> {
        let mut sorted = items.to_vec();
        let mut unsorted_len = sorted.len();

        while unsorted_len > 1 {
            let mut last_swap = 0;
            for i in 1..unsorted_len {
                if compare(&sorted[i - 1], &sorted[i]) == Ordering::Greater {
                    sorted.swap(i - 1, i);
                    last_swap = i;
                }
            }
            unsorted_len = last_swap;
        }

        sorted
    }
}

/// Insertion sort
#[derive(Debug, Clone, Copy, Default)]
pub struct InsertionSort;

impl SortStrategy for InsertionSort {
    fn sort<T: Clone>(&self, items: &[T], compare: &dyn Fn(&T, &T) -> Ordering) -> Vec<T> {
        let mut sorted = items.to_vec();

        for i in 1..sorted.len() {
            let mut j = i;
            while j > 0 && compare(&sorted[j - 1], &sorted[j]) == Ordering::Greater {
                sorted.swap(j - 1, j);
                j -= 1;
            }
        }

        sorted
    }
}

/// Sort `items` with the selected algorithm and direction
///
/// The input slice is not modified. An empty input yields an empty vector.
pub fn sort<T, F>(
    items: &[T],
    compare: F,
    direction: SortDirection,
    algorithm: SortAlgorithm,
) -> Vec<T>
where
    T: Clone,
    F: Fn(&T, &T) -> Ordering,
{
    debug!(
        "Sorting {} item(s) with {algorithm}, {direction}",
        items.len()
    );

    let directed = |a: &T, b: &T| direction.apply(compare(a, b));
    match algorithm {
        SortAlgorithm::MergeSort => MergeSort.sort(items, &directed),
        SortAlgorithm::BubbleSort => BubbleSort.sort(items, &directed),
        SortAlgorithm::InsertionSort => InsertionSort.sort(items, &directed),
    }
}
