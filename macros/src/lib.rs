//! Procedural macros for the car-catalog crate
//!
//! This crate provides the derive macro used by every enumerated selection in
//! the catalog (vehicle categories, sort fields, algorithms, quantities), so
//! that name lookup, listing and display stay consistent across the menu and
//! the JSON loader.

use proc_macro::TokenStream;

mod catalog_enum;
mod utils;

/// Derive macro for field-less catalog enums
///
/// Generates, on the annotated enum:
/// - `ALL`: every variant in declaration order
/// - `name()`: the canonical upper-case name of a variant
/// - `from_name()`: case-insensitive lookup by name or alias
/// - a `Display` implementation that prints `name()`
///
/// # Example
///
/// ```rust,ignore
/// #[derive(Debug, Clone, Copy, PartialEq, Eq, CatalogEnum)]
/// enum SortAlgorithm {
///     #[catalog(alias = "merge")]
///     MergeSort,
///     #[catalog(name = "BUBBLE", alias = "exchange")]
///     BubbleSort,
/// }
///
/// assert_eq!(SortAlgorithm::MergeSort.name(), "MERGE_SORT");
/// assert_eq!(SortAlgorithm::from_name("exchange"), Some(SortAlgorithm::BubbleSort));
/// ```
#[proc_macro_derive(CatalogEnum, attributes(catalog))]
pub fn derive_catalog_enum(input: TokenStream) -> TokenStream {
    catalog_enum::process_derive_catalog_enum(input)
}
