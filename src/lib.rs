//! Vehicle catalog with pluggable sorting and grouped statistics.
//!
//! Cars are loaded once from JSON files into a [`CarCatalog`], which answers
//! filter, grouping, sort and aggregation requests from an interactive
//! [`Menu`] without ever mutating a record.

pub mod algorithm;
pub mod catalog;
pub mod collections;
pub mod common;
pub mod config;
pub mod error;
pub mod filter;
pub mod loader;
pub mod menu;
pub mod models;

// Re-export the most common types for easier use
// Core types
pub use catalog::{CarCatalog, Grouping};
pub use config::CatalogConfig;
pub use error::{CatalogError, Result};
pub use models::{BodyColor, BodyType, Car, CarBuilder, ComponentSet, EngineType, TyreType};

// Sorting and statistics
pub use algorithm::{
    KeyExtractor, NumericAttribute, Quantity, Reduction, SortAlgorithm, SortCriterion,
    SortDirection, SortField, Statistic, Summary,
};

// Loading and the interactive front end
pub use loader::{load_cars, load_catalog, validate_file_names};
pub use menu::Menu;
