//! Collection traits over catalog entities

pub mod collection;

pub use collection::{LookupCollection, ModelCollection};
