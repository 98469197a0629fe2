//! Shared traits
//!
//! Interfaces implemented by the catalog but written against `EntityModel`,
//! so grouping and lookup code does not depend on the concrete record type.

pub mod traits;

pub use traits::*;
