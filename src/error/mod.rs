//! Error handling for the car catalog.

use std::io;
use std::path::PathBuf;

use rust_decimal::Decimal;

pub mod util;

/// Specialized error type for catalog operations
///
/// Every variant is a synchronous validation or input failure; none of them
/// leaves the catalog in a modified state.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    /// A sort criterion tag that names no known record field
    #[error("Unsupported sort criterion: {0}")]
    UnsupportedCriterion(String),

    /// A sort algorithm tag outside the known strategy set
    #[error("Unknown sorting algorithm: {0}")]
    UnknownAlgorithm(String),

    /// A quantity selection that names no known attribute/reduction pair
    #[error("Unsupported quantity: {0}")]
    UnsupportedQuantity(String),

    /// Price range whose lower bound exceeds its upper bound
    #[error("Invalid range: min {min} is greater than max {max}")]
    InvalidRange {
        /// Requested lower bound
        min: Decimal,
        /// Requested upper bound
        max: Decimal,
    },

    /// Component name that matches no component in the catalog
    #[error("Unknown component: {0}")]
    UnknownComponent(String),

    /// Category name that matches no member of the named enumeration
    #[error("Unknown {kind}: {value}")]
    UnknownVariant {
        /// Name of the enumeration (e.g. "body type")
        kind: &'static str,
        /// The rejected input
        value: String,
    },

    /// Record that violates a data model invariant
    #[error("Invalid record '{model}': {reason}")]
    InvalidRecord {
        /// Model label of the offending record
        model: String,
        /// Which invariant was violated
        reason: String,
    },

    /// Catalog source without a `.json` file name
    #[error("Catalog file must be a .json file: {}", .0.display())]
    InvalidFileName(PathBuf),

    /// No catalog sources were supplied
    #[error("At least one catalog file is required")]
    EmptyCatalogSources,

    /// Error opening or reading a catalog file
    #[error("IO error for {}: {context}", .path.display())]
    Io {
        /// File being accessed
        path: PathBuf,
        /// What was being attempted
        context: String,
        /// Underlying error
        #[source]
        source: io::Error,
    },

    /// Malformed catalog JSON
    #[error("JSON error in {}: {source}", .path.display())]
    Json {
        /// File being parsed
        path: PathBuf,
        /// Underlying error
        #[source]
        source: serde_json::Error,
    },

    /// A sum or average that does not fit the numeric representation
    #[error("Arithmetic overflow while computing {0}")]
    ArithmeticOverflow(&'static str),
}

impl CatalogError {
    /// Create an unknown-variant error for the given enumeration
    pub fn unknown_variant(kind: &'static str, value: impl Into<String>) -> Self {
        Self::UnknownVariant {
            kind,
            value: value.into(),
        }
    }

    /// Create an invalid-record error
    pub fn invalid_record(model: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidRecord {
            model: model.into(),
            reason: reason.into(),
        }
    }

    /// Whether the error was caused by operator input rather than catalog data
    #[must_use]
    pub const fn is_input_error(&self) -> bool {
        matches!(
            self,
            Self::UnsupportedCriterion(_)
                | Self::UnknownAlgorithm(_)
                | Self::UnsupportedQuantity(_)
                | Self::InvalidRange { .. }
                | Self::UnknownComponent(_)
                | Self::UnknownVariant { .. }
        )
    }
}

/// Result type for catalog operations
pub type Result<T> = std::result::Result<T, CatalogError>;
