//! Key extraction for ordering and grouping
//!
//! A `KeyExtractor` decouples *what* is compared (a field of the record) from
//! *how* records are ordered (the sorting strategy).

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use catalog_macros::CatalogEnum;
use rust_decimal::Decimal;

use crate::algorithm::sorting::{SortAlgorithm, SortDirection};
use crate::error::{CatalogError, Result};
use crate::models::{BodyType, Car, EngineType, TyreType};

/// Record field a sort criterion compares on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, CatalogEnum)]
pub enum SortField {
    /// Model name
    #[catalog(alias = "MODEL")]
    Name,
    /// Price
    Price,
    /// Mileage
    Mileage,
    /// Tyre type (declaration order)
    #[catalog(alias = "TYRE")]
    TyreType,
    /// Body type (declaration order)
    #[catalog(alias = "BODY")]
    BodyType,
    /// Engine type (declaration order)
    #[catalog(alias = "ENGINE")]
    EngineType,
    /// Engine power
    #[catalog(alias = "POWER")]
    EnginePower,
    /// Wheel size
    #[catalog(alias = "WHEEL")]
    WheelSize,
}

impl FromStr for SortField {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_name(s).ok_or_else(|| CatalogError::UnsupportedCriterion(s.trim().to_string()))
    }
}

/// Comparable projection of a record
///
/// One extractor always yields the same variant, so comparisons only ever
/// happen between like values.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum SortKey {
    /// Text value
    Text(String),
    /// Exact decimal value
    Amount(Decimal),
    /// Whole number
    Quantity(u32),
    /// Tyre category
    Tyre(TyreType),
    /// Body category
    Body(BodyType),
    /// Engine category
    Engine(EngineType),
}

/// Maps a record to its comparable projection for one field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyExtractor {
    field: SortField,
}

impl KeyExtractor {
    /// Create an extractor for a field
    #[must_use]
    pub const fn new(field: SortField) -> Self {
        Self { field }
    }

    /// Create an extractor from a criterion tag such as `"price"`
    ///
    /// # Errors
    /// Returns `UnsupportedCriterion` if the tag names no known field.
    pub fn for_tag(tag: &str) -> Result<Self> {
        tag.parse().map(Self::new)
    }

    /// The field this extractor reads
    #[must_use]
    pub const fn field(&self) -> SortField {
        self.field
    }

    /// Project a record onto its sort key
    #[must_use]
    pub fn extract(&self, car: &Car) -> SortKey {
        match self.field {
            SortField::Name => SortKey::Text(car.model().to_string()),
            SortField::Price => SortKey::Amount(car.price()),
            SortField::Mileage => SortKey::Quantity(car.mileage()),
            SortField::TyreType => SortKey::Tyre(car.tyre_type()),
            SortField::BodyType => SortKey::Body(car.body_type()),
            SortField::EngineType => SortKey::Engine(car.engine_type()),
            SortField::EnginePower => SortKey::Amount(car.engine_power()),
            SortField::WheelSize => SortKey::Quantity(car.wheel_size()),
        }
    }

    /// Three-way comparison of two records on this field
    ///
    /// Agrees with comparing `extract(a)` to `extract(b)` without allocating.
    #[must_use]
    pub fn compare(&self, a: &Car, b: &Car) -> Ordering {
        match self.field {
            SortField::Name => a.model().cmp(b.model()),
            SortField::Price => a.price().cmp(&b.price()),
            SortField::Mileage => a.mileage().cmp(&b.mileage()),
            SortField::TyreType => a.tyre_type().cmp(&b.tyre_type()),
            SortField::BodyType => a.body_type().cmp(&b.body_type()),
            SortField::EngineType => a.engine_type().cmp(&b.engine_type()),
            SortField::EnginePower => a.engine_power().cmp(&b.engine_power()),
            SortField::WheelSize => a.wheel_size().cmp(&b.wheel_size()),
        }
    }
}

/// A complete ordering request: field, direction and algorithm
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SortCriterion {
    /// Field to compare on
    pub field: SortField,
    /// Ascending or descending
    pub direction: SortDirection,
    /// Strategy performing the sort
    pub algorithm: SortAlgorithm,
}

impl SortCriterion {
    /// Create a criterion
    #[must_use]
    pub const fn new(field: SortField, direction: SortDirection, algorithm: SortAlgorithm) -> Self {
        Self {
            field,
            direction,
            algorithm,
        }
    }

    /// Parse a criterion from its three tags
    ///
    /// # Errors
    /// `UnsupportedCriterion`, `UnknownVariant` (direction) or `UnknownAlgorithm`.
    pub fn parse(field: &str, direction: &str, algorithm: &str) -> Result<Self> {
        Ok(Self::new(
            field.parse()?,
            direction.parse()?,
            algorithm.parse()?,
        ))
    }

    /// The key extractor for this criterion's field
    #[must_use]
    pub const fn extractor(&self) -> KeyExtractor {
        KeyExtractor::new(self.field)
    }
}

impl fmt::Display for SortCriterion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} ({})", self.field, self.direction, self.algorithm)
    }
}
