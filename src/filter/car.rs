//! Predicates over catalog cars

use std::collections::BTreeSet;

use rust_decimal::Decimal;

use crate::error::{CatalogError, Result};
use crate::filter::Filter;
use crate::models::{BodyType, Car, EngineType};

/// Inclusive price interval, validated so that `min <= max`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PriceRange {
    min: Decimal,
    max: Decimal,
}

impl PriceRange {
    /// Create a range
    ///
    /// # Errors
    /// Returns `InvalidRange` when `min > max`.
    pub fn new(min: Decimal, max: Decimal) -> Result<Self> {
        if min > max {
            return Err(CatalogError::InvalidRange { min, max });
        }
        Ok(Self { min, max })
    }

    /// Lower bound
    #[must_use]
    pub const fn min(&self) -> Decimal {
        self.min
    }

    /// Upper bound
    #[must_use]
    pub const fn max(&self) -> Decimal {
        self.max
    }

    /// Whether a price lies within the bounds, both included
    #[must_use]
    pub fn contains(&self, price: Decimal) -> bool {
        self.min <= price && price <= self.max
    }
}

/// Cars priced within a range
#[derive(Debug, Clone, Copy)]
pub struct PriceRangeFilter {
    range: PriceRange,
}

impl PriceRangeFilter {
    /// Create a new price range filter
    #[must_use]
    pub const fn new(range: PriceRange) -> Self {
        Self { range }
    }
}

impl Filter<Car> for PriceRangeFilter {
    fn matches(&self, car: &Car) -> bool {
        self.range.contains(car.price())
    }

    fn required_fields(&self) -> BTreeSet<&'static str> {
        BTreeSet::from(["price"])
    }
}

/// Cars with one body type
#[derive(Debug, Clone, Copy)]
pub struct BodyTypeFilter {
    body_type: BodyType,
}

impl BodyTypeFilter {
    /// Create a new body type filter
    #[must_use]
    pub const fn new(body_type: BodyType) -> Self {
        Self { body_type }
    }
}

impl Filter<Car> for BodyTypeFilter {
    fn matches(&self, car: &Car) -> bool {
        car.body_type() == self.body_type
    }

    fn required_fields(&self) -> BTreeSet<&'static str> {
        BTreeSet::from(["body_type"])
    }
}

/// Cars with one engine type
#[derive(Debug, Clone, Copy)]
pub struct EngineTypeFilter {
    engine_type: EngineType,
}

impl EngineTypeFilter {
    /// Create a new engine type filter
    #[must_use]
    pub const fn new(engine_type: EngineType) -> Self {
        Self { engine_type }
    }
}

impl Filter<Car> for EngineTypeFilter {
    fn matches(&self, car: &Car) -> bool {
        car.engine_type() == self.engine_type
    }

    fn required_fields(&self) -> BTreeSet<&'static str> {
        BTreeSet::from(["engine_type"])
    }
}

/// Cars whose components include every requested one, ignoring case
///
/// An empty request matches every car.
#[derive(Debug, Clone, Default)]
pub struct ComponentsFilter {
    required: Vec<String>,
}

impl ComponentsFilter {
    /// Create a new components filter
    #[must_use]
    pub fn new<I, S>(required: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            required: required.into_iter().map(Into::into).collect(),
        }
    }
}

impl Filter<Car> for ComponentsFilter {
    fn matches(&self, car: &Car) -> bool {
        car.components().is_superset_of(&self.required)
    }

    fn required_fields(&self) -> BTreeSet<&'static str> {
        BTreeSet::from(["components"])
    }
}
