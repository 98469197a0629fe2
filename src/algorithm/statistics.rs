//! Aggregation engine
//!
//! Records are partitioned by a grouping key (first-seen key order) and each
//! group is reduced to one `Statistic` for the selected `Quantity`. Decimal
//! attributes are summed exactly; whole-number attributes use checked integer
//! arithmetic.

use std::borrow::Borrow;
use std::cmp::Ordering;
use std::fmt;
use std::hash::Hash;
use std::str::FromStr;

use catalog_macros::CatalogEnum;
use log::debug;
use rust_decimal::Decimal;

use crate::collections::GroupedMap;
use crate::config::{CatalogConfig, TiePolicy};
use crate::error::{CatalogError, Result};
use crate::models::Car;

/// Numeric record attribute that statistics can be computed over
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, CatalogEnum)]
pub enum NumericAttribute {
    /// Price (decimal)
    Price,
    /// Mileage (whole number)
    Mileage,
    /// Engine power (decimal)
    #[catalog(alias = "POWER")]
    EnginePower,
    /// Wheel size (whole number)
    #[catalog(alias = "WHEEL")]
    WheelSize,
}

impl NumericAttribute {
    /// Read this attribute from a record
    #[must_use]
    pub fn value_of(self, car: &Car) -> NumericValue {
        match self {
            Self::Price => NumericValue::Decimal(car.price()),
            Self::Mileage => NumericValue::Whole(u64::from(car.mileage())),
            Self::EnginePower => NumericValue::Decimal(car.engine_power()),
            Self::WheelSize => NumericValue::Whole(u64::from(car.wheel_size())),
        }
    }
}

impl FromStr for NumericAttribute {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_name(s).ok_or_else(|| CatalogError::UnsupportedQuantity(s.trim().to_string()))
    }
}

/// How a group of values is reduced to one statistic
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, CatalogEnum)]
pub enum Reduction {
    /// Sum of the values
    #[catalog(alias = "SUM")]
    Total,
    /// Sum divided by the group size, rounded per configuration
    #[catalog(alias = "AVG", alias = "MEAN")]
    Average,
    /// Smallest value and the record holding it
    #[catalog(alias = "MINIMUM")]
    Min,
    /// Largest value and the record holding it
    #[catalog(alias = "MAXIMUM")]
    Max,
    /// Number of records
    Count,
}

impl FromStr for Reduction {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_name(s).ok_or_else(|| CatalogError::UnsupportedQuantity(s.trim().to_string()))
    }
}

/// An attribute plus the reduction applied to it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Quantity {
    /// Attribute being reduced
    pub attribute: NumericAttribute,
    /// Reduction applied per group
    pub reduction: Reduction,
}

impl Quantity {
    /// Create a quantity
    #[must_use]
    pub const fn new(attribute: NumericAttribute, reduction: Reduction) -> Self {
        Self {
            attribute,
            reduction,
        }
    }
}

impl FromStr for Quantity {
    type Err = CatalogError;

    /// Parse `"<attribute>:<reduction>"` or `"<attribute> <reduction>"`
    fn from_str(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        let unsupported = || CatalogError::UnsupportedQuantity(trimmed.to_string());

        let (attribute, reduction) = trimmed
            .split_once(':')
            .or_else(|| trimmed.split_once(char::is_whitespace))
            .ok_or_else(unsupported)?;
        let attribute = NumericAttribute::from_name(attribute).ok_or_else(unsupported)?;
        let reduction = Reduction::from_name(reduction).ok_or_else(unsupported)?;

        Ok(Self::new(attribute, reduction))
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.attribute, self.reduction)
    }
}

/// A single attribute value
///
/// Values of one attribute always share a variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum NumericValue {
    /// Exact decimal (price, engine power)
    Decimal(Decimal),
    /// Whole number (mileage, wheel size)
    Whole(u64),
}

impl NumericValue {
    fn checked_add(self, other: Self) -> Option<Self> {
        match (self, other) {
            (Self::Decimal(a), Self::Decimal(b)) => a.checked_add(b).map(Self::Decimal),
            (Self::Whole(a), Self::Whole(b)) => a.checked_add(b).map(Self::Whole),
            _ => None,
        }
    }

    /// The value as a decimal
    #[must_use]
    pub fn to_decimal(self) -> Decimal {
        match self {
            Self::Decimal(value) => value,
            Self::Whole(value) => Decimal::from(value),
        }
    }
}

impl fmt::Display for NumericValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Decimal(value) => write!(f, "{value}"),
            Self::Whole(value) => write!(f, "{value}"),
        }
    }
}

/// Result of reducing one group
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Statistic {
    /// Decimal total, or any average
    Amount(Decimal),
    /// Whole-number total
    Whole(u64),
    /// Group size
    Count(usize),
    /// Minimum or maximum, with the model of the record that holds it
    Extremum {
        /// The extreme value
        value: NumericValue,
        /// Model label of the winning record
        model: String,
    },
}

impl From<NumericValue> for Statistic {
    fn from(value: NumericValue) -> Self {
        match value {
            NumericValue::Decimal(amount) => Self::Amount(amount),
            NumericValue::Whole(whole) => Self::Whole(whole),
        }
    }
}

impl fmt::Display for Statistic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Amount(amount) => write!(f, "{amount}"),
            Self::Whole(whole) => write!(f, "{whole}"),
            Self::Count(count) => write!(f, "{count}"),
            Self::Extremum { value, model } => write!(f, "{value} ({model})"),
        }
    }
}

/// Whether a candidate replaces the current extremum holder
fn displaces(candidate: Ordering, wanted: Ordering, tie_policy: TiePolicy) -> bool {
    candidate == wanted || (candidate == Ordering::Equal && tie_policy == TiePolicy::LastSeen)
}

/// Running totals for one group, seeded with its first record
struct Accumulator<'a> {
    attribute: NumericAttribute,
    tie_policy: TiePolicy,
    count: usize,
    total: NumericValue,
    min: (NumericValue, &'a Car),
    max: (NumericValue, &'a Car),
}

impl<'a> Accumulator<'a> {
    fn new(first: &'a Car, attribute: NumericAttribute, tie_policy: TiePolicy) -> Self {
        let value = attribute.value_of(first);
        Self {
            attribute,
            tie_policy,
            count: 1,
            total: value,
            min: (value, first),
            max: (value, first),
        }
    }

    fn from_records(
        records: &[&'a Car],
        attribute: NumericAttribute,
        tie_policy: TiePolicy,
    ) -> Result<Option<Self>> {
        let Some((first, rest)) = records.split_first() else {
            return Ok(None);
        };
        let mut accumulator = Self::new(first, attribute, tie_policy);
        for car in rest {
            accumulator.push(car)?;
        }
        Ok(Some(accumulator))
    }

    fn push(&mut self, car: &'a Car) -> Result<()> {
        let value = self.attribute.value_of(car);
        self.total = self
            .total
            .checked_add(value)
            .ok_or(CatalogError::ArithmeticOverflow("total"))?;
        self.count += 1;

        if displaces(value.cmp(&self.min.0), Ordering::Less, self.tie_policy) {
            self.min = (value, car);
        }
        if displaces(value.cmp(&self.max.0), Ordering::Greater, self.tie_policy) {
            self.max = (value, car);
        }
        Ok(())
    }

    fn average(&self, config: &CatalogConfig) -> Result<Decimal> {
        let count = Decimal::from(self.count);
        self.total
            .to_decimal()
            .checked_div(count)
            .map(|mean| config.round_average(mean))
            .ok_or(CatalogError::ArithmeticOverflow("average"))
    }

    fn extremum((value, car): (NumericValue, &Car)) -> Statistic {
        Statistic::Extremum {
            value,
            model: car.model().to_string(),
        }
    }

    fn finish(self, reduction: Reduction, config: &CatalogConfig) -> Result<Statistic> {
        Ok(match reduction {
            Reduction::Total => self.total.into(),
            Reduction::Average => Statistic::Amount(self.average(config)?),
            Reduction::Min => Self::extremum(self.min),
            Reduction::Max => Self::extremum(self.max),
            Reduction::Count => Statistic::Count(self.count),
        })
    }
}

/// Group records by `key_fn` and reduce every group for `quantity`
///
/// Groups appear in the order their key is first encountered. An empty input
/// yields an empty mapping for every quantity.
///
/// # Errors
/// Returns `ArithmeticOverflow` if a total or average does not fit.
pub fn aggregate<T, K, F>(
    records: &[T],
    quantity: &Quantity,
    key_fn: F,
    config: &CatalogConfig,
) -> Result<GroupedMap<K, Statistic>>
where
    T: Borrow<Car>,
    K: Eq + Hash + Clone,
    F: Fn(&Car) -> K,
{
    let mut groups: GroupedMap<K, Accumulator<'_>> = GroupedMap::new();
    for car in records.iter().map(Borrow::<Car>::borrow) {
        let key = key_fn(car);
        match groups.get_mut(&key) {
            Some(accumulator) => accumulator.push(car)?,
            None => {
                let accumulator = Accumulator::new(car, quantity.attribute, config.tie_policy);
                groups.insert(key, accumulator);
            }
        }
    }
    debug!(
        "Aggregating {quantity} over {} records in {} groups",
        records.len(),
        groups.len()
    );

    groups.try_map_values(|_, group| group.finish(quantity.reduction, config))
}

/// Every statistic of one attribute over a record set
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Summary {
    /// Attribute summarized
    pub attribute: NumericAttribute,
    /// Smallest value and its holder
    pub min: Statistic,
    /// Largest value and its holder
    pub max: Statistic,
    /// Rounded mean
    pub average: Statistic,
    /// Sum
    pub total: Statistic,
    /// Number of records
    pub count: usize,
}

impl Summary {
    /// Labelled statistics in display order
    #[must_use]
    pub fn entries(&self) -> [(&'static str, Statistic); 5] {
        [
            ("MIN", self.min.clone()),
            ("MAX", self.max.clone()),
            ("AVERAGE", self.average.clone()),
            ("TOTAL", self.total.clone()),
            ("COUNT", Statistic::Count(self.count)),
        ]
    }
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.attribute)?;
        for (label, statistic) in self.entries() {
            writeln!(f, "  {label}: {statistic}")?;
        }
        Ok(())
    }
}

/// Compute min, max, average, total and count of one attribute in one pass
///
/// Returns `None` for an empty record set.
///
/// # Errors
/// Returns `ArithmeticOverflow` if the total or average does not fit.
pub fn summarize<T: Borrow<Car>>(
    records: &[T],
    attribute: NumericAttribute,
    config: &CatalogConfig,
) -> Result<Option<Summary>> {
    let cars: Vec<&Car> = records.iter().map(Borrow::<Car>::borrow).collect();
    let Some(accumulator) = Accumulator::from_records(&cars, attribute, config.tie_policy)? else {
        return Ok(None);
    };

    Ok(Some(Summary {
        attribute,
        average: Statistic::Amount(accumulator.average(config)?),
        total: accumulator.total.into(),
        count: accumulator.count,
        min: Accumulator::extremum(accumulator.min),
        max: Accumulator::extremum(accumulator.max),
    }))
}
