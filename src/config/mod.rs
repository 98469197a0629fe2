//! Configuration for the catalog's policy points.
//!
//! Statistics precision, rounding, extremum tie-breaking and the fallback sort
//! algorithm are not fixed by the data; they are chosen here.

use catalog_macros::CatalogEnum;
use rust_decimal::{Decimal, RoundingStrategy};

use crate::algorithm::sorting::SortAlgorithm;

/// How averages are rounded to `average_scale` decimal places
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, CatalogEnum)]
pub enum RoundingMode {
    /// Midpoints round away from zero (2.345 -> 2.35)
    #[default]
    HalfUp,
    /// Midpoints round to the even neighbour (2.345 -> 2.34)
    #[catalog(alias = "bankers")]
    HalfEven,
}

impl RoundingMode {
    const fn strategy(self) -> RoundingStrategy {
        match self {
            Self::HalfUp => RoundingStrategy::MidpointAwayFromZero,
            Self::HalfEven => RoundingStrategy::MidpointNearestEven,
        }
    }
}

/// Which record is reported when several share an extreme value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, CatalogEnum)]
pub enum TiePolicy {
    /// The first record encountered in catalog order wins
    #[default]
    FirstSeen,
    /// The last record encountered in catalog order wins
    LastSeen,
}

/// Configuration for the catalog service and its engines
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogConfig {
    /// Decimal places kept in averages
    pub average_scale: u32,
    /// Rounding applied when an average is cut to `average_scale`
    pub rounding: RoundingMode,
    /// Tie-breaking for min/max statistics
    pub tie_policy: TiePolicy,
    /// Algorithm used when a caller does not pick one
    pub default_algorithm: SortAlgorithm,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            average_scale: 2,
            rounding: RoundingMode::HalfUp,
            tie_policy: TiePolicy::FirstSeen,
            default_algorithm: SortAlgorithm::MergeSort,
        }
    }
}

impl CatalogConfig {
    /// Create a new builder for constructing a configuration
    #[must_use]
    pub fn builder() -> CatalogConfigBuilder {
        CatalogConfigBuilder::new()
    }

    /// Round an average according to the configured scale and mode
    #[must_use]
    pub fn round_average(&self, value: Decimal) -> Decimal {
        value.round_dp_with_strategy(self.average_scale, self.rounding.strategy())
    }
}

/// Builder for constructing a catalog configuration
#[derive(Debug, Clone, Default)]
pub struct CatalogConfigBuilder {
    config: CatalogConfig,
}

impl CatalogConfigBuilder {
    /// Create a new builder with default settings
    #[must_use]
    pub fn new() -> Self {
        Self {
            config: CatalogConfig::default(),
        }
    }

    /// Set the number of decimal places kept in averages
    #[must_use]
    pub const fn average_scale(mut self, scale: u32) -> Self {
        self.config.average_scale = scale;
        self
    }

    /// Set the rounding mode for averages
    #[must_use]
    pub const fn rounding(mut self, rounding: RoundingMode) -> Self {
        self.config.rounding = rounding;
        self
    }

    /// Set the extremum tie policy
    #[must_use]
    pub const fn tie_policy(mut self, policy: TiePolicy) -> Self {
        self.config.tie_policy = policy;
        self
    }

    /// Set the fallback sort algorithm
    #[must_use]
    pub const fn default_algorithm(mut self, algorithm: SortAlgorithm) -> Self {
        self.config.default_algorithm = algorithm;
        self
    }

    /// Build the configuration
    #[must_use]
    pub fn build(self) -> CatalogConfig {
        self.config
    }
}
